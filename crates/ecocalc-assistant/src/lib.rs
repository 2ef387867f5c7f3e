//! Generative-AI passthrough: product footprint estimates and the
//! footprint chatbot.
//!
//! Requests are built locally and sent through a [`GenerativeBackend`].
//! [`GeminiClient`] calls the hosted `generateContent` API;
//! [`SampleBackend`] answers offline with fixed sample data.

pub mod api_key;
pub mod backend;
pub mod chat;
pub mod error;
pub mod estimate;
pub mod prompts;
pub mod wire;

pub use api_key::{ApiKey, API_KEY_ENV};
pub use backend::{ClientSettings, GeminiClient, GenerativeBackend, SampleBackend};
pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use error::AssistantError;
pub use estimate::{
    CarbonEstimateRequest, EstimateShare, Estimator, Irrigation, ProductEstimate,
    ProductionMethod, WaterEstimateRequest,
};
