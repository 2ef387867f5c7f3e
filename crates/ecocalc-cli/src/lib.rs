//! # ecocalc-cli
//!
//! Terminal presentation of footprint reports, product estimates and chat
//! transcripts, plus the waiting spinner and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::{ChatPresenter, EstimatePresenter, FactorPresenter, ReportPresenter};
pub use spinner::Spinner;
