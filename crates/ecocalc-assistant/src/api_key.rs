//! API key handling.

use crate::error::AssistantError;

/// Environment variable holding the service key.
pub const API_KEY_ENV: &str = "ECOCALC_API_KEY";

const MIN_KEY_LEN: usize = 20;
const MAX_KEY_LEN: usize = 50;

/// Basic shape check: service keys are around 39 characters.
#[must_use]
pub fn is_valid_api_key(key: &str) -> bool {
    (MIN_KEY_LEN..=MAX_KEY_LEN).contains(&key.chars().count())
}

/// A validated API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, AssistantError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(AssistantError::MissingApiKey);
        }
        if !is_valid_api_key(&key) {
            return Err(AssistantError::InvalidApiKey(key.chars().count()));
        }
        Ok(Self(key))
    }

    /// Use `explicit` when given, otherwise read [`API_KEY_ENV`].
    pub fn resolve(explicit: Option<&str>) -> Result<Self, AssistantError> {
        match explicit {
            Some(key) => Self::new(key),
            None => std::env::var(API_KEY_ENV)
                .map_err(|_| AssistantError::MissingApiKey)
                .and_then(Self::new),
        }
    }

    /// The raw key, for request headers.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(***{} chars)", self.0.chars().count())
    }
}
