//! Error type for the generative service passthrough.

/// Error type for assistant requests.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// No API key was configured.
    #[error("no API key configured; set ECOCALC_API_KEY or pass --api-key")]
    MissingApiKey,

    /// The configured key does not look like a service key.
    #[error("API key has {0} characters, expected 20 to 50")]
    InvalidApiKey(usize),

    /// A required request field is empty.
    #[error("please fill all required fields: {0} is missing")]
    MissingField(&'static str),

    /// A request parameter is out of range.
    #[error("invalid {field}: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// Transport failure talking to the service.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("API request failed with status {0}")]
    Status(u16),

    /// The response carried no candidate text.
    #[error("the service returned an empty response")]
    EmptyResponse,

    /// The candidate text is not the expected estimate JSON.
    #[error("failed to process calculation results: {0}")]
    MalformedEstimate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_error_display() {
        assert_eq!(
            AssistantError::Status(403).to_string(),
            "API request failed with status 403"
        );
        assert_eq!(
            AssistantError::MissingField("region").to_string(),
            "please fill all required fields: region is missing"
        );
        assert_eq!(
            AssistantError::InvalidApiKey(5).to_string(),
            "API key has 5 characters, expected 20 to 50"
        );
    }
}
