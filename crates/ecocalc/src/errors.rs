//! Error handling and exit codes.

use ecocalc_assistant::AssistantError;
use ecocalc_core::exit_codes;
use ecocalc_core::FootprintError;

/// Exit code for a footprint error. Every variant is bad input.
pub fn footprint_exit_code(err: &FootprintError) -> i32 {
    match err {
        FootprintError::InvalidInput { .. }
        | FootprintError::UnknownAirport(_)
        | FootprintError::TooManyFlights(_)
        | FootprintError::NoSuchFlight(_)
        | FootprintError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an assistant error.
pub fn assistant_exit_code(err: &AssistantError) -> i32 {
    match err {
        AssistantError::MissingApiKey
        | AssistantError::InvalidApiKey(_)
        | AssistantError::MissingField(_)
        | AssistantError::InvalidParameter { .. } => exit_codes::ERROR_CONFIG,
        AssistantError::Http(_)
        | AssistantError::Status(_)
        | AssistantError::EmptyResponse
        | AssistantError::MalformedEstimate(_) => exit_codes::ERROR_ASSISTANT,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<FootprintError>() {
            return footprint_exit_code(e);
        }
        if let Some(e) = cause.downcast_ref::<AssistantError>() {
            return assistant_exit_code(e);
        }
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn error_codes() {
        assert_eq!(footprint_exit_code(&FootprintError::UnknownAirport("XXX".into())), 4);
        assert_eq!(assistant_exit_code(&AssistantError::Status(500)), 2);
        assert_eq!(assistant_exit_code(&AssistantError::MissingApiKey), 4);
        assert_eq!(assistant_exit_code(&AssistantError::EmptyResponse), 2);
    }

    #[test]
    fn exit_code_through_context() {
        let err = Err::<(), _>(AssistantError::Status(503))
            .context("carbon estimate")
            .unwrap_err();
        assert_eq!(exit_code(&err), exit_codes::ERROR_ASSISTANT);

        let err = anyhow::Error::new(FootprintError::TooManyFlights(3));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);

        assert_eq!(exit_code(&anyhow::anyhow!("boom")), exit_codes::ERROR_GENERIC);
    }
}
