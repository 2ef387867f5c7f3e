//! Error type for footprint calculations.

/// Error type for footprint calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FootprintError {
    /// A form field holds a value no formula accepts.
    #[error("invalid input for {field}: {value}")]
    InvalidInput {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// An airport code is not in the airport table.
    #[error("unknown airport: {0}")]
    UnknownAirport(String),

    /// The flight list is already full.
    #[error("at most {0} flight entries are supported")]
    TooManyFlights(usize),

    /// A flight index does not exist.
    #[error("no flight entry at index {0}")]
    NoSuchFlight(usize),

    /// Configuration error (unknown calculator, preset, ...).
    #[error("configuration error: {0}")]
    Config(String),
}

impl FootprintError {
    /// Shorthand for [`FootprintError::InvalidInput`].
    pub(crate) fn invalid(field: impl Into<String>, value: f64) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
        }
    }
}
