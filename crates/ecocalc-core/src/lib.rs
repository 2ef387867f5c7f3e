//! # ecocalc-core
//!
//! Core library for the EcoCalc footprint estimator.
//! Holds the emission-factor tables, the per-category calculators and the
//! aggregation model that folds them into a total.

pub mod airports;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod factors;
pub mod form;
pub mod format;
pub mod observer;
pub mod registry;
pub mod report;
pub mod state;
pub mod vehicles;

// Re-exports
pub use calculator::{Category, CategoryCalculator};
pub use constants::{exit_codes, KG_PER_TONNE};
pub use error::FootprintError;
pub use form::{FlightEntry, FootprintForm};
pub use observer::{FootprintObserver, FootprintUpdate, UpdateSubject};
pub use registry::{CalculatorFactory, DefaultFactory};
pub use report::FootprintReport;
pub use state::{CategoryTotals, FootprintState, FormUpdate};

/// Evaluate a complete form and analyse the result.
///
/// For incremental updates and observers, use [`FootprintState`] directly.
///
/// # Example
/// ```
/// let mut form = ecocalc_core::FootprintForm::default();
/// form.house.electricity = 1000.0;
/// let report = ecocalc_core::estimate(form).unwrap();
/// assert!((report.total - 0.3937).abs() < 1e-9);
/// ```
pub fn estimate(form: FootprintForm) -> Result<FootprintReport, FootprintError> {
    let state = FootprintState::from_form(form)?;
    Ok(FootprintReport::from_state(&state))
}
