//! EcoCalc library: application logic for the footprint calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod persist;
