//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{
    CarCalculator, Category, CategoryCalculator, FlightsCalculator, HouseCalculator,
    MotorbikeCalculator, PublicTransportCalculator, SecondaryCalculator,
};
use crate::error::FootprintError;

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn CategoryCalculator>, FootprintError>;

    /// List all available calculator names, in report order.
    fn available(&self) -> Vec<&str>;

    /// The calculator for a category.
    fn for_category(
        &self,
        category: Category,
    ) -> Result<Arc<dyn CategoryCalculator>, FootprintError> {
        self.get(category.key())
    }
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn CategoryCalculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn canonical(name: &str) -> String {
        name.trim().to_ascii_lowercase().replace(['-', '_', ' '], "")
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn CategoryCalculator>, FootprintError> {
        match name {
            "house" => Ok(Arc::new(HouseCalculator)),
            "flights" => Ok(Arc::new(FlightsCalculator)),
            "car" => Ok(Arc::new(CarCalculator)),
            "motorbike" => Ok(Arc::new(MotorbikeCalculator)),
            "publictransport" => Ok(Arc::new(PublicTransportCalculator)),
            "secondary" => Ok(Arc::new(SecondaryCalculator)),
            _ => Err(FootprintError::Config(format!("unknown calculator: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn CategoryCalculator>, FootprintError> {
        let key = Self::canonical(name);
        if let Some(calc) = self.cache.read().get(&key) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(&key)?;
        self.cache.write().insert(key, Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        Category::ALL.iter().map(|c| c.key()).collect()
    }
}

/// Get the calculators to run for a selection: `"all"` or a single name.
pub fn select_calculators(
    selection: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn CategoryCalculator>>, FootprintError> {
    if selection.trim().eq_ignore_ascii_case("all") {
        factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect()
    } else {
        Ok(vec![factory.get(selection)?])
    }
}
