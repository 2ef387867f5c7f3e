//! Category calculators.
//!
//! Every category is a linear formula over one form section. `CategoryCalculator`
//! is the trait consumed by the registry and the aggregation model; the
//! concrete calculators below implement it.

use serde::{Deserialize, Serialize};

use crate::airports::journey_distance_km;
use crate::constants::flight::{
    BUSINESS_MULTIPLIER, ECONOMY_MULTIPLIER, ECONOMY_PER_KM, FIRST_MULTIPLIER,
    PREMIUM_ECONOMY_MULTIPLIER,
};
use crate::constants::fuel::{
    ELECTRICITY_PER_KWH, GASOLINE_PER_GALLON, KWH_PER_GALLON_EQUIVALENT,
};
use crate::constants::KG_PER_TONNE;
use crate::error::FootprintError;
use crate::form::{CabinClass, FlightEntry, FootprintForm, LinearTerm, TripType, VehicleInputs};
use crate::vehicles::{find_preset, Drivetrain, VehicleKind};

/// Footprint categories, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    House,
    Flights,
    Car,
    Motorbike,
    PublicTransport,
    Secondary,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::House,
        Category::Flights,
        Category::Car,
        Category::Motorbike,
        Category::PublicTransport,
        Category::Secondary,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Flights => "Flights",
            Self::Car => "Car",
            Self::Motorbike => "Motorbike",
            Self::PublicTransport => "Public Transport",
            Self::Secondary => "Secondary",
        }
    }

    /// Registry key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Flights => "flights",
            Self::Car => "car",
            Self::Motorbike => "motorbike",
            Self::PublicTransport => "publictransport",
            Self::Secondary => "secondary",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A calculator for one footprint category.
pub trait CategoryCalculator: Send + Sync {
    /// Footprint of this category in tonnes CO2e.
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError>;

    /// The category this calculator fills.
    fn category(&self) -> Category;

    /// Name of this calculator.
    fn name(&self) -> &str;
}

fn check(field: &str, value: f64) -> Result<f64, FootprintError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FootprintError::invalid(field, value))
    }
}

/// Sum of `quantity × factor` in kg, converted to tonnes.
pub fn linear_tonnes(terms: &[LinearTerm]) -> Result<f64, FootprintError> {
    let mut kg = 0.0;
    for t in terms {
        kg += check(t.field, t.quantity)? * t.factor;
    }
    Ok(kg / KG_PER_TONNE)
}

/// Household energy.
#[derive(Debug, Default)]
pub struct HouseCalculator;

impl CategoryCalculator for HouseCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        linear_tonnes(&form.house.terms())
    }

    fn category(&self) -> Category {
        Category::House
    }

    fn name(&self) -> &str {
        "House"
    }
}

fn cabin_multiplier(cabin: CabinClass) -> f64 {
    match cabin {
        CabinClass::Economy => ECONOMY_MULTIPLIER,
        CabinClass::PremiumEconomy => PREMIUM_ECONOMY_MULTIPLIER,
        CabinClass::Business => BUSINESS_MULTIPLIER,
        CabinClass::First => FIRST_MULTIPLIER,
    }
}

/// Footprint of one flight entry in tonnes. Incomplete entries count as zero.
pub fn flight_footprint(entry: &FlightEntry) -> Result<f64, FootprintError> {
    if !entry.is_complete() {
        return Ok(0.0);
    }
    let distance = journey_distance_km(&entry.from, &entry.to, entry.via.as_deref())?;
    let legs = match entry.trip {
        TripType::Return => 2.0,
        TripType::OneWay => 1.0,
    };
    let kg =
        distance * ECONOMY_PER_KM * cabin_multiplier(entry.cabin) * f64::from(entry.trips) * legs;
    Ok(kg / KG_PER_TONNE)
}

/// Air travel.
#[derive(Debug, Default)]
pub struct FlightsCalculator;

impl CategoryCalculator for FlightsCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        form.flights.iter().map(flight_footprint).sum()
    }

    fn category(&self) -> Category {
        Category::Flights
    }

    fn name(&self) -> &str {
        "Flights"
    }
}

/// Efficiency and drivetrain after applying preset and kind defaults.
pub fn resolve_vehicle(
    kind: VehicleKind,
    inputs: &VehicleInputs,
) -> Result<(f64, Drivetrain), FootprintError> {
    let preset = match inputs.model.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() && !name.eq_ignore_ascii_case("custom") => Some(
            find_preset(kind, name)
                .ok_or_else(|| FootprintError::Config(format!("unknown vehicle model: {name}")))?,
        ),
        _ => None,
    };
    let efficiency = inputs
        .efficiency
        .or(preset.map(|p| p.efficiency))
        .unwrap_or_else(|| kind.default_efficiency());
    let drivetrain = inputs
        .drivetrain
        .or(preset.map(|p| p.drivetrain))
        .unwrap_or_default();
    Ok((efficiency, drivetrain))
}

/// Road vehicle footprint in tonnes.
pub fn vehicle_footprint(
    kind: VehicleKind,
    inputs: &VehicleInputs,
    field: &str,
) -> Result<f64, FootprintError> {
    let mileage = check(&format!("{field}.mileage"), inputs.mileage)?;
    let (efficiency, drivetrain) = resolve_vehicle(kind, inputs)?;
    let efficiency = check(&format!("{field}.efficiency"), efficiency)?;
    if mileage == 0.0 || efficiency == 0.0 {
        return Ok(0.0);
    }
    let kg = match drivetrain {
        Drivetrain::Combustion => mileage / efficiency * GASOLINE_PER_GALLON,
        Drivetrain::Electric => {
            mileage * (KWH_PER_GALLON_EQUIVALENT / efficiency) * ELECTRICITY_PER_KWH
        }
    };
    Ok(kg / KG_PER_TONNE)
}

/// Car travel.
#[derive(Debug, Default)]
pub struct CarCalculator;

impl CategoryCalculator for CarCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        vehicle_footprint(VehicleKind::Car, &form.car, "car")
    }

    fn category(&self) -> Category {
        Category::Car
    }

    fn name(&self) -> &str {
        "Car"
    }
}

/// Motorbike travel.
#[derive(Debug, Default)]
pub struct MotorbikeCalculator;

impl CategoryCalculator for MotorbikeCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        vehicle_footprint(VehicleKind::Motorbike, &form.motorbike, "motorbike")
    }

    fn category(&self) -> Category {
        Category::Motorbike
    }

    fn name(&self) -> &str {
        "Motorbike"
    }
}

/// Bus, rail and taxi.
#[derive(Debug, Default)]
pub struct PublicTransportCalculator;

impl CategoryCalculator for PublicTransportCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        linear_tonnes(&form.public_transport.terms())
    }

    fn category(&self) -> Category {
        Category::PublicTransport
    }

    fn name(&self) -> &str {
        "PublicTransport"
    }
}

/// Spending-based footprint.
#[derive(Debug, Default)]
pub struct SecondaryCalculator;

impl CategoryCalculator for SecondaryCalculator {
    fn calculate(&self, form: &FootprintForm) -> Result<f64, FootprintError> {
        linear_tonnes(&form.spending.terms())
    }

    fn category(&self) -> Category {
        Category::Secondary
    }

    fn name(&self) -> &str {
        "Secondary"
    }
}
