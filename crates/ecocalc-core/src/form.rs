//! Footprint form data model.
//!
//! Each section mirrors one step of the questionnaire. Every struct
//! deserializes with defaults for missing keys so that partially filled
//! forms load cleanly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{house, spending, transit};
use crate::vehicles::Drivetrain;

/// One `quantity × factor` term of a linear formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTerm {
    /// Field name, used in error messages.
    pub field: &'static str,
    pub quantity: f64,
    /// kg CO2e per unit of `quantity`.
    pub factor: f64,
}

const fn term(field: &'static str, quantity: f64, factor: f64) -> LinearTerm {
    LinearTerm {
        field,
        quantity,
        factor,
    }
}

/// Who is filling in the form and for which period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub country: String,
    pub state: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Profile {
    /// Length of the reporting period in days, both ends included.
    #[must_use]
    pub fn period_days(&self) -> Option<i64> {
        let (start, end) = (self.start_date?, self.end_date?);
        let days = (end - start).num_days();
        (days >= 0).then_some(days + 1)
    }
}

/// Household energy use over the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HouseInputs {
    pub household_size: u32,
    /// kWh
    pub electricity: f64,
    /// kWh
    pub natural_gas: f64,
    /// US gallons
    pub heating_oil: f64,
    /// kWh
    pub coal: f64,
    /// therms
    pub lpg: f64,
    /// US gallons
    pub propane: f64,
    /// metric tons
    pub wooden_pellets: f64,
}

impl Default for HouseInputs {
    fn default() -> Self {
        Self {
            household_size: 1,
            electricity: 0.0,
            natural_gas: 0.0,
            heating_oil: 0.0,
            coal: 0.0,
            lpg: 0.0,
            propane: 0.0,
            wooden_pellets: 0.0,
        }
    }
}

impl HouseInputs {
    #[must_use]
    pub fn terms(&self) -> [LinearTerm; 7] {
        [
            term("house.electricity", self.electricity, house::ELECTRICITY),
            term("house.naturalGas", self.natural_gas, house::NATURAL_GAS),
            term("house.heatingOil", self.heating_oil, house::HEATING_OIL),
            term("house.coal", self.coal, house::COAL),
            term("house.lpg", self.lpg, house::LPG),
            term("house.propane", self.propane, house::PROPANE),
            term("house.woodenPellets", self.wooden_pellets, house::WOODEN_PELLETS),
        ]
    }
}

/// Single or return journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Return,
    #[serde(alias = "one-way")]
    OneWay,
}

/// Cabin class of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CabinClass {
    #[default]
    Economy,
    #[serde(alias = "premium economy", alias = "premium_economy")]
    PremiumEconomy,
    Business,
    First,
}

/// One line of the flights section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightEntry {
    #[serde(rename = "type")]
    pub trip: TripType,
    pub from: String,
    pub to: String,
    pub via: Option<String>,
    #[serde(rename = "class")]
    pub cabin: CabinClass,
    pub trips: u32,
}

impl Default for FlightEntry {
    fn default() -> Self {
        Self {
            trip: TripType::Return,
            from: String::new(),
            to: String::new(),
            via: None,
            cabin: CabinClass::Economy,
            trips: 1,
        }
    }
}

impl FlightEntry {
    /// A return economy journey taken once.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    /// Both endpoints are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.from.trim().is_empty() && !self.to.trim().is_empty()
    }
}

/// Car or motorbike usage.
///
/// `efficiency` and `drivetrain` fall back to the named `model` preset, then
/// to the vehicle kind's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleInputs {
    /// Miles driven.
    pub mileage: f64,
    /// MPG, or MPGe for electric vehicles.
    pub efficiency: Option<f64>,
    pub drivetrain: Option<Drivetrain>,
    pub model: Option<String>,
}

impl VehicleInputs {
    #[must_use]
    pub fn with_mileage(mileage: f64) -> Self {
        Self {
            mileage,
            ..Self::default()
        }
    }
}

/// Public transport mileage (passenger miles).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicTransportInputs {
    pub bus: f64,
    pub coach: f64,
    pub local_train: f64,
    pub long_train: f64,
    pub tram: f64,
    pub subway: f64,
    pub taxi: f64,
}

impl PublicTransportInputs {
    #[must_use]
    pub fn terms(&self) -> [LinearTerm; 7] {
        [
            term("publicTransport.bus", self.bus, transit::BUS),
            term("publicTransport.coach", self.coach, transit::COACH),
            term("publicTransport.localTrain", self.local_train, transit::LOCAL_TRAIN),
            term("publicTransport.longTrain", self.long_train, transit::LONG_TRAIN),
            term("publicTransport.tram", self.tram, transit::TRAM),
            term("publicTransport.subway", self.subway, transit::SUBWAY),
            term("publicTransport.taxi", self.taxi, transit::TAXI),
        ]
    }
}

/// Spending per category in USD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Spending {
    pub food: f64,
    pub pharmaceuticals: f64,
    pub clothing: f64,
    pub paper_products: f64,
    pub computers: f64,
    pub electronics: f64,
    pub vehicles: f64,
    pub furniture: f64,
    pub hospitality: f64,
    pub telecommunications: f64,
    pub banking: f64,
    pub insurance: f64,
    pub education: f64,
    pub recreation: f64,
}

impl Spending {
    #[must_use]
    pub fn terms(&self) -> [LinearTerm; 14] {
        [
            term("spending.food", self.food, spending::FOOD),
            term("spending.pharmaceuticals", self.pharmaceuticals, spending::PHARMACEUTICALS),
            term("spending.clothing", self.clothing, spending::CLOTHING),
            term("spending.paperProducts", self.paper_products, spending::PAPER_PRODUCTS),
            term("spending.computers", self.computers, spending::COMPUTERS),
            term("spending.electronics", self.electronics, spending::ELECTRONICS),
            term("spending.vehicles", self.vehicles, spending::VEHICLES),
            term("spending.furniture", self.furniture, spending::FURNITURE),
            term("spending.hospitality", self.hospitality, spending::HOSPITALITY),
            term(
                "spending.telecommunications",
                self.telecommunications,
                spending::TELECOMMUNICATIONS,
            ),
            term("spending.banking", self.banking, spending::BANKING),
            term("spending.insurance", self.insurance, spending::INSURANCE),
            term("spending.education", self.education, spending::EDUCATION),
            term("spending.recreation", self.recreation, spending::RECREATION),
        ]
    }
}

/// The whole questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootprintForm {
    pub profile: Profile,
    pub house: HouseInputs,
    pub flights: Vec<FlightEntry>,
    pub car: VehicleInputs,
    pub motorbike: VehicleInputs,
    pub public_transport: PublicTransportInputs,
    pub spending: Spending,
}

impl FootprintForm {
    /// Parse a form from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the form as pretty JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
