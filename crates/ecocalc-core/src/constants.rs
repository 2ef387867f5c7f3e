//! Emission factors and reference values.
//!
//! All factors are kg CO2e per unit of the quantity they multiply. Category
//! footprints are reported in metric tonnes, hence `KG_PER_TONNE`.

/// Kilograms in a metric tonne.
pub const KG_PER_TONNE: f64 = 1000.0;

/// Household energy factors.
pub mod house {
    /// Per kWh of grid electricity.
    pub const ELECTRICITY: f64 = 0.3937;
    /// Per kWh of natural gas.
    pub const NATURAL_GAS: f64 = 0.2;
    /// Per US gallon of heating oil.
    pub const HEATING_OIL: f64 = 10.15;
    /// Per kWh of coal.
    pub const COAL: f64 = 0.36;
    /// Per therm of LPG.
    pub const LPG: f64 = 1.51;
    /// Per US gallon of propane.
    pub const PROPANE: f64 = 5.74;
    /// Per metric ton of wooden pellets.
    pub const WOODEN_PELLETS: f64 = 165.0;
}

/// Road fuel factors shared by cars and motorbikes.
pub mod fuel {
    /// Per US gallon of gasoline.
    pub const GASOLINE_PER_GALLON: f64 = 8.89;
    /// Per kWh charged from the grid.
    pub const ELECTRICITY_PER_KWH: f64 = 0.3937;
    /// Energy content of one gallon-equivalent, used to turn MPGe into kWh/mile.
    pub const KWH_PER_GALLON_EQUIVALENT: f64 = 33.7;
    /// Default car efficiency (MPG).
    pub const DEFAULT_CAR_MPG: f64 = 25.0;
    /// Default motorbike efficiency (MPG).
    pub const DEFAULT_MOTORBIKE_MPG: f64 = 50.0;
}

/// Flight factors.
pub mod flight {
    /// Per passenger km in economy.
    pub const ECONOMY_PER_KM: f64 = 0.2;
    pub const ECONOMY_MULTIPLIER: f64 = 1.0;
    pub const PREMIUM_ECONOMY_MULTIPLIER: f64 = 1.6;
    pub const BUSINESS_MULTIPLIER: f64 = 2.9;
    pub const FIRST_MULTIPLIER: f64 = 4.0;
    /// Mean Earth radius for great-circle distances.
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Flight entries a form may hold.
    pub const MAX_FLIGHT_ENTRIES: usize = 3;
}

/// Public transport factors, per passenger mile.
pub mod transit {
    pub const BUS: f64 = 0.107;
    pub const COACH: f64 = 0.027;
    pub const LOCAL_TRAIN: f64 = 0.041;
    pub const LONG_TRAIN: f64 = 0.033;
    pub const TRAM: f64 = 0.041;
    pub const SUBWAY: f64 = 0.041;
    pub const TAXI: f64 = 0.192;
}

/// Secondary (spending-based) factors, per USD.
pub mod spending {
    pub const FOOD: f64 = 0.56;
    pub const PHARMACEUTICALS: f64 = 0.31;
    pub const CLOTHING: f64 = 0.45;
    pub const PAPER_PRODUCTS: f64 = 0.49;
    pub const COMPUTERS: f64 = 0.52;
    pub const ELECTRONICS: f64 = 0.42;
    pub const VEHICLES: f64 = 0.53;
    pub const FURNITURE: f64 = 0.41;
    pub const HOSPITALITY: f64 = 0.44;
    pub const TELECOMMUNICATIONS: f64 = 0.28;
    pub const BANKING: f64 = 0.11;
    pub const INSURANCE: f64 = 0.09;
    pub const EDUCATION: f64 = 0.25;
    pub const RECREATION: f64 = 0.38;
}

/// Reference values used by the results analysis.
pub mod reference {
    /// Average annual footprint of a US resident, tonnes CO2e.
    pub const US_AVERAGE_TONNES: f64 = 15.24;
    /// Approximate price of offsetting one tonne, USD.
    pub const OFFSET_USD_PER_TONNE: f64 = 15.0;
    /// Per-person footprint needed by 2050 to stay within 1.5°C, tonnes.
    pub const TARGET_2050_TONNES: f64 = 2.0;

    /// Flights above this (tonnes) trigger the air-travel tip.
    pub const FLIGHTS_TIP_TONNES: f64 = 1.0;
    /// Car footprint above this (tonnes) triggers the vehicle tip.
    pub const CAR_TIP_TONNES: f64 = 2.0;
    /// House footprint above this (tonnes) triggers the home-energy tip.
    pub const HOUSE_TIP_TONNES: f64 = 3.0;
    /// Food spending above this (USD) triggers the diet tip.
    pub const FOOD_TIP_USD: f64 = 3000.0;
    /// Totals below this (tonnes) get the encouragement line.
    pub const LOW_CARBON_TONNES: f64 = 1.0;
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The generative service failed or returned something unusable.
    pub const ERROR_ASSISTANT: i32 = 2;
    /// Invalid configuration or input.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cabin_multipliers_increase() {
        assert!(flight::ECONOMY_MULTIPLIER < flight::PREMIUM_ECONOMY_MULTIPLIER);
        assert!(flight::PREMIUM_ECONOMY_MULTIPLIER < flight::BUSINESS_MULTIPLIER);
        assert!(flight::BUSINESS_MULTIPLIER < flight::FIRST_MULTIPLIER);
    }

    #[test]
    fn grid_factor_shared_between_house_and_fuel() {
        assert!((house::ELECTRICITY - fuel::ELECTRICITY_PER_KWH).abs() < f64::EPSILON);
    }
}
