//! Flat listing of every emission factor, for display.

use serde::Serialize;

use crate::constants::{flight, fuel, house, spending, transit};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorEntry {
    pub section: &'static str,
    pub key: &'static str,
    /// kg CO2e per `unit`, or a dimensionless multiplier.
    pub value: f64,
    pub unit: &'static str,
}

const fn entry(
    section: &'static str,
    key: &'static str,
    value: f64,
    unit: &'static str,
) -> FactorEntry {
    FactorEntry {
        section,
        key,
        value,
        unit,
    }
}

const HOUSE: &str = "house";
const TRAVEL: &str = "travel";
const TRANSIT: &str = "publicTransport";
const SPENDING: &str = "spending";

/// All factors, grouped by section.
#[must_use]
pub fn factor_table() -> Vec<FactorEntry> {
    vec![
        entry(HOUSE, "electricity", house::ELECTRICITY, "kg CO2e/kWh"),
        entry(HOUSE, "naturalGas", house::NATURAL_GAS, "kg CO2e/kWh"),
        entry(HOUSE, "heatingOil", house::HEATING_OIL, "kg CO2e/US gal"),
        entry(HOUSE, "coal", house::COAL, "kg CO2e/kWh"),
        entry(HOUSE, "lpg", house::LPG, "kg CO2e/therm"),
        entry(HOUSE, "propane", house::PROPANE, "kg CO2e/US gal"),
        entry(HOUSE, "woodenPellets", house::WOODEN_PELLETS, "kg CO2e/t"),
        entry(TRAVEL, "gasoline", fuel::GASOLINE_PER_GALLON, "kg CO2e/US gal"),
        entry(TRAVEL, "gridElectricity", fuel::ELECTRICITY_PER_KWH, "kg CO2e/kWh"),
        entry(TRAVEL, "gallonEquivalent", fuel::KWH_PER_GALLON_EQUIVALENT, "kWh/gal-e"),
        entry(TRAVEL, "flightEconomy", flight::ECONOMY_PER_KM, "kg CO2e/km"),
        entry(TRAVEL, "economy", flight::ECONOMY_MULTIPLIER, "x economy"),
        entry(TRAVEL, "premiumEconomy", flight::PREMIUM_ECONOMY_MULTIPLIER, "x economy"),
        entry(TRAVEL, "business", flight::BUSINESS_MULTIPLIER, "x economy"),
        entry(TRAVEL, "first", flight::FIRST_MULTIPLIER, "x economy"),
        entry(TRANSIT, "bus", transit::BUS, "kg CO2e/passenger mile"),
        entry(TRANSIT, "coach", transit::COACH, "kg CO2e/passenger mile"),
        entry(TRANSIT, "localTrain", transit::LOCAL_TRAIN, "kg CO2e/passenger mile"),
        entry(TRANSIT, "longTrain", transit::LONG_TRAIN, "kg CO2e/passenger mile"),
        entry(TRANSIT, "tram", transit::TRAM, "kg CO2e/passenger mile"),
        entry(TRANSIT, "subway", transit::SUBWAY, "kg CO2e/passenger mile"),
        entry(TRANSIT, "taxi", transit::TAXI, "kg CO2e/passenger mile"),
        entry(SPENDING, "food", spending::FOOD, "kg CO2e/USD"),
        entry(SPENDING, "pharmaceuticals", spending::PHARMACEUTICALS, "kg CO2e/USD"),
        entry(SPENDING, "clothing", spending::CLOTHING, "kg CO2e/USD"),
        entry(SPENDING, "paperProducts", spending::PAPER_PRODUCTS, "kg CO2e/USD"),
        entry(SPENDING, "computers", spending::COMPUTERS, "kg CO2e/USD"),
        entry(SPENDING, "electronics", spending::ELECTRONICS, "kg CO2e/USD"),
        entry(SPENDING, "vehicles", spending::VEHICLES, "kg CO2e/USD"),
        entry(SPENDING, "furniture", spending::FURNITURE, "kg CO2e/USD"),
        entry(SPENDING, "hospitality", spending::HOSPITALITY, "kg CO2e/USD"),
        entry(SPENDING, "telecommunications", spending::TELECOMMUNICATIONS, "kg CO2e/USD"),
        entry(SPENDING, "banking", spending::BANKING, "kg CO2e/USD"),
        entry(SPENDING, "insurance", spending::INSURANCE, "kg CO2e/USD"),
        entry(SPENDING, "education", spending::EDUCATION, "kg CO2e/USD"),
        entry(SPENDING, "recreation", spending::RECREATION, "kg CO2e/USD"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_section() {
        let table = factor_table();
        for section in [HOUSE, TRAVEL, TRANSIT, SPENDING] {
            assert!(table.iter().any(|e| e.section == section), "{section}");
        }
        assert_eq!(table.iter().filter(|e| e.section == SPENDING).count(), 14);
        assert_eq!(table.iter().filter(|e| e.section == TRANSIT).count(), 7);
    }

    #[test]
    fn every_cabin_multiplier_listed() {
        let table = factor_table();
        let multipliers: Vec<_> = table
            .iter()
            .filter(|e| e.unit == "x economy")
            .map(|e| (e.key, e.value))
            .collect();
        assert_eq!(
            multipliers,
            [
                ("economy", flight::ECONOMY_MULTIPLIER),
                ("premiumEconomy", flight::PREMIUM_ECONOMY_MULTIPLIER),
                ("business", flight::BUSINESS_MULTIPLIER),
                ("first", flight::FIRST_MULTIPLIER),
            ]
        );
    }

    #[test]
    fn keys_unique_per_section() {
        let table = factor_table();
        for (i, a) in table.iter().enumerate() {
            for b in &table[i + 1..] {
                assert!(!(a.section == b.section && a.key == b.key), "{}", a.key);
            }
        }
    }
}
