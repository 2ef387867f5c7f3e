//! Results analysis: breakdown, comparisons and reduction tips.

use serde::Serialize;

use crate::calculator::Category;
use crate::constants::reference::{
    CAR_TIP_TONNES, FLIGHTS_TIP_TONNES, FOOD_TIP_USD, HOUSE_TIP_TONNES, LOW_CARBON_TONNES,
    OFFSET_USD_PER_TONNE, TARGET_2050_TONNES, US_AVERAGE_TONNES,
};
use crate::state::FootprintState;

/// Reduction tips, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    ReduceAirTravel,
    EfficientVehicle,
    HomeEnergy,
    Diet,
    KeepItUp,
}

impl Recommendation {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ReduceAirTravel => "Reduce air travel or offset your flight emissions",
            Self::EfficientVehicle => {
                "Consider a more fuel-efficient vehicle or using public transport"
            }
            Self::HomeEnergy => "Improve home energy efficiency or switch to renewable energy",
            Self::Diet => "Reduce meat consumption or choose more local and seasonal foods",
            Self::KeepItUp => "Continue your low-carbon lifestyle and inspire others to do the same",
        }
    }
}

/// One bar of the category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub category: Category,
    pub label: &'static str,
    /// Tonnes CO2e.
    pub value: f64,
    /// Share of the total in percent; 0 when the total is 0.
    pub percentage: f64,
}

/// Everything the results step shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintReport {
    /// Tonnes CO2e.
    pub total: f64,
    /// All six categories in fixed order.
    pub breakdown: Vec<BreakdownItem>,
    pub percent_of_average: f64,
    pub offset_cost_usd: f64,
    /// How many times the 2050 per-person target the total is.
    pub target_multiple: f64,
    pub meets_target: bool,
    /// House footprint divided among household members.
    pub house_per_person: f64,
    pub recommendations: Vec<Recommendation>,
}

impl FootprintReport {
    /// Analyse the current state.
    #[must_use]
    pub fn from_state(state: &FootprintState) -> Self {
        let total = state.total();
        let breakdown = Category::ALL
            .iter()
            .map(|&category| {
                let value = state.footprint(category);
                BreakdownItem {
                    category,
                    label: category.label(),
                    value,
                    percentage: if total > 0.0 { value / total * 100.0 } else { 0.0 },
                }
            })
            .collect();

        let household = state.form().house.household_size.max(1);
        let house_per_person = state.footprint(Category::House) / f64::from(household);

        let mut recommendations = Vec::new();
        if state.footprint(Category::Flights) > FLIGHTS_TIP_TONNES {
            recommendations.push(Recommendation::ReduceAirTravel);
        }
        if state.footprint(Category::Car) > CAR_TIP_TONNES {
            recommendations.push(Recommendation::EfficientVehicle);
        }
        if state.footprint(Category::House) > HOUSE_TIP_TONNES {
            recommendations.push(Recommendation::HomeEnergy);
        }
        if state.form().spending.food > FOOD_TIP_USD {
            recommendations.push(Recommendation::Diet);
        }
        if total < LOW_CARBON_TONNES {
            recommendations.push(Recommendation::KeepItUp);
        }

        Self {
            total,
            breakdown,
            percent_of_average: total / US_AVERAGE_TONNES * 100.0,
            offset_cost_usd: total * OFFSET_USD_PER_TONNE,
            target_multiple: total / TARGET_2050_TONNES,
            meets_target: total <= TARGET_2050_TONNES,
            house_per_person,
            recommendations,
        }
    }

    /// Categories with a non-zero footprint, for share charts.
    #[must_use]
    pub fn nonzero(&self) -> Vec<&BreakdownItem> {
        self.breakdown.iter().filter(|item| item.value > 0.0).collect()
    }

    /// Whether any category has been filled in.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.breakdown.iter().any(|item| item.value > 0.0)
    }

    /// The largest contributing category, if any.
    #[must_use]
    pub fn largest(&self) -> Option<&BreakdownItem> {
        self.nonzero()
            .into_iter()
            .max_by(|a, b| a.value.total_cmp(&b.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FlightEntry, FootprintForm, VehicleInputs};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_report() {
        let report = FootprintReport::from_state(&FootprintState::new());
        assert!(!report.has_data());
        assert!(report.nonzero().is_empty());
        assert!(report.largest().is_none());
        assert_eq!(report.breakdown.len(), 6);
        assert!(report.meets_target);
        assert_eq!(report.recommendations, vec![Recommendation::KeepItUp]);
    }

    #[test]
    fn comparisons() {
        let mut form = FootprintForm::default();
        form.car = VehicleInputs::with_mileage(10_000.0 * 25.0 / 8.89 * 1.524);
        let state = FootprintState::from_form(form).unwrap();
        let report = FootprintReport::from_state(&state);
        assert!(close(report.total, 15.24));
        assert!(close(report.percent_of_average, 100.0));
        assert!(close(report.offset_cost_usd, 228.6));
        assert!(close(report.target_multiple, 7.62));
        assert!(!report.meets_target);
    }

    #[test]
    fn shares_sum_to_hundred() {
        let mut form = FootprintForm::default();
        form.house.electricity = 5000.0;
        form.flights.push(FlightEntry::new("JFK", "LHR"));
        form.spending.clothing = 800.0;
        let report = FootprintReport::from_state(&FootprintState::from_form(form).unwrap());
        let shares: f64 = report.nonzero().iter().map(|item| item.percentage).sum();
        assert!(close(shares, 100.0));
        assert_eq!(report.nonzero().len(), 3);
        assert_eq!(report.largest().unwrap().category, Category::Flights);
    }

    #[test]
    fn recommendations_in_order() {
        let mut form = FootprintForm::default();
        form.house.electricity = 10_000.0;
        form.flights.push(FlightEntry::new("JFK", "LHR"));
        form.car = VehicleInputs::with_mileage(15_000.0);
        form.spending.food = 3500.0;
        let report = FootprintReport::from_state(&FootprintState::from_form(form).unwrap());
        assert_eq!(
            report.recommendations,
            vec![
                Recommendation::ReduceAirTravel,
                Recommendation::EfficientVehicle,
                Recommendation::HomeEnergy,
                Recommendation::Diet,
            ]
        );
    }

    #[test]
    fn house_share_per_person() {
        let mut form = FootprintForm::default();
        form.house.household_size = 4;
        form.house.electricity = 4000.0;
        let report = FootprintReport::from_state(&FootprintState::from_form(form).unwrap());
        assert!(close(report.house_per_person, 0.3937));
    }

    #[test]
    fn zero_household_treated_as_one() {
        let mut form = FootprintForm::default();
        form.house.household_size = 0;
        form.house.electricity = 1000.0;
        let report = FootprintReport::from_state(&FootprintState::from_form(form).unwrap());
        assert!(close(report.house_per_person, 0.3937));
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = FootprintReport::from_state(&FootprintState::new());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("percentOfAverage").is_some());
        assert_eq!(json["breakdown"][4]["category"], "publicTransport");
        assert_eq!(json["recommendations"][0], "keepItUp");
    }
}
