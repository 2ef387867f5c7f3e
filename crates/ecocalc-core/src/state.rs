//! Footprint aggregation model.
//!
//! `FootprintState` is a reducer over the questionnaire: each `FormUpdate`
//! replaces one section, the matching category is recalculated, and the total
//! is rebuilt from the six category footprints. A failed recalculation leaves
//! the state untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::calculator::Category;
use crate::constants::flight::MAX_FLIGHT_ENTRIES;
use crate::error::FootprintError;
use crate::form::{
    FlightEntry, FootprintForm, HouseInputs, Profile, PublicTransportInputs, Spending,
    VehicleInputs,
};
use crate::observer::{FootprintObserver, FootprintUpdate, UpdateSubject};
use crate::registry::{CalculatorFactory, DefaultFactory};

/// Per-category footprints in tonnes CO2e.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub house: f64,
    pub flights: f64,
    pub car: f64,
    pub motorbike: f64,
    pub public_transport: f64,
    pub secondary: f64,
}

impl CategoryTotals {
    #[must_use]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::House => self.house,
            Category::Flights => self.flights,
            Category::Car => self.car,
            Category::Motorbike => self.motorbike,
            Category::PublicTransport => self.public_transport,
            Category::Secondary => self.secondary,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::House => &mut self.house,
            Category::Flights => &mut self.flights,
            Category::Car => &mut self.car,
            Category::Motorbike => &mut self.motorbike,
            Category::PublicTransport => &mut self.public_transport,
            Category::Secondary => &mut self.secondary,
        };
        *slot = value;
    }

    /// Sum over all categories.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.house
            + self.flights
            + self.car
            + self.motorbike
            + self.public_transport
            + self.secondary
    }
}

/// A partial update replacing one form section.
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Profile(Profile),
    House(HouseInputs),
    Flights(Vec<FlightEntry>),
    Car(VehicleInputs),
    Motorbike(VehicleInputs),
    PublicTransport(PublicTransportInputs),
    Spending(Spending),
}

impl FormUpdate {
    /// The category whose footprint depends on this section, if any.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Profile(_) => None,
            Self::House(_) => Some(Category::House),
            Self::Flights(_) => Some(Category::Flights),
            Self::Car(_) => Some(Category::Car),
            Self::Motorbike(_) => Some(Category::Motorbike),
            Self::PublicTransport(_) => Some(Category::PublicTransport),
            Self::Spending(_) => Some(Category::Secondary),
        }
    }

    fn merge_into(self, form: &mut FootprintForm) {
        match self {
            Self::Profile(profile) => form.profile = profile,
            Self::House(house) => form.house = house,
            Self::Flights(flights) => form.flights = flights,
            Self::Car(car) => form.car = car,
            Self::Motorbike(motorbike) => form.motorbike = motorbike,
            Self::PublicTransport(transit) => form.public_transport = transit,
            Self::Spending(spending) => form.spending = spending,
        }
    }
}

/// The questionnaire plus its derived footprints.
pub struct FootprintState {
    form: FootprintForm,
    footprints: CategoryTotals,
    total: f64,
    factory: Arc<dyn CalculatorFactory>,
    subject: UpdateSubject,
}

impl std::fmt::Debug for FootprintState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootprintState")
            .field("form", &self.form)
            .field("footprints", &self.footprints)
            .field("total", &self.total)
            .field("observers", &self.subject.count())
            .finish_non_exhaustive()
    }
}

impl Default for FootprintState {
    fn default() -> Self {
        Self::new()
    }
}

impl FootprintState {
    /// Empty form, every footprint zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_factory(Arc::new(DefaultFactory::new()))
    }

    /// Empty state using a custom calculator factory.
    #[must_use]
    pub fn with_factory(factory: Arc<dyn CalculatorFactory>) -> Self {
        Self {
            form: FootprintForm::default(),
            footprints: CategoryTotals::default(),
            total: 0.0,
            factory,
            subject: UpdateSubject::new(),
        }
    }

    /// Evaluate every category of a complete form.
    pub fn from_form(form: FootprintForm) -> Result<Self, FootprintError> {
        let mut state = Self::new();
        if form.flights.len() > MAX_FLIGHT_ENTRIES {
            return Err(FootprintError::TooManyFlights(MAX_FLIGHT_ENTRIES));
        }
        state.form = form;
        state.recompute_all()?;
        Ok(state)
    }

    /// Register an observer for subsequent updates.
    pub fn subscribe(&self, observer: Arc<dyn FootprintObserver>) {
        self.subject.register(observer);
    }

    #[must_use]
    pub fn form(&self) -> &FootprintForm {
        &self.form
    }

    #[must_use]
    pub fn footprints(&self) -> &CategoryTotals {
        &self.footprints
    }

    /// Footprint of one category in tonnes.
    #[must_use]
    pub fn footprint(&self, category: Category) -> f64 {
        self.footprints.get(category)
    }

    /// Total footprint in tonnes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Merge a section update and recalculate. Returns the new total.
    pub fn apply(&mut self, update: FormUpdate) -> Result<f64, FootprintError> {
        if let FormUpdate::Flights(flights) = &update {
            if flights.len() > MAX_FLIGHT_ENTRIES {
                return Err(FootprintError::TooManyFlights(MAX_FLIGHT_ENTRIES));
            }
        }

        let category = update.category();
        let mut candidate = self.form.clone();
        update.merge_into(&mut candidate);

        let Some(category) = category else {
            self.form = candidate;
            return Ok(self.total);
        };

        let footprint = self.factory.for_category(category)?.calculate(&candidate)?;
        self.form = candidate;
        self.commit(category, footprint);
        Ok(self.total)
    }

    /// Append a flight entry.
    pub fn add_flight(&mut self, entry: FlightEntry) -> Result<f64, FootprintError> {
        if self.form.flights.len() >= MAX_FLIGHT_ENTRIES {
            return Err(FootprintError::TooManyFlights(MAX_FLIGHT_ENTRIES));
        }
        let mut flights = self.form.flights.clone();
        flights.push(entry);
        self.apply(FormUpdate::Flights(flights))
    }

    /// Replace the flight entry at `index`.
    pub fn update_flight(
        &mut self,
        index: usize,
        entry: FlightEntry,
    ) -> Result<f64, FootprintError> {
        let mut flights = self.form.flights.clone();
        let slot = flights
            .get_mut(index)
            .ok_or(FootprintError::NoSuchFlight(index))?;
        *slot = entry;
        self.apply(FormUpdate::Flights(flights))
    }

    /// Remove the flight entry at `index`.
    pub fn remove_flight(&mut self, index: usize) -> Result<f64, FootprintError> {
        if index >= self.form.flights.len() {
            return Err(FootprintError::NoSuchFlight(index));
        }
        let mut flights = self.form.flights.clone();
        flights.remove(index);
        self.apply(FormUpdate::Flights(flights))
    }

    /// Recalculate every category from the current form.
    pub fn recompute_all(&mut self) -> Result<f64, FootprintError> {
        let mut footprints = CategoryTotals::default();
        for category in Category::ALL {
            let calc = self.factory.for_category(category)?;
            footprints.set(category, calc.calculate(&self.form)?);
        }
        for category in Category::ALL {
            self.commit(category, footprints.get(category));
        }
        Ok(self.total)
    }

    fn commit(&mut self, category: Category, footprint: f64) {
        self.footprints.set(category, footprint);
        self.total = self.footprints.sum();
        self.subject.notify(&FootprintUpdate {
            category,
            footprint,
            total: self.total,
        });
    }
}
