//! Observer pattern for footprint updates.
//!
//! The aggregation model notifies a `UpdateSubject` every time a category
//! footprint is recomputed.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::calculator::Category;

/// A recomputed category footprint together with the new total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintUpdate {
    pub category: Category,
    /// Tonnes CO2e.
    pub footprint: f64,
    /// Tonnes CO2e across all categories.
    pub total: f64,
}

/// Observer trait for receiving footprint updates.
pub trait FootprintObserver: Send + Sync {
    /// Receive an update.
    fn on_update(&self, update: &FootprintUpdate);
}

/// Subject that manages a collection of observers.
pub struct UpdateSubject {
    observers: RwLock<Vec<Arc<dyn FootprintObserver>>>,
}

impl UpdateSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer.
    pub fn register(&self, observer: Arc<dyn FootprintObserver>) {
        self.observers.write().push(observer);
    }

    /// Unregister all observers.
    pub fn clear(&self) {
        self.observers.write().clear();
    }

    /// Notify all observers of an update.
    pub fn notify(&self, update: &FootprintUpdate) {
        let observers = self.observers.read();
        for observer in observers.iter() {
            observer.on_update(update);
        }
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.read().len()
    }
}

impl Default for UpdateSubject {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer that ignores every update.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FootprintObserver for NoOpObserver {
    fn on_update(&self, _update: &FootprintUpdate) {}
}

/// Observer that logs updates at debug level.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl FootprintObserver for LoggingObserver {
    fn on_update(&self, update: &FootprintUpdate) {
        tracing::debug!(
            category = %update.category,
            footprint = update.footprint,
            total = update.total,
            "footprint updated"
        );
    }
}

/// Observer that keeps every update it receives.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    history: Mutex<Vec<FootprintUpdate>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<FootprintUpdate> {
        self.history.lock().clone()
    }

    /// The most recent update.
    #[must_use]
    pub fn last(&self) -> Option<FootprintUpdate> {
        self.history.lock().last().copied()
    }
}

impl FootprintObserver for RecordingObserver {
    fn on_update(&self, update: &FootprintUpdate) {
        self.history.lock().push(*update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(total: f64) -> FootprintUpdate {
        FootprintUpdate {
            category: Category::Car,
            footprint: total,
            total,
        }
    }

    #[test]
    fn subject_register_and_clear() {
        let subject = UpdateSubject::new();
        assert_eq!(subject.count(), 0);
        subject.register(Arc::new(NoOpObserver::new()));
        subject.register(Arc::new(LoggingObserver));
        assert_eq!(subject.count(), 2);
        subject.clear();
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn subject_notifies_all() {
        let subject = UpdateSubject::default();
        let a = Arc::new(RecordingObserver::new());
        let b = Arc::new(RecordingObserver::new());
        subject.register(a.clone());
        subject.register(b.clone());

        subject.notify(&update(1.0));
        subject.notify(&update(2.5));

        assert_eq!(a.history().len(), 2);
        assert_eq!(b.last(), Some(update(2.5)));
    }

    #[test]
    fn notify_without_observers() {
        UpdateSubject::new().notify(&update(0.0));
    }
}
