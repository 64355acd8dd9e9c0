//! Pay service
//!
//! Edit-recompute-persist cycle for the pay configuration. Every mutation
//! persists the full configuration and returns a freshly computed
//! breakdown; nothing is cached between edits.

use crate::engine::{LocalityRates, PayBreakdown, PayEngine};
use crate::error::{SeapayError, SeapayResult};
use crate::models::{Allotment, AllotmentId, PayConfiguration};
use crate::storage::PayConfigStore;

/// Service for pay configuration management
pub struct PayService<'a> {
    store: &'a dyn PayConfigStore,
    engine: &'a PayEngine,
}

impl<'a> PayService<'a> {
    /// Create a new pay service
    pub fn new(store: &'a dyn PayConfigStore, engine: &'a PayEngine) -> Self {
        Self { store, engine }
    }

    /// The current configuration (defaults on first use)
    pub fn config(&self) -> SeapayResult<PayConfiguration> {
        self.store.load()
    }

    /// Breakdown for the current configuration
    pub fn breakdown(&self) -> SeapayResult<PayBreakdown> {
        Ok(self.engine.breakdown(&self.config()?))
    }

    /// Apply an edit, persist, and return the fresh breakdown
    pub fn update(
        &self,
        edit: impl FnOnce(&mut PayConfiguration),
    ) -> SeapayResult<PayBreakdown> {
        let mut config = self.store.load()?;
        edit(&mut config);
        self.store.save(&config)?;
        Ok(self.engine.breakdown(&config))
    }

    /// Add an allotment and persist
    pub fn add_allotment(
        &self,
        name: impl Into<String>,
        amount: f64,
    ) -> SeapayResult<Allotment> {
        let allotment = Allotment::new(name, amount.max(0.0));
        let added = allotment.clone();
        self.update(move |config| config.allotments.push(allotment))?;
        Ok(added)
    }

    /// Remove an allotment by id and persist
    pub fn remove_allotment(&self, id: AllotmentId) -> SeapayResult<()> {
        let mut config = self.store.load()?;
        if !config.remove_allotment(id) {
            return Err(SeapayError::allotment_not_found(id.to_string()));
        }
        self.store.save(&config)?;
        Ok(())
    }

    /// BAH locality listing for the configured grade
    pub fn localities(&self) -> SeapayResult<Vec<LocalityRates>> {
        let config = self.config()?;
        Ok(self.engine.bah().localities_for(config.grade))
    }
}
