//! Housing allowance resolution
//!
//! Resolves the monthly BAH amount from the configuration and an injected
//! table. Every incomplete selection resolves to 0 rather than an error: a
//! zero housing allowance is a safe degenerate default, where an error
//! would break the whole computation.

use crate::models::{DependencyStatus, PayConfiguration, PayGrade};
use crate::tables::{BahTable, GradeBucket};

use super::math::clamp_amount;

/// A locality listing entry for one grade bucket
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityRates {
    pub locality: String,
    pub with_dependents: f64,
    pub without_dependents: f64,
}

/// Resolves monthly BAH from an injected table
#[derive(Debug)]
pub struct BahResolver {
    table: BahTable,
}

impl BahResolver {
    /// Create a resolver over a table
    pub fn new(table: BahTable) -> Self {
        Self { table }
    }

    /// Resolver over the shipped 2025 table
    pub fn year_2025() -> Self {
        Self::new(BahTable::year_2025())
    }

    /// Resolve the monthly BAH amount for a configuration
    ///
    /// Rules, in priority order:
    /// 1. BAH disabled: 0
    /// 2. Locality is the "custom" sentinel: the override, floored at 0
    /// 3. No locality selected: 0
    /// 4. Otherwise: table lookup on (grade bucket, locality) and dependency
    ///    status; an unknown locality resolves to 0
    pub fn resolve(&self, config: &PayConfiguration) -> f64 {
        if !config.bah_enabled {
            return 0.0;
        }
        if config.uses_custom_bah() {
            return clamp_amount(config.bah_custom_amount);
        }
        if config.locality_key.is_empty() {
            return 0.0;
        }
        self.rate(
            config.grade,
            &config.locality_key,
            config.dependency_status,
        )
    }

    /// Table rate for a grade, locality, and dependency status
    ///
    /// An unknown locality resolves to 0.
    pub fn rate(&self, grade: PayGrade, locality: &str, status: DependencyStatus) -> f64 {
        let bucket = GradeBucket::from_grade(grade);
        self.table
            .rate(locality, bucket)
            .map(|rate| rate.for_status(status))
            .unwrap_or(0.0)
    }

    /// Locality listing with both rates for a grade's bucket
    pub fn localities_for(&self, grade: PayGrade) -> Vec<LocalityRates> {
        let bucket = GradeBucket::from_grade(grade);
        self.table
            .localities()
            .filter_map(|locality| {
                self.table.rate(locality, bucket).map(|rate| LocalityRates {
                    locality: locality.to_string(),
                    with_dependents: rate.with_dependents,
                    without_dependents: rate.without_dependents,
                })
            })
            .collect()
    }

    /// Access the underlying table
    pub fn table(&self) -> &BahTable {
        &self.table
    }
}
