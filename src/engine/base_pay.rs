//! Base pay resolution
//!
//! Resolves (grade, years of service) to a monthly base pay amount against
//! an injected table. Years of service floors to the nearest band at or
//! below it; a sparse row walks down to the nearest lower band with a
//! value. A grade with no row, or no filled band, resolves to 0 with a
//! one-time diagnostic per grade — a usable figure always comes back, so
//! missing data never punches holes in the financial totals.

use std::collections::HashSet;
use std::sync::RwLock;

use crate::models::PayGrade;
use crate::tables::{yos_band, BasePayTable};

use super::math::clamp;

/// Resolves monthly base pay from an injected table
#[derive(Debug)]
pub struct BasePayResolver {
    table: BasePayTable,
    warned: RwLock<HashSet<PayGrade>>,
}

impl BasePayResolver {
    /// Create a resolver over a table
    pub fn new(table: BasePayTable) -> Self {
        Self {
            table,
            warned: RwLock::new(HashSet::new()),
        }
    }

    /// Resolver over the shipped 2025 table
    pub fn year_2025() -> Self {
        Self::new(BasePayTable::year_2025())
    }

    /// Monthly base pay for a grade and years of service
    ///
    /// Years of service is clamped to [0, 40] before band selection.
    pub fn monthly(&self, grade: PayGrade, years_of_service: u32) -> f64 {
        let yos = clamp(years_of_service as f64, 0.0, 40.0) as u32;
        let band = yos_band(yos);

        let Some(row) = self.table.bands_for(grade) else {
            self.warn_once(grade, "no base pay row for grade");
            return 0.0;
        };

        if let Some(exact) = row.get(&band) {
            return *exact;
        }

        // Walk down to the nearest lower band that exists
        if let Some((_, value)) = row.range(..=band).next_back() {
            return *value;
        }

        self.warn_once(grade, "no filled bands for grade");
        0.0
    }

    /// Access the underlying table
    pub fn table(&self) -> &BasePayTable {
        &self.table
    }

    fn warn_once(&self, grade: PayGrade, message: &str) {
        let already = self
            .warned
            .read()
            .map(|set| set.contains(&grade))
            .unwrap_or(true);
        if already {
            return;
        }
        if let Ok(mut set) = self.warned.write() {
            if set.insert(grade) {
                tracing::warn!(grade = %grade, "{}; resolving to 0", message);
            }
        }
    }
}
