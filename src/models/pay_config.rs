//! The persisted pay configuration
//!
//! `PayConfiguration` is the user-supplied record behind both the pay view
//! and the budget view. Every field carries a serde default so a partial or
//! older record merges over defaults on load; amounts are stored as entered
//! and clamped at the point of use by the engine, never rejected.

use serde::{Deserialize, Serialize};

use super::grade::PayGrade;
use super::ids::AllotmentId;

/// Sentinel locality key selecting the user-entered custom BAH amount
pub const CUSTOM_LOCALITY: &str = "custom";

/// Dependency status for housing allowance purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStatus {
    /// With dependents
    #[default]
    With,
    /// Without dependents
    Without,
}

/// A recurring user-defined transfer tracked in the pay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allotment {
    /// Unique identifier
    #[serde(default)]
    pub id: AllotmentId,

    /// Display name (may be empty; display falls back to "Allotment")
    #[serde(default)]
    pub name: String,

    /// Monthly amount
    #[serde(default)]
    pub amount: f64,
}

impl Allotment {
    /// Create a new allotment
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: AllotmentId::new(),
            name: name.into(),
            amount,
        }
    }
}

/// The full user-supplied pay configuration (persisted record
/// `pay-configuration`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayConfiguration {
    /// Schema version for migration support
    pub schema_version: u32,

    /// Pay grade
    pub grade: PayGrade,

    /// Years of service; the engine clamps to [0, 40]
    pub years_of_service: u32,

    /// Whether BAH is included
    pub bah_enabled: bool,

    /// With/without dependents
    pub dependency_status: DependencyStatus,

    /// BAH locality row key, the sentinel "custom", or empty (no selection)
    pub locality_key: String,

    /// Custom monthly BAH, used only when `locality_key == "custom"`
    pub bah_custom_amount: f64,

    /// Whether BAS is included
    pub bas_enabled: bool,

    /// Percent of base pay to TSP (traditional + Roth combined)
    pub tsp_percent: f64,

    /// Manual federal withholding, monthly
    pub federal_monthly: f64,

    /// Manual state withholding, monthly
    pub state_monthly: f64,

    /// Whether SGLI coverage is elected
    pub sgli_enabled: bool,

    /// SGLI coverage amount, 0..=500000 in 50000 steps
    pub sgli_coverage: f64,

    /// Whether the AFRH fee applies
    pub afrh_enabled: bool,

    /// Whether special pay is included
    pub special_enabled: bool,

    /// Flat monthly special pay (sea pay, sub pay, etc.)
    pub special_monthly: f64,

    /// Recurring allotments
    pub allotments: Vec<Allotment>,
}

impl Default for PayConfiguration {
    fn default() -> Self {
        Self {
            schema_version: 1,
            grade: PayGrade::E1,
            years_of_service: 0,
            bah_enabled: true,
            dependency_status: DependencyStatus::With,
            locality_key: String::new(),
            bah_custom_amount: 0.0,
            bas_enabled: true,
            tsp_percent: 0.0,
            federal_monthly: 0.0,
            state_monthly: 0.0,
            sgli_enabled: true,
            sgli_coverage: 500_000.0,
            afrh_enabled: true,
            special_enabled: false,
            special_monthly: 0.0,
            allotments: Vec::new(),
        }
    }
}

impl PayConfiguration {
    /// Whether the locality selector points at the custom override
    pub fn uses_custom_bah(&self) -> bool {
        self.locality_key == CUSTOM_LOCALITY
    }

    /// Monthly special pay with the enable flag applied
    pub fn effective_special_monthly(&self) -> f64 {
        if self.special_enabled {
            self.special_monthly.max(0.0)
        } else {
            0.0
        }
    }

    /// Find an allotment by id
    pub fn allotment(&self, id: AllotmentId) -> Option<&Allotment> {
        self.allotments.iter().find(|a| a.id == id)
    }

    /// Remove an allotment by id, returning whether one was removed
    pub fn remove_allotment(&mut self, id: AllotmentId) -> bool {
        let before = self.allotments.len();
        self.allotments.retain(|a| a.id != id);
        self.allotments.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PayConfiguration::default();
        assert_eq!(config.grade, PayGrade::E1);
        assert_eq!(config.years_of_service, 0);
        assert!(config.bah_enabled);
        assert_eq!(config.dependency_status, DependencyStatus::With);
        assert!(config.locality_key.is_empty());
        assert!(config.bas_enabled);
        assert!(config.sgli_enabled);
        assert_eq!(config.sgli_coverage, 500_000.0);
        assert!(config.afrh_enabled);
        assert!(!config.special_enabled);
        assert!(config.allotments.is_empty());
    }

    #[test]
    fn test_merge_over_defaults() {
        // A partial record (older schema, or fields added since) still loads,
        // with everything unspecified taking its default.
        let config: PayConfiguration =
            serde_json::from_str(r#"{"grade":"E6","yearsOfService":6}"#).unwrap();
        assert_eq!(config.grade, PayGrade::E6);
        assert_eq!(config.years_of_service, 6);
        assert!(config.bah_enabled);
        assert_eq!(config.sgli_coverage, 500_000.0);
    }

    #[test]
    fn test_tolerates_unknown_fields() {
        let config: PayConfiguration =
            serde_json::from_str(r#"{"grade":"O3","someRetiredField":true}"#).unwrap();
        assert_eq!(config.grade, PayGrade::O3);
    }

    #[test]
    fn test_camel_case_round_trip() {
        let mut config = PayConfiguration::default();
        config.bah_custom_amount = 1200.0;
        config.locality_key = CUSTOM_LOCALITY.to_string();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"bahCustomAmount\":1200.0"));
        assert!(json.contains("\"localityKey\":\"custom\""));

        let back: PayConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_effective_special_monthly() {
        let mut config = PayConfiguration::default();
        config.special_monthly = 250.0;
        assert_eq!(config.effective_special_monthly(), 0.0);

        config.special_enabled = true;
        assert_eq!(config.effective_special_monthly(), 250.0);

        config.special_monthly = -10.0;
        assert_eq!(config.effective_special_monthly(), 0.0);
    }

    #[test]
    fn test_remove_allotment() {
        let mut config = PayConfiguration::default();
        let allot = Allotment::new("Rent", 500.0);
        let id = allot.id;
        config.allotments.push(allot);

        assert!(config.allotment(id).is_some());
        assert!(config.remove_allotment(id));
        assert!(!config.remove_allotment(id));
        assert!(config.allotments.is_empty());
    }
}
