//! Subsistence allowance resolution
//!
//! BAS is a flat monthly amount determined solely by tier: the officer rate
//! for grades whose label begins with "O", the enlisted rate for everyone
//! else (warrant officers draw the enlisted rate). Gated by the enable flag.

use crate::models::PayGrade;

/// 2025 monthly BAS, enlisted and warrant tiers
pub const BAS_ENLISTED: f64 = 465.77;

/// 2025 monthly BAS, officer tier
pub const BAS_OFFICER: f64 = 319.04;

/// Monthly BAS for a grade, gated by the enable flag
pub fn monthly(grade: PayGrade, enabled: bool) -> f64 {
    if !enabled {
        return 0.0;
    }
    if grade.is_officer() {
        BAS_OFFICER
    } else {
        BAS_ENLISTED
    }
}
