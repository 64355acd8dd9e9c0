//! Payroll deductions and taxes
//!
//! TSP, insurance premiums, and FICA. All monetary sub-results of the FICA
//! computation are rounded to 2 decimals at this point; every other line
//! carries full floating precision until display.

use super::math::{clamp, clamp_amount, round2};

/// SGLI premium per $1,000 of coverage, monthly
pub const SGLI_RATE_PER_1000: f64 = 0.06;

/// Flat monthly SGLI administrative fee
pub const SGLI_ADMIN: f64 = 1.0;

/// Maximum electable SGLI coverage
pub const SGLI_MAX_COVERAGE: f64 = 500_000.0;

/// Flat monthly AFRH fee when elected
pub const AFRH_RATE: f64 = 0.50;

/// Social Security employee rate
pub const FICA_SS_RATE: f64 = 0.062;

/// Medicare employee rate
///
/// The additional 0.9% high-earner surtax is deliberately not modeled.
pub const FICA_MED_RATE: f64 = 0.0145;

/// Social Security annual wage base cap
pub const FICA_SS_WAGE_BASE_ANNUAL: f64 = 168_600.0;

/// Monthly Social Security wage cap
///
/// The annual wage base is applied naively as a flat monthly cap rather
/// than via year-to-date accumulation; this under-caps late-year high
/// earners and over-caps early-year low earners relative to true annual
/// semantics, and is preserved as-is.
pub const FICA_SS_WAGE_BASE_MONTHLY: f64 = FICA_SS_WAGE_BASE_ANNUAL / 12.0;

/// Monthly TSP contribution: a percentage of base pay only
///
/// The percentage never applies to BAH, BAS, or special pay.
pub fn tsp_monthly(base_pay: f64, tsp_percent: f64) -> f64 {
    clamp_amount(base_pay * (clamp(tsp_percent, 0.0, 100.0) / 100.0))
}

/// Monthly SGLI premium: per-$1,000 rate plus the flat administrative fee
pub fn sgli_premium(enabled: bool, coverage: f64) -> f64 {
    if !enabled {
        return 0.0;
    }
    clamp_amount((clamp(coverage, 0.0, SGLI_MAX_COVERAGE) / 1000.0) * SGLI_RATE_PER_1000 + SGLI_ADMIN)
}

/// Monthly AFRH fee
pub fn afrh_fee(enabled: bool) -> f64 {
    if enabled {
        AFRH_RATE
    } else {
        0.0
    }
}

/// FICA withholding lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FicaWithholding {
    /// Social Security portion, capped at the monthly wage cap
    pub social: f64,
    /// Medicare portion, uncapped
    pub medicare: f64,
}

/// FICA withholding on taxable wages (base + special pay only; BAH and BAS
/// are non-taxable and must be excluded by the caller)
pub fn fica(taxable_wages: f64) -> FicaWithholding {
    let taxable = clamp_amount(taxable_wages);
    let ss_taxable = taxable.min(FICA_SS_WAGE_BASE_MONTHLY);
    FicaWithholding {
        social: round2(ss_taxable * FICA_SS_RATE),
        medicare: round2(taxable * FICA_MED_RATE),
    }
}
