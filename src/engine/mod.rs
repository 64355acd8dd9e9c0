//! The pay computation engine
//!
//! A pure function from the user's pay configuration and the static tables
//! to a monthly pay breakdown. Every configuration change recomputes the
//! whole breakdown; nothing is cached between calls, so identical inputs
//! always produce bit-identical output.
//!
//! Conventions the engine guarantees:
//! - every negative or non-finite input clamps to 0 before entering a total
//! - FICA lines are rounded to 2 decimals at the point of computation;
//!   every other line carries full floating precision until display
//! - net pay excludes allotments; allotments are totalled separately

pub mod bah;
pub mod bas;
pub mod base_pay;
pub mod deductions;
pub mod math;

pub use bah::{BahResolver, LocalityRates};
pub use base_pay::BasePayResolver;

use crate::models::PayConfiguration;
use crate::tables::{BahTable, BasePayTable};

use math::clamp_amount;

/// Options to the aggregator supplied by the caller alongside the
/// configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayOptions {
    /// Whether BAS is included
    pub bas_enabled: bool,
    /// Flat monthly special pay
    pub special_monthly: f64,
}

impl Default for PayOptions {
    fn default() -> Self {
        Self {
            bas_enabled: true,
            special_monthly: 0.0,
        }
    }
}

impl PayOptions {
    /// Options as recorded in a configuration
    pub fn from_config(config: &PayConfiguration) -> Self {
        Self {
            bas_enabled: config.bas_enabled,
            special_monthly: config.effective_special_monthly(),
        }
    }
}

/// A fully derived monthly pay breakdown
///
/// Immutable output of one computation; never persisted, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PayBreakdown {
    // Entitlements
    pub base: f64,
    pub bah: f64,
    pub bas: f64,
    pub special_monthly: f64,

    // Deductions (positive amounts)
    pub federal_monthly: f64,
    pub state_monthly: f64,
    pub tsp_monthly: f64,
    pub insurance_monthly: f64,
    pub fica_social_monthly: f64,
    pub fica_medicare_monthly: f64,

    // Allotments (reported separately, never subtracted from net)
    pub allotments_monthly: f64,

    // Roll-ups
    pub total_entitlements: f64,
    pub total_deductions_excl_allotments: f64,
    pub net_monthly_excl_allotments: f64,

    /// Net divided by two, on the twice-monthly paycheck convention
    pub per_paycheck: f64,
}

/// Compute the monthly pay breakdown
///
/// `resolved_bah` is the table amount already resolved for the selected
/// locality and dependency status; when the configuration selects the
/// custom override, the override wins here regardless.
pub fn compute_pay(
    base_pay: &BasePayResolver,
    config: &PayConfiguration,
    resolved_bah: f64,
    opts: PayOptions,
) -> PayBreakdown {
    let special_monthly = clamp_amount(opts.special_monthly);

    // Base pay from the table (already monthly)
    let base = clamp_amount(base_pay.monthly(config.grade, config.years_of_service));

    // BAS from the tier, applied iff enabled
    let bas = bas::monthly(config.grade, opts.bas_enabled);

    // BAH from the resolved table amount or the custom override
    let bah = if config.bah_enabled {
        clamp_amount(if config.uses_custom_bah() {
            config.bah_custom_amount
        } else {
            resolved_bah
        })
    } else {
        0.0
    };

    // Manual withholding pass-through
    let federal_monthly = clamp_amount(config.federal_monthly);
    let state_monthly = clamp_amount(config.state_monthly);

    let tsp_monthly = deductions::tsp_monthly(base, config.tsp_percent);

    let sgli = deductions::sgli_premium(config.sgli_enabled, config.sgli_coverage);
    let afrh = deductions::afrh_fee(config.afrh_enabled);
    let insurance_monthly = clamp_amount(sgli + afrh);

    // FICA applies to base + special only; BAH and BAS are non-taxable
    let withheld = deductions::fica(base + special_monthly);

    let allotments_monthly = clamp_amount(
        config
            .allotments
            .iter()
            .map(|a| if a.amount.is_finite() { a.amount } else { 0.0 })
            .sum(),
    );

    let total_entitlements = clamp_amount(base + bah + bas + special_monthly);
    let total_deductions_excl_allotments = clamp_amount(
        federal_monthly
            + state_monthly
            + tsp_monthly
            + insurance_monthly
            + withheld.social
            + withheld.medicare,
    );
    let net_monthly_excl_allotments =
        clamp_amount(total_entitlements - total_deductions_excl_allotments);

    PayBreakdown {
        base,
        bah,
        bas,
        special_monthly,
        federal_monthly,
        state_monthly,
        tsp_monthly,
        insurance_monthly,
        fica_social_monthly: withheld.social,
        fica_medicare_monthly: withheld.medicare,
        allotments_monthly,
        total_entitlements,
        total_deductions_excl_allotments,
        net_monthly_excl_allotments,
        per_paycheck: net_monthly_excl_allotments / 2.0,
    }
}

/// The resolvers bundled behind one handle
///
/// Both the pay view and the budget view derive their numbers through this
/// type, so the two views can never disagree about the rules.
#[derive(Debug)]
pub struct PayEngine {
    base_pay: BasePayResolver,
    bah: BahResolver,
}

impl PayEngine {
    /// Build an engine over explicit tables
    pub fn new(base_pay: BasePayTable, bah: BahTable) -> Self {
        Self {
            base_pay: BasePayResolver::new(base_pay),
            bah: BahResolver::new(bah),
        }
    }

    /// Engine over the shipped 2025 tables
    pub fn year_2025() -> Self {
        Self::new(BasePayTable::year_2025(), BahTable::year_2025())
    }

    /// Resolve BAH and compute the full breakdown for a configuration
    pub fn breakdown(&self, config: &PayConfiguration) -> PayBreakdown {
        let resolved_bah = self.bah.resolve(config);
        compute_pay(
            &self.base_pay,
            config,
            resolved_bah,
            PayOptions::from_config(config),
        )
    }

    /// The base pay resolver
    pub fn base_pay(&self) -> &BasePayResolver {
        &self.base_pay
    }

    /// The BAH resolver
    pub fn bah(&self) -> &BahResolver {
        &self.bah
    }
}
