//! Pay breakdown display formatting
//!
//! Formats the derived breakdown the way the summary card lays it out:
//! entitlements, deductions, allotments, then net.

use crate::engine::{LocalityRates, PayBreakdown};
use crate::models::Allotment;

use super::currency_with_symbol;

/// Format the full pay breakdown for terminal output
pub fn format_pay_breakdown(out: &PayBreakdown, symbol: &str) -> String {
    let money = |n: f64| currency_with_symbol(n, symbol);
    let mut output = String::new();

    output.push_str("Gross Income\n");
    output.push_str(&format!("{}\n", "-".repeat(44)));
    output.push_str(&format!("  {:<28} {:>12}\n", "Base Pay", money(out.base)));
    output.push_str(&format!("  {:<28} {:>12}\n", "BAH", money(out.bah)));
    output.push_str(&format!("  {:<28} {:>12}\n", "BAS", money(out.bas)));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Special Pay",
        money(out.special_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Total",
        money(out.total_entitlements)
    ));

    output.push_str("\nDeductions\n");
    output.push_str(&format!("{}\n", "-".repeat(44)));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Federal Tax",
        money(out.federal_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "State Tax",
        money(out.state_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "FICA Social Security",
        money(out.fica_social_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "FICA Medicare",
        money(out.fica_medicare_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "TSP",
        money(out.tsp_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Insurance (SGLI + AFRH)",
        money(out.insurance_monthly)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Total",
        money(out.total_deductions_excl_allotments)
    ));

    output.push_str("\nAllotments\n");
    output.push_str(&format!("{}\n", "-".repeat(44)));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Total (not part of net)",
        money(out.allotments_monthly)
    ));

    output.push_str("\nNet Pay\n");
    output.push_str(&format!("{}\n", "-".repeat(44)));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Monthly Net",
        money(out.net_monthly_excl_allotments)
    ));
    output.push_str(&format!(
        "  {:<28} {:>12}\n",
        "Per Paycheck (twice-monthly)",
        money(out.per_paycheck)
    ));

    output
}

/// Format the allotment list for terminal output
pub fn format_allotments(allotments: &[Allotment], symbol: &str) -> String {
    if allotments.is_empty() {
        return "No allotments added.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<24} {:>12}\n",
        "ID", "Name", "Monthly"
    ));
    output.push_str(&format!("{}\n", "-".repeat(52)));
    for allotment in allotments {
        let name = if allotment.name.trim().is_empty() {
            "Allotment"
        } else {
            allotment.name.as_str()
        };
        output.push_str(&format!(
            "{:<14} {:<24} {:>12}\n",
            allotment.id.to_string(),
            name,
            currency_with_symbol(allotment.amount, symbol)
        ));
    }
    output
}

/// Format the BAH locality listing for a grade
pub fn format_localities(listing: &[LocalityRates], symbol: &str) -> String {
    if listing.is_empty() {
        return "No localities in the housing table.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<30} {:>14} {:>14}\n",
        "Locality", "With Dep.", "Without Dep."
    ));
    output.push_str(&format!("{}\n", "-".repeat(60)));
    for rates in listing {
        output.push_str(&format!(
            "{:<30} {:>14} {:>14}\n",
            rates.locality,
            currency_with_symbol(rates.with_dependents, symbol),
            currency_with_symbol(rates.without_dependents, symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PayEngine;
    use crate::models::{PayConfiguration, PayGrade};

    #[test]
    fn test_breakdown_contains_all_lines() {
        let engine = PayEngine::year_2025();
        let mut config = PayConfiguration::default();
        config.grade = PayGrade::E6;
        config.years_of_service = 6;

        let formatted = format_pay_breakdown(&engine.breakdown(&config), "$");
        assert!(formatted.contains("Base Pay"));
        assert!(formatted.contains("$4,080.60"));
        assert!(formatted.contains("FICA Social Security"));
        assert!(formatted.contains("Per Paycheck"));
    }

    #[test]
    fn test_empty_allotments() {
        assert_eq!(format_allotments(&[], "$"), "No allotments added.");
    }

    #[test]
    fn test_allotment_name_fallback() {
        let allotments = vec![Allotment::new("", 25.0)];
        let formatted = format_allotments(&allotments, "$");
        assert!(formatted.contains("Allotment"));
        assert!(formatted.contains("$25.00"));
    }

    #[test]
    fn test_localities_listing() {
        let engine = PayEngine::year_2025();
        let listing = engine.bah().localities_for(PayGrade::E6);
        let formatted = format_localities(&listing, "$");
        assert!(formatted.contains("San Diego, CA"));
        assert!(formatted.contains("$4,320.00"));
    }
}
