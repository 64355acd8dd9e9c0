//! Budget ledger display formatting

use crate::models::Expense;
use crate::services::{BudgetSummary, BudgetTotals};

use super::currency_with_symbol;

/// Format the expense list for terminal output
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses added.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<24} {:<9} {:>12}\n",
        "ID", "Name", "Type", "Monthly"
    ));
    output.push_str(&format!("{}\n", "-".repeat(62)));
    for expense in expenses {
        let name = if expense.name.trim().is_empty() {
            "Expense"
        } else {
            expense.name.as_str()
        };
        output.push_str(&format!(
            "{:<14} {:<24} {:<9} {:>12}\n",
            expense.id.to_string(),
            name,
            expense.kind.to_string(),
            currency_with_symbol(expense.amount, symbol)
        ));
    }
    output
}

/// Format the per-kind totals for terminal output
pub fn format_budget_totals(totals: &BudgetTotals, symbol: &str) -> String {
    let money = |n: f64| currency_with_symbol(n, symbol);
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<10} {:>4}% {:>12}\n",
        "Needs", totals.need_pct, money(totals.need)
    ));
    output.push_str(&format!(
        "  {:<10} {:>4}% {:>12}\n",
        "Wants", totals.want_pct, money(totals.want)
    ));
    output.push_str(&format!(
        "  {:<10} {:>4}% {:>12}\n",
        "Savings", totals.savings_pct, money(totals.savings)
    ));
    output.push_str(&format!("{}\n", "-".repeat(34)));
    output.push_str(&format!(
        "  {:<10} {:>17}\n",
        "Total",
        money(totals.total)
    ));
    output.push_str(&format!("  {:<10} {:>17}\n", "Items", totals.items));
    output.push_str(&format!(
        "  {:<10} {:>17}\n",
        "Avg/Item",
        money(totals.average)
    ));
    output
}

/// Format income versus the ledger for terminal output
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let money = |n: f64| currency_with_symbol(n, symbol);
    let mut output = String::new();

    output.push_str(&format!(
        "  {:<22} {:>12}\n",
        "Income (net, monthly)",
        money(summary.income_monthly)
    ));
    output.push_str(&format!(
        "  {:<22} {:>12}\n",
        "Expenses (monthly)",
        money(summary.expenses_monthly)
    ));
    output.push_str(&format!(
        "  {:<22} {:>12}\n",
        "Net After Expenses",
        money(summary.net_after_expenses)
    ));
    output
}
