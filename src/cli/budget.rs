//! Budget CLI commands
//!
//! Implements CLI commands for the budget ledger: listing, edits, the
//! destructive reimport, and the income-versus-expenses summary.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_budget_totals, format_expense_list};
use crate::engine::PayEngine;
use crate::error::{SeapayError, SeapayResult};
use crate::models::{ExpenseId, ExpenseKind};
use crate::services::BudgetService;
use crate::storage::{LedgerData, Storage};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending by category and income versus expenses
    Summary,

    /// List expense lines
    List,

    /// Add an expense line
    Add {
        /// Expense name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: f64,
        /// Category: need, want, or savings
        #[arg(short, long, default_value = "need")]
        kind: String,
    },

    /// Edit an expense line
    Set {
        /// Expense name or ID
        expense: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New monthly amount
        #[arg(long)]
        amount: Option<f64>,
        /// New category: need, want, or savings
        #[arg(long)]
        kind: Option<String>,
        /// New display color (hex, e.g. "#2563eb")
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove an expense line
    Remove {
        /// Expense name or ID
        expense: String,
    },

    /// Clear the ledger and re-seed it from the pay configuration's
    /// allotments. Destructive: manual edits are lost.
    Reimport {
        /// Confirm the destructive reimport
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    engine: &PayEngine,
    cmd: BudgetCommands,
) -> SeapayResult<()> {
    let mut service = BudgetService::new(&storage.ledger, &storage.pay_config, engine);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Summary => {
            let data = service.open()?;
            let totals = service.totals(&data);
            let summary = service.summary(&data)?;

            println!("Spending Overview");
            println!("{}", "=".repeat(34));
            println!("{}", format_budget_totals(&totals, symbol));
            println!("Income (from Pay)");
            println!("{}", "=".repeat(34));
            println!("{}", format_budget_summary(&summary, symbol));
        }

        BudgetCommands::List => {
            let data = service.open()?;
            println!("{}", format_expense_list(&data.expenses, symbol));
        }

        BudgetCommands::Add { name, amount, kind } => {
            let kind = parse_kind(&kind)?;
            let added = service.add_expense(&name, amount, kind)?;
            println!("Added expense {} ({}).", added.id, name);
        }

        BudgetCommands::Set {
            expense,
            name,
            amount,
            kind,
            color,
        } => {
            let kind = kind.map(|k| parse_kind(&k)).transpose()?;
            let data = service.open()?;
            let id = resolve_expense(&data, &expense)?;

            service.edit_expense(id, |e| {
                if let Some(name) = name {
                    e.rename(name);
                }
                if let Some(amount) = amount {
                    e.set_amount(amount);
                }
                if let Some(kind) = kind {
                    e.set_kind(kind);
                }
                if let Some(color) = color {
                    e.set_color(color);
                }
            })?;
            println!("Updated expense {}.", expense);
        }

        BudgetCommands::Remove { expense } => {
            let data = service.open()?;
            let id = resolve_expense(&data, &expense)?;
            service.remove_expense(id)?;
            println!("Removed expense {}.", expense);
        }

        BudgetCommands::Reimport { yes } => {
            if !yes {
                println!(
                    "Reimport clears every expense line and re-seeds the ledger \
                     from the pay configuration's allotments."
                );
                println!("Re-run with --yes to confirm.");
                return Ok(());
            }
            let data = service.reimport()?;
            println!(
                "Reimported {} allotment line(s) into the ledger.",
                data.expenses.len()
            );
        }
    }

    Ok(())
}

/// Resolve an expense argument by name (case-insensitive), display ID, or
/// full UUID
fn resolve_expense(data: &LedgerData, arg: &str) -> SeapayResult<ExpenseId> {
    let by_name = data
        .expenses
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(arg));
    if let Some(expense) = by_name {
        return Ok(expense.id);
    }

    let by_id = data
        .expenses
        .iter()
        .find(|e| e.id.to_string() == arg || e.id.as_uuid().to_string() == arg);
    match by_id {
        Some(expense) => Ok(expense.id),
        None => Err(SeapayError::expense_not_found(arg)),
    }
}

fn parse_kind(arg: &str) -> SeapayResult<ExpenseKind> {
    arg.parse().map_err(SeapayError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("need").unwrap(), ExpenseKind::Need);
        assert_eq!(parse_kind("Want").unwrap(), ExpenseKind::Want);
        assert!(parse_kind("luxury").is_err());
    }

    #[test]
    fn test_resolve_expense() {
        let mut data = LedgerData::default();
        data.expenses
            .push(Expense::new("Rent", 900.0, ExpenseKind::Need, 0));
        let id = data.expenses[0].id;

        assert_eq!(resolve_expense(&data, "RENT").unwrap(), id);
        assert_eq!(resolve_expense(&data, &id.to_string()).unwrap(), id);
        assert!(resolve_expense(&data, "nope").is_err());
    }
}
