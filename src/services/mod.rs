//! Service layer for seapay
//!
//! The service layer provides business logic on top of the storage layer:
//! the pay service owns the edit-recompute-persist cycle for the pay
//! configuration, the budget service owns the ledger lifecycle and its
//! derived figures.

pub mod budget;
pub mod pay;

pub use budget::{BudgetService, BudgetSummary, BudgetTotals};
pub use pay::PayService;
