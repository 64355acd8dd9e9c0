//! Core data models for seapay
//!
//! Contains the persisted pay configuration, budget expense lines, pay
//! grades, and strongly-typed identifiers.

pub mod expense;
pub mod grade;
pub mod ids;
pub mod pay_config;

pub use expense::{Expense, ExpenseKind, PALETTE};
pub use grade::PayGrade;
pub use ids::{AllotmentId, ExpenseId};
pub use pay_config::{Allotment, DependencyStatus, PayConfiguration, CUSTOM_LOCALITY};
