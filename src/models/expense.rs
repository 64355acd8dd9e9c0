//! Budget expense lines
//!
//! Expenses live in the budget ledger, independent of the pay configuration
//! except for the one-time allotment seeding. Each line carries a display
//! color drawn from a fixed palette.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;

/// Display palette for expense lines, assigned by position
pub const PALETTE: [&str; 15] = [
    "#2563eb", "#22c55e", "#f59e0b", "#ef4444", "#a855f7", "#06b6d4", "#84cc16", "#e11d48",
    "#fb7185", "#14b8a6", "#8b5cf6", "#f97316", "#10b981", "#f43f5e", "#0ea5e9",
];

/// Budget category for an expense line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    /// Essential spending
    #[default]
    Need,
    /// Discretionary spending
    Want,
    /// Money set aside
    Savings,
}

impl ExpenseKind {
    /// All kinds in display order
    pub const ALL: [ExpenseKind; 3] = [ExpenseKind::Need, ExpenseKind::Want, ExpenseKind::Savings];

    /// Lowercase label as persisted
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Need => "need",
            ExpenseKind::Want => "want",
            ExpenseKind::Savings => "savings",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "need" => Ok(ExpenseKind::Need),
            "want" => Ok(ExpenseKind::Want),
            "savings" | "saving" => Ok(ExpenseKind::Savings),
            other => Err(format!("unknown expense kind: {}", other)),
        }
    }
}

/// A single budget expense line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    #[serde(default)]
    pub id: ExpenseId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Monthly amount
    #[serde(default)]
    pub amount: f64,

    /// Budget category
    #[serde(default)]
    pub kind: ExpenseKind,

    /// Display color (hex); maintained against the palette on load
    #[serde(default)]
    pub color: String,

    /// When the expense was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a palette color for its position
    pub fn new(name: impl Into<String>, amount: f64, kind: ExpenseKind, position: usize) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            kind,
            color: palette_color(position).to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the monthly amount
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
        self.updated_at = Utc::now();
    }

    /// Set the budget category
    pub fn set_kind(&mut self, kind: ExpenseKind) {
        self.kind = kind;
        self.updated_at = Utc::now();
    }

    /// Rename the expense
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Set the display color
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        self.updated_at = Utc::now();
    }
}

/// Palette color for a list position, wrapping around
pub fn palette_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

/// Ensure every expense carries a usable color
///
/// Any line whose color does not begin with `#` is reassigned the palette
/// color for its position.
pub fn ensure_colors(expenses: &mut [Expense]) {
    for (i, expense) in expenses.iter_mut().enumerate() {
        if !expense.color.starts_with('#') {
            expense.color = palette_color(i).to_string();
        }
    }
}
