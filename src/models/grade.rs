//! Pay grades
//!
//! The 20 canonical pay grades across the enlisted, warrant, and officer
//! tiers. Grade labels serialize as their standard short form ("E1", "W3",
//! "O6") so persisted records read naturally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical pay grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayGrade {
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
    E7,
    E8,
    E9,
    W1,
    W2,
    W3,
    W4,
    W5,
    O1,
    O2,
    O3,
    O4,
    O5,
    O6,
}

impl PayGrade {
    /// All grades in display order (enlisted, warrant, officer)
    pub const ALL: [PayGrade; 20] = [
        PayGrade::E1,
        PayGrade::E2,
        PayGrade::E3,
        PayGrade::E4,
        PayGrade::E5,
        PayGrade::E6,
        PayGrade::E7,
        PayGrade::E8,
        PayGrade::E9,
        PayGrade::W1,
        PayGrade::W2,
        PayGrade::W3,
        PayGrade::W4,
        PayGrade::W5,
        PayGrade::O1,
        PayGrade::O2,
        PayGrade::O3,
        PayGrade::O4,
        PayGrade::O5,
        PayGrade::O6,
    ];

    /// Standard short label ("E1" .. "O6")
    pub fn label(&self) -> &'static str {
        match self {
            PayGrade::E1 => "E1",
            PayGrade::E2 => "E2",
            PayGrade::E3 => "E3",
            PayGrade::E4 => "E4",
            PayGrade::E5 => "E5",
            PayGrade::E6 => "E6",
            PayGrade::E7 => "E7",
            PayGrade::E8 => "E8",
            PayGrade::E9 => "E9",
            PayGrade::W1 => "W1",
            PayGrade::W2 => "W2",
            PayGrade::W3 => "W3",
            PayGrade::W4 => "W4",
            PayGrade::W5 => "W5",
            PayGrade::O1 => "O1",
            PayGrade::O2 => "O2",
            PayGrade::O3 => "O3",
            PayGrade::O4 => "O4",
            PayGrade::O5 => "O5",
            PayGrade::O6 => "O6",
        }
    }

    /// Whether this grade is in the officer tier (label begins with "O")
    pub fn is_officer(&self) -> bool {
        self.label().starts_with('O')
    }

    /// Whether this grade is in the enlisted tier
    pub fn is_enlisted(&self) -> bool {
        self.label().starts_with('E')
    }

    /// Whether this grade is in the warrant tier
    pub fn is_warrant(&self) -> bool {
        self.label().starts_with('W')
    }
}

impl Default for PayGrade {
    fn default() -> Self {
        PayGrade::E1
    }
}

impl fmt::Display for PayGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PayGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        PayGrade::ALL
            .iter()
            .find(|g| g.label() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown pay grade: {}", s))
    }
}
