//! Suggested expense categories
//!
//! Categories on an expense are free-form strings. This closed list is what
//! the menu prompt and the add form offer, with `Other` as the catch-all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category offered to the user when entering an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestedCategory {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Other,
}

impl SuggestedCategory {
    /// All suggested categories in display order
    pub fn all() -> &'static [SuggestedCategory] {
        &[
            Self::Food,
            Self::Transportation,
            Self::Entertainment,
            Self::Utilities,
            Self::Other,
        ]
    }

    /// The name written to the store when this category is chosen
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Map a stored category name onto the suggested list.
    ///
    /// Matching is exact, so "food" is not `Food`. Anything unrecognized is
    /// `Other`; the stored name itself is never rewritten.
    pub fn classify(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == name)
            .unwrap_or(Self::Other)
    }

    /// Names of all suggested categories
    pub fn names() -> Vec<String> {
        Self::all().iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for SuggestedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
