//! Expense category model
//!
//! Categories form a fixed, closed set. Using an enum instead of free-form
//! strings means an invalid category cannot be represented past the input
//! boundary, so the ledger never has to re-check membership.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed expense category
///
/// The derived ordering follows declaration order and determines the
/// canonical iteration order for grouped totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Other,
}

impl Category {
    /// Get all categories in canonical order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Entertainment,
            Self::Health,
            Self::Other,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(String);

impl ParseCategoryError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

/// Category filter used by the external filter UI
///
/// `All` is the sentinel the original filter control offers alongside the
/// concrete categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Match every record
    #[default]
    All,
    /// Match only records with this category
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => *c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.parse()?))
        }
    }
}
