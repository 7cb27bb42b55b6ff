//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Every failure originates at the input
//! boundary or in the export layer; the ledger itself has no failure modes.

use thiserror::Error;

use crate::models::category::ParseCategoryError;
use crate::models::money::{Money, MoneyParseError};

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Date input could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Category input is not a member of the fixed category set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Amount input could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount input is negative (expenses are non-negative)
    #[error("Expense amount cannot be negative: {0}")]
    NegativeAmount(Money),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TrackerError {
    /// Check if this error came from boundary or model validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_)
                | Self::UnknownCategory(_)
                | Self::InvalidAmount(_)
                | Self::NegativeAmount(_)
                | Self::Validation(_)
        )
    }
}

// Implement From traits for the model-level error types

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<ParseCategoryError> for TrackerError {
    fn from(err: ParseCategoryError) -> Self {
        Self::UnknownCategory(err.input().to_string())
    }
}

impl From<chrono::ParseError> for TrackerError {
    fn from(err: chrono::ParseError) -> Self {
        Self::InvalidDate(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
