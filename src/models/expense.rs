//! Expense record model
//!
//! A single expense entry: date, category, free-text description, and a
//! non-negative amount. Records are immutable once added to the ledger;
//! duplicate dates and descriptions are allowed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Expense category
    pub category: Category,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Amount spent; non-negative for every stored record
    pub amount: Money,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category,
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// Validate the record
    ///
    /// The input boundary rejects negative amounts before a record is
    /// built, so this only fails for records constructed directly with a
    /// negative amount.
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(
            test_date(),
            Category::Food,
            "lunch",
            Money::from_cents(1000),
        );

        assert_eq!(expense.date, test_date());
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "lunch");
        assert_eq!(expense.amount, Money::from_cents(1000));
    }

    #[test]
    fn test_empty_description_allowed() {
        let expense = Expense::new(test_date(), Category::Other, "", Money::zero());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_negative_amount() {
        let expense = Expense::new(
            test_date(),
            Category::Food,
            "refund?",
            Money::from_cents(-500),
        );

        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(Money::from_cents(
                -500
            )))
        );
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(
            test_date(),
            Category::Food,
            "lunch",
            Money::from_cents(1000),
        );
        assert_eq!(format!("{}", expense), "2024-01-01 Food lunch 10.00");
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(
            test_date(),
            Category::Transport,
            "bus",
            Money::from_cents(250),
        );

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.id, deserialized.id);
        assert_eq!(expense.category, deserialized.category);
        assert_eq!(expense.amount, deserialized.amount);
    }
}
