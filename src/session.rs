//! Session context and input boundary
//!
//! The session owns one ledger and one activity log for the lifetime of a
//! user session. The presentation layer holds the session (by reference or
//! in its own context) and calls into it in response to discrete user
//! actions; nothing here is global and nothing survives the process.
//!
//! All input validation happens here, before anything reaches the ledger:
//! `NewExpense::from_form` parses the raw form fields and rejects unknown
//! categories, unparseable dates or amounts, and negative amounts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::audit::{ActivityEntry, ActivityLog, Operation};
use crate::error::{TrackerError, TrackerResult};
use crate::ledger::ExpenseLedger;
use crate::models::{Category, CategoryFilter, Expense, ExpenseId, Money};

/// Date format accepted from form input
const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated input for a new expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

impl NewExpense {
    /// Create an input from already-typed values
    pub fn new(
        date: NaiveDate,
        category: Category,
        description: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date,
            category,
            description: description.into(),
            amount,
        }
    }

    /// Parse and validate raw form fields
    ///
    /// The date must be `YYYY-MM-DD`, the category must name a member of
    /// the fixed category set, and the amount must parse as a non-negative
    /// money value. The description passes through untouched; it may be
    /// empty and duplicates are fine.
    pub fn from_form(
        date: &str,
        category: &str,
        description: &str,
        amount: &str,
    ) -> TrackerResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), FORM_DATE_FORMAT)?;
        let category: Category = category.parse()?;
        let amount = Money::parse(amount)?;

        if amount.is_negative() {
            return Err(TrackerError::NegativeAmount(amount));
        }

        Ok(Self::new(date, category, description, amount))
    }

    fn into_expense(self) -> Expense {
        Expense::new(self.date, self.category, self.description, self.amount)
    }
}

/// One user session of the expense tracker
///
/// Created empty at session start and dropped when the session ends. Owns
/// the ledger exclusively; there is no sharing across sessions and no
/// locking.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: ExpenseLedger,
    activity: ActivityLog,
}

impl Session {
    /// Create a session with an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new expense record
    ///
    /// `from_form` has already rejected bad input by the time a
    /// `NewExpense` exists, but inputs built directly with `new` are
    /// re-checked here so a negative amount can never reach the ledger.
    pub fn add_expense(&mut self, input: NewExpense) -> TrackerResult<ExpenseId> {
        let expense = input.into_expense();
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let detail = expense.to_string();
        let id = self.ledger.insert(expense);
        self.activity
            .record(ActivityEntry::new(Operation::Add, Some(detail)));

        Ok(id)
    }

    /// Clear all records
    pub fn reset(&mut self) {
        self.ledger.reset();
        self.activity.record(ActivityEntry::new(Operation::Reset, None));
    }

    /// The session's ledger
    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    /// Mutable access to the ledger
    pub fn ledger_mut(&mut self) -> &mut ExpenseLedger {
        &mut self.ledger
    }

    /// The session's activity log
    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Options for the external filter control: "All" followed by the
    /// categories currently present, in canonical order
    pub fn filter_options(&self) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        options.extend(
            self.ledger
                .categories_present()
                .into_iter()
                .map(CategoryFilter::Only),
        );
        options
    }
}
