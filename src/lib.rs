//! Session-scoped personal expense tracker
//!
//! This library holds the core of a single-page expense tracker: typed
//! expense records, an in-memory session ledger with aggregate queries,
//! and the grouped-by-category breakdown a chart renderer consumes. The
//! presentation layer (form, table, chart, download button) is an external
//! collaborator that calls into this crate; nothing here renders, persists,
//! or talks to the network, and all state is discarded when the session
//! ends.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (categories, money, expense records)
//! - `ledger`: The in-memory expense ledger and its aggregate queries
//! - `session`: Session context and the input validation boundary
//! - `audit`: In-memory session activity log
//! - `reports`: Category breakdown for proportional charts
//! - `export`: CSV and JSON export of the session's records
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::session::{NewExpense, Session};
//!
//! let mut session = Session::new();
//! let input = NewExpense::from_form("2024-01-01", "Food", "lunch", "10.00")?;
//! session.add_expense(input)?;
//!
//! assert_eq!(session.ledger().total().cents(), 1000);
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod audit;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod session;

pub use error::{TrackerError, TrackerResult};
pub use ledger::ExpenseLedger;
pub use models::{Category, CategoryFilter, Expense, ExpenseId, Money};
pub use session::{NewExpense, Session};
