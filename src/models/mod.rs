//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: categories, money amounts, record ids, and expense records.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, CategoryFilter};
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
