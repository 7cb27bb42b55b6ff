//! Reports module for the expense tracker
//!
//! Aggregated views over the ledger for downstream rendering. The chart
//! itself is drawn by an external collaborator; this module only prepares
//! the proportional breakdown it consumes.

pub mod breakdown;

pub use breakdown::{CategoryBreakdown, CategorySlice};
