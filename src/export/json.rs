//! JSON export functionality
//!
//! Exports a snapshot of the session's expense records as a JSON document
//! with summary metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::ExpenseLedger;
use crate::models::{Expense, Money};

/// Session snapshot export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Number of expense records
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: Money,

    /// All expense records in insertion order
    pub expenses: Vec<Expense>,
}

impl SessionExport {
    /// Snapshot the current ledger state
    pub fn from_ledger(ledger: &ExpenseLedger) -> Self {
        Self {
            exported_at: Utc::now(),
            expense_count: ledger.len(),
            total: ledger.total(),
            expenses: ledger.expenses().to_vec(),
        }
    }
}

/// Export the session's expenses to pretty-printed JSON
pub fn write_expenses_json<W: Write>(ledger: &ExpenseLedger, writer: &mut W) -> TrackerResult<()> {
    let export = SessionExport::from_ledger(ledger);

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
