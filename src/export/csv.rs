//! CSV export functionality
//!
//! Exports the ledger's expense records to CSV, one row per record in
//! insertion order. Quoting and escaping are handled by the csv crate.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::ledger::ExpenseLedger;

/// Export all expense records to CSV
///
/// Header: `date,category,description,amount`. Amounts are written in
/// decimal form ("10.50").
pub fn write_expenses_csv<W: Write>(ledger: &ExpenseLedger, writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "category", "description", "amount"])
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in ledger.iter() {
        csv_writer
            .write_record([
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.to_string(),
                expense.description.clone(),
                expense.amount.to_string(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
