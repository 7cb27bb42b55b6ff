//! Activity entry data structures
//!
//! Defines the operations a session can perform on its ledger and the
//! entry format recorded for each one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of ledger operations that are logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense record was appended
    Add,
    /// The ledger was cleared
    Reset,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Reset => write!(f, "RESET"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The operation performed
    pub operation: Operation,

    /// Human-readable description of the affected record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ActivityEntry {
    /// Create a new entry stamped with the current time
    pub fn new(operation: Operation, detail: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail,
        }
    }
}
