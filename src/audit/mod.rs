//! Session activity log
//!
//! Records every mutating action on the session's ledger in an append-only,
//! memory-resident log. Entries live and die with the session: there is no
//! file logger because nothing in a session persists across restarts.
//!
//! # Architecture
//!
//! - `ActivityEntry`: a single logged action with timestamp, operation, and
//!   an optional human-readable detail.
//! - `ActivityLog`: the append-only in-memory container for entries.
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::audit::{ActivityEntry, ActivityLog, Operation};
//!
//! let mut log = ActivityLog::new();
//! log.record(ActivityEntry::new(Operation::Add, Some("lunch 10.00".into())));
//! assert_eq!(log.len(), 1);
//! ```

mod entry;
mod log;

pub use entry::{ActivityEntry, Operation};
pub use log::ActivityLog;
