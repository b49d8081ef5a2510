//! Audit logging for ledger changes
//!
//! Every entry added to or removed from the ledger can be recorded as one
//! line of JSON (JSONL) in an append-only file.
//!
//! - `AuditEntry`: one record with timestamp, operation, the affected entry
//!   kind, its one-based position and a JSON snapshot of the entry.
//! - `AuditLogger`: appends records to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
