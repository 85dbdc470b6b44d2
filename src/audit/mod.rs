//! Audit logging for the expense recorder
//!
//! Every created category and expense is appended to a line-delimited JSON
//! log next to the data file.
//!
//! - `AuditEntry`: one entry with timestamp, operation, entity information
//!   and the entity's JSON after the operation.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
