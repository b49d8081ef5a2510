//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entry, EntryKind};

/// Types of ledger operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Entry was appended
    Create,
    /// Entry was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Which list the entry lived in
    pub entity_type: EntryKind,

    /// One-based position of the entry at the time of the operation
    pub entity_id: String,

    /// The entry's description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot of a removed entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot of an added entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Record an entry appended at `index` (one-based)
    pub fn create(entry: &Entry, index: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type: entry.kind(),
            entity_id: index.to_string(),
            entity_name: Some(entry.description().to_string()),
            before: None,
            after: serde_json::to_value(entry).ok(),
        }
    }

    /// Record an entry removed from `index` (one-based)
    pub fn delete(entry: &Entry, index: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_type: entry.kind(),
            entity_id: index.to_string(),
            entity_name: Some(entry.description().to_string()),
            before: serde_json::to_value(entry).ok(),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} #{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn lunch() -> Entry {
        Entry::expense("Lunch", Money::from_cents(1250), "food").unwrap()
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&lunch(), 1);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntryKind::Expense);
        assert_eq!(entry.entity_id, "1");
        assert_eq!(entry.entity_name.as_deref(), Some("Lunch"));
        assert!(entry.before.is_none());
        assert_eq!(entry.after.as_ref().unwrap()["category"], "FOOD");
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&lunch(), 4);

        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.entity_id, "4");
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_snapshots() {
        let entry = AuditEntry::create(&lunch(), 1);
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"operation\":\"create\""));
        assert!(json.contains("\"entity_type\":\"expense\""));
        assert!(!json.contains("\"before\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::Create);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::delete(&lunch(), 2);
        let formatted = entry.format_human_readable();

        assert!(formatted.contains("DELETE Expense #2"));
        assert!(formatted.contains("(Lunch)"));
    }
}
