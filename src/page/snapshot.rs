//! Serialized page snapshots.
//!
//! A [`PageSnapshot`] is the JSON shape the TrimQ server renders for a
//! display board: optionally a queue view for one branch, plus any flash
//! alerts raised by the last request. The board never writes this format,
//! it only consumes whatever the server (or a test) produced.

use serde::{Deserialize, Serialize};

/// One rendered page, as produced by the server.
///
/// `queue` being present is what makes a page a queue-display page; pages
/// without it still carry flash alerts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<QueueView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alerts: Vec<FlashAlert>,
}

/// The queue display for a single branch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueView {
    pub branch: String,
    #[serde(default)]
    pub entries: Vec<QueueEntry>,
}

/// One customer slot in the queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub name: String,
    #[serde(default)]
    pub service: String,
    /// Time slot label, rendered by the server as `HH:MM`.
    pub time: String,
    #[serde(default)]
    pub status: EntryStatus,
}

/// Customer status within the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Waiting,
    Assigned,
    Completed,
}

impl EntryStatus {
    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            EntryStatus::Waiting => "waiting",
            EntryStatus::Assigned => "assigned",
            EntryStatus::Completed => "completed",
        }
    }
}

/// A transient flash notification raised by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashAlert {
    #[serde(default)]
    pub category: AlertCategory,
    pub message: String,
}

/// Flash alert category, mirroring the server's message categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Success,
    Error,
    #[default]
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_page() {
        let json = r#"{
            "queue": {
                "branch": "downtown",
                "entries": [
                    { "name": "Alice", "service": "Haircut", "time": "09:05" },
                    { "name": "Bob", "service": "Shave", "time": "09:20", "status": "assigned" }
                ]
            },
            "alerts": [
                { "category": "success", "message": "Customer added" }
            ]
        }"#;

        let page: PageSnapshot = serde_json::from_str(json).unwrap();
        let queue = page.queue.unwrap();
        assert_eq!(queue.branch, "downtown");
        assert_eq!(queue.entries.len(), 2);
        assert_eq!(queue.entries[0].status, EntryStatus::Waiting);
        assert_eq!(queue.entries[1].status, EntryStatus::Assigned);
        assert_eq!(page.alerts.len(), 1);
        assert_eq!(page.alerts[0].category, AlertCategory::Success);
    }

    #[test]
    fn test_parse_page_without_queue() {
        let json = r#"{ "alerts": [ { "message": "Logged out" } ] }"#;
        let page: PageSnapshot = serde_json::from_str(json).unwrap();
        assert!(page.queue.is_none());
        assert_eq!(page.alerts[0].category, AlertCategory::Info);
    }

    #[test]
    fn test_parse_empty_page() {
        let page: PageSnapshot = serde_json::from_str("{}").unwrap();
        assert!(page.queue.is_none());
        assert!(page.alerts.is_empty());
    }
}
