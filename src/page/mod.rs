//! Page state for one page view.
//!
//! A raw [`PageSnapshot`] from a source is turned into [`PageData`], the
//! live state the effect runner mutates: queue rows gain a `current`
//! marker, alerts gain a stable id and a visibility phase.

pub mod snapshot;

pub use snapshot::{AlertCategory, EntryStatus, FlashAlert, PageSnapshot, QueueEntry, QueueView};

/// Visibility phase of an alert.
///
/// Alerts start visible, are dimmed while fading, and are deleted from the
/// page outright once dismissed (there is no `Removed` variant - removal
/// takes the alert out of [`PageData::alerts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    Fading,
}

/// A flash alert on the live page.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Stable id, valid for the lifetime of this page view.
    pub id: usize,
    pub category: AlertCategory,
    pub message: String,
    pub phase: AlertPhase,
}

/// One row of the queue display.
#[derive(Debug, Clone)]
pub struct QueueRow {
    pub name: String,
    pub service: String,
    /// Time slot label as rendered by the server, compared verbatim
    /// (after trimming) against the formatted clock.
    pub time_label: String,
    pub status: EntryStatus,
    /// Set when this row's slot matches the current time.
    pub current: bool,
}

/// Live state of one rendered page.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    /// Whether the snapshot carried a queue display. Gates refresh
    /// scheduling and highlighting.
    pub has_queue_display: bool,
    /// Branch name, present iff `has_queue_display`.
    pub branch: Option<String>,
    pub rows: Vec<QueueRow>,
    pub alerts: Vec<Alert>,
}

impl PageData {
    /// Build live page state from a server snapshot.
    ///
    /// Alert ids are assigned in render order, starting at zero for each
    /// page view; they stay stable as alerts are removed.
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        let (has_queue_display, branch, rows) = match snapshot.queue {
            Some(queue) => {
                let rows = queue
                    .entries
                    .into_iter()
                    .map(|entry| QueueRow {
                        name: entry.name,
                        service: entry.service,
                        time_label: entry.time,
                        status: entry.status,
                        current: false,
                    })
                    .collect();
                (true, Some(queue.branch), rows)
            }
            None => (false, None, Vec::new()),
        };

        let alerts = snapshot
            .alerts
            .into_iter()
            .enumerate()
            .map(|(id, alert)| Alert {
                id,
                category: alert.category,
                message: alert.message,
                phase: AlertPhase::Visible,
            })
            .collect();

        Self {
            has_queue_display,
            branch,
            rows,
            alerts,
        }
    }

    /// Look up a live alert by id.
    pub fn alert_mut(&mut self, id: usize) -> Option<&mut Alert> {
        self.alerts.iter_mut().find(|a| a.id == id)
    }

    /// Delete an alert from the page. Unknown ids are ignored.
    pub fn remove_alert(&mut self, id: usize) {
        self.alerts.retain(|a| a.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_alerts(n: usize) -> PageSnapshot {
        PageSnapshot {
            queue: None,
            alerts: (0..n)
                .map(|i| FlashAlert {
                    category: AlertCategory::Info,
                    message: format!("alert {}", i),
                })
                .collect(),
        }
    }

    #[test]
    fn test_from_snapshot_without_queue() {
        let page = PageData::from_snapshot(snapshot_with_alerts(2));
        assert!(!page.has_queue_display);
        assert!(page.branch.is_none());
        assert!(page.rows.is_empty());
        assert_eq!(page.alerts.len(), 2);
        assert!(page.alerts.iter().all(|a| a.phase == AlertPhase::Visible));
    }

    #[test]
    fn test_from_snapshot_with_queue() {
        let snapshot = PageSnapshot {
            queue: Some(QueueView {
                branch: "main".into(),
                entries: vec![QueueEntry {
                    name: "Alice".into(),
                    service: "Haircut".into(),
                    time: "09:05".into(),
                    status: EntryStatus::Waiting,
                }],
            }),
            alerts: Vec::new(),
        };

        let page = PageData::from_snapshot(snapshot);
        assert!(page.has_queue_display);
        assert_eq!(page.branch.as_deref(), Some("main"));
        assert_eq!(page.rows.len(), 1);
        assert!(!page.rows[0].current);
    }

    #[test]
    fn test_alert_ids_stay_stable_across_removal() {
        let mut page = PageData::from_snapshot(snapshot_with_alerts(3));
        page.remove_alert(1);
        assert_eq!(page.alerts.len(), 2);
        assert!(page.alert_mut(1).is_none());
        assert!(page.alert_mut(0).is_some());
        assert!(page.alert_mut(2).is_some());
    }

    #[test]
    fn test_remove_unknown_alert_is_noop() {
        let mut page = PageData::from_snapshot(snapshot_with_alerts(1));
        page.remove_alert(42);
        assert_eq!(page.alerts.len(), 1);
    }
}
