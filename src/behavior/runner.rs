//! The effect runner: executes planned effects when they come due.

use std::time::Instant;

use super::effect::Effect;
use crate::page::{AlertPhase, PageData};

/// Executes [`Effect`] descriptors against the live page.
///
/// [`EffectRunner::schedule`] resolves relative delays into absolute
/// deadlines; [`EffectRunner::run_due`] applies everything whose deadline
/// has passed, in deadline order. There is no cancellation: a pending set
/// only goes away when a new page load replaces it wholesale, the same
/// way navigation discards a page's timers.
#[derive(Debug, Default)]
pub struct EffectRunner {
    pending: Vec<(Instant, Effect)>,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending set with the plan for a fresh page load.
    pub fn schedule(&mut self, now: Instant, effects: Vec<Effect>) {
        self.pending = effects
            .into_iter()
            .map(|effect| (now + effect.delay(), effect))
            .collect();
        self.pending.sort_by_key(|(deadline, _)| *deadline);
    }

    /// Apply every effect due at `now` to the page.
    ///
    /// Returns true when a reload came due; the caller owns the actual
    /// re-fetch. Effects referring to rows or alerts that no longer exist
    /// are silently dropped.
    pub fn run_due(&mut self, page: &mut PageData, now: Instant) -> bool {
        let mut reload_due = false;

        while let Some((deadline, _)) = self.pending.first() {
            if *deadline > now {
                break;
            }
            let (_, effect) = self.pending.remove(0);
            match effect {
                Effect::Reload { .. } => reload_due = true,
                Effect::MarkCurrent { row } => {
                    if let Some(row) = page.rows.get_mut(row) {
                        row.current = true;
                    }
                }
                Effect::FadeAlert { alert, .. } => {
                    if let Some(alert) = page.alert_mut(alert) {
                        alert.phase = AlertPhase::Fading;
                    }
                }
                Effect::RemoveAlert { alert, .. } => {
                    page.remove_alert(alert);
                }
            }
        }

        reload_due
    }

    /// Deadline of the pending reload, if one is scheduled.
    pub fn next_reload(&self) -> Option<Instant> {
        self.pending.iter().find_map(|(deadline, effect)| {
            matches!(effect, Effect::Reload { .. }).then_some(*deadline)
        })
    }

    /// Number of effects still pending.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::behavior::alerts::{FADE_AFTER, REMOVE_GRACE};
    use crate::behavior::{alerts, plan_page_load};
    use crate::page::{FlashAlert, PageSnapshot, QueueEntry, QueueView};
    use chrono::NaiveTime;

    fn page_with_alerts(n: usize) -> PageData {
        PageData::from_snapshot(PageSnapshot {
            queue: None,
            alerts: (0..n)
                .map(|i| FlashAlert {
                    category: Default::default(),
                    message: format!("flash {}", i),
                })
                .collect(),
        })
    }

    #[test]
    fn test_alert_lifecycle_fade_then_remove() {
        let mut page = page_with_alerts(3);
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        runner.schedule(t0, alerts::dismissal_effects(&page.alerts));

        // Before the fade deadline nothing happens.
        assert!(!runner.run_due(&mut page, t0 + Duration::from_millis(4999)));
        assert!(page.alerts.iter().all(|a| a.phase == AlertPhase::Visible));

        // At 5000ms every alert fades.
        runner.run_due(&mut page, t0 + FADE_AFTER);
        assert_eq!(page.alerts.len(), 3);
        assert!(page.alerts.iter().all(|a| a.phase == AlertPhase::Fading));

        // 150ms later every alert is gone.
        runner.run_due(&mut page, t0 + FADE_AFTER + REMOVE_GRACE);
        assert!(page.alerts.is_empty());
        assert_eq!(runner.pending_len(), 0);
    }

    #[test]
    fn test_catches_up_past_both_deadlines_at_once() {
        let mut page = page_with_alerts(2);
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        runner.schedule(t0, alerts::dismissal_effects(&page.alerts));

        // A single late tick applies fade and removal in deadline order.
        runner.run_due(&mut page, t0 + Duration::from_secs(60));
        assert!(page.alerts.is_empty());
    }

    #[test]
    fn test_no_alerts_no_mutation() {
        let mut page = page_with_alerts(0);
        let before = page.clone();
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        runner.schedule(t0, alerts::dismissal_effects(&page.alerts));
        runner.run_due(&mut page, t0 + Duration::from_secs(10));

        assert_eq!(page.alerts.len(), before.alerts.len());
        assert_eq!(runner.pending_len(), 0);
    }

    #[test]
    fn test_reload_reported_not_applied() {
        let mut page = page_with_alerts(0);
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();
        let refresh = Duration::from_millis(30_000);

        runner.schedule(
            t0,
            vec![Effect::Reload { after: refresh }],
        );

        assert!(!runner.run_due(&mut page, t0 + refresh - Duration::from_millis(1)));
        assert_eq!(runner.next_reload(), Some(t0 + refresh));
        assert!(runner.run_due(&mut page, t0 + refresh));
        assert!(runner.next_reload().is_none());
    }

    #[test]
    fn test_mark_current_applies_immediately() {
        let mut page = PageData::from_snapshot(PageSnapshot {
            queue: Some(QueueView {
                branch: "main".into(),
                entries: vec![QueueEntry {
                    name: "Alice".into(),
                    service: String::new(),
                    time: "09:05".into(),
                    status: Default::default(),
                }],
            }),
            alerts: Vec::new(),
        });
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        let now = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        runner.schedule(t0, plan_page_load(&page, now, Duration::from_secs(30)));
        runner.run_due(&mut page, t0);

        assert!(page.rows[0].current);
        // The reload is still pending.
        assert_eq!(runner.pending_len(), 1);
    }

    #[test]
    fn test_new_schedule_replaces_pending() {
        let mut page = page_with_alerts(1);
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        runner.schedule(t0, alerts::dismissal_effects(&page.alerts));
        assert_eq!(runner.pending_len(), 2);

        // A fresh page load discards the old timers.
        runner.schedule(t0 + Duration::from_secs(1), Vec::new());
        assert_eq!(runner.pending_len(), 0);
        assert!(!runner.run_due(&mut page, t0 + Duration::from_secs(10)));
        assert_eq!(page.alerts.len(), 1);
    }

    #[test]
    fn test_effect_for_vanished_alert_is_dropped() {
        let mut page = page_with_alerts(1);
        let mut runner = EffectRunner::new();
        let t0 = Instant::now();

        runner.schedule(t0, alerts::dismissal_effects(&page.alerts));
        page.remove_alert(0);

        assert!(!runner.run_due(&mut page, t0 + Duration::from_secs(10)));
        assert!(page.alerts.is_empty());
    }
}
