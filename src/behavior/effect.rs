//! Scheduled-effect descriptors and page-load planning.

use std::time::Duration;

use chrono::NaiveTime;

use super::{alerts, highlight};
use crate::clock::format_hhmm;
use crate::page::PageData;

/// A side effect decided at page load, to be executed later by the
/// [`super::EffectRunner`].
///
/// `after` is the delay from the page load that planned the effect.
/// [`Effect::MarkCurrent`] carries no delay - highlighting happens as
/// part of the page load itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Re-fetch the page from its origin, discarding all page state.
    Reload { after: Duration },
    /// Mark a queue row as the current customer.
    MarkCurrent { row: usize },
    /// Start fading an alert out.
    FadeAlert { alert: usize, after: Duration },
    /// Delete an alert from the page.
    RemoveAlert { alert: usize, after: Duration },
}

impl Effect {
    /// Delay from page load until this effect is due.
    pub fn delay(&self) -> Duration {
        match self {
            Effect::Reload { after } => *after,
            Effect::MarkCurrent { .. } => Duration::ZERO,
            Effect::FadeAlert { after, .. } => *after,
            Effect::RemoveAlert { after, .. } => *after,
        }
    }
}

/// Plan the behaviors for a freshly loaded page.
///
/// This is the composition root for one page view and runs exactly once
/// per load. If the page carries a queue display, a reload is scheduled
/// for `refresh_after` from now and every row whose slot matches `now`
/// is marked current; pages without a queue display get neither. Alert
/// dismissal is planned unconditionally for whatever alerts the page
/// carries at this instant.
///
/// Pure: reads the page and the supplied time, touches no clocks or
/// timers. The returned descriptors are executed by the runner.
pub fn plan_page_load(page: &PageData, now: NaiveTime, refresh_after: Duration) -> Vec<Effect> {
    let mut effects = Vec::new();

    if page.has_queue_display {
        effects.push(Effect::Reload {
            after: refresh_after,
        });

        let now_hhmm = format_hhmm(now);
        for row in highlight::current_rows(&page.rows, &now_hhmm) {
            effects.push(Effect::MarkCurrent { row });
        }
    }

    effects.extend(alerts::dismissal_effects(&page.alerts));

    effects
}
