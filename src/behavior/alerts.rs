//! Alert auto-dismissal timing.
//!
//! Every flash alert present at page load is dismissed on a fixed
//! schedule: it starts fading after [`FADE_AFTER`], and is deleted from
//! the page [`REMOVE_GRACE`] after that (the fade-out transition time).
//! Alerts that appear later are not tracked; a new page load replans.

use std::time::Duration;

use super::effect::Effect;
use crate::page::Alert;

/// Delay before an alert starts fading.
pub const FADE_AFTER: Duration = Duration::from_millis(5000);

/// Additional delay between fading and removal.
pub const REMOVE_GRACE: Duration = Duration::from_millis(150);

/// Dismissal effects for every alert currently on the page.
///
/// Emits a fade and a removal per alert. Deadlines are relative to the
/// page load the caller is planning.
pub fn dismissal_effects(alerts: &[Alert]) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(alerts.len() * 2);
    for alert in alerts {
        effects.push(Effect::FadeAlert {
            alert: alert.id,
            after: FADE_AFTER,
        });
        effects.push(Effect::RemoveAlert {
            alert: alert.id,
            after: FADE_AFTER + REMOVE_GRACE,
        });
    }
    effects
}
