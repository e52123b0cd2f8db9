//! Page-load behaviors: refresh scheduling, current-customer highlighting,
//! and alert auto-dismissal.
//!
//! Decision logic is pure: [`effect::plan_page_load`] inspects the page and
//! the injected clock once per page view and returns [`effect::Effect`]
//! descriptors. The thin [`runner::EffectRunner`] owns the deadlines and
//! applies due effects to the page on each tick. Nothing in here touches
//! the terminal or the system clock.
//!
//! ```text
//! PageData + Clock ──▶ plan_page_load() ──▶ Vec<Effect>
//!                                               │
//!                                               ▼
//!              tick ──▶ EffectRunner::run_due() ──▶ mutates PageData,
//!                                                   reports reload-due
//! ```

pub mod alerts;
pub mod effect;
pub mod highlight;
pub mod runner;

pub use effect::{plan_page_load, Effect};
pub use runner::EffectRunner;
