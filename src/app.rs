//! Application state: one page view at a time, plus its planned effects.

use std::time::{Duration, Instant};

use crate::behavior::{plan_page_load, EffectRunner};
use crate::clock::{format_hhmm, Clock};
use crate::page::{PageData, PageSnapshot};
use crate::source::PageSource;
use crate::ui::Theme;

/// Main application state.
///
/// Holds the current page and drives its behaviors. Each page the source
/// hands over goes through [`App::page_loaded`] exactly once: the page
/// state is rebuilt from scratch and the behaviors are re-planned, the
/// same way a browser navigation discards the old page wholesale.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    source: Box<dyn PageSource>,
    clock: Box<dyn Clock>,

    /// The live page, if one has loaded.
    pub page: Option<PageData>,
    pub load_error: Option<String>,
    /// When the current page finished loading.
    pub last_loaded: Option<Instant>,

    refresh_after: Duration,
    runner: EffectRunner,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given page source, clock, and refresh
    /// interval.
    pub fn new(source: Box<dyn PageSource>, clock: Box<dyn Clock>, refresh_after: Duration) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            clock,
            page: None,
            load_error: None,
            last_loaded: None,
            // A zero interval would come due inside the load itself.
            refresh_after: refresh_after.max(Duration::from_millis(1)),
            runner: EffectRunner::new(),
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current page source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// The clock's current time as `HH:MM`, for the header.
    pub fn now_hhmm(&self) -> String {
        format_hhmm(self.clock.now())
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the source for a newly rendered page.
    ///
    /// A new page triggers a full page load. Returns true when one did.
    pub fn poll_source(&mut self, now: Instant) -> bool {
        match self.source.poll() {
            Some(snapshot) => {
                self.page_loaded(snapshot, now);
                true
            }
            None => {
                if let Some(err) = self.source.error() {
                    self.load_error = Some(err.to_string());
                }
                false
            }
        }
    }

    /// Force a re-fetch from the origin, as the scheduled refresh does.
    ///
    /// On failure the current page stays up and the error is surfaced in
    /// the status bar; the refresh itself has no other failure path.
    pub fn reload_now(&mut self, now: Instant) {
        match self.source.reload() {
            Some(snapshot) => self.page_loaded(snapshot, now),
            None => {
                if let Some(err) = self.source.error() {
                    self.load_error = Some(err.to_string());
                }
            }
        }
    }

    /// Advance time: apply every effect that has come due.
    ///
    /// When the scheduled refresh comes due this performs the reload,
    /// which replans everything for the fresh page.
    pub fn tick(&mut self, now: Instant) {
        let reload_due = match self.page.as_mut() {
            Some(page) => self.runner.run_due(page, now),
            None => false,
        };

        if reload_due {
            self.reload_now(now);
        }
    }

    /// Seconds until the scheduled refresh, if one is pending.
    pub fn seconds_until_reload(&self, now: Instant) -> Option<u64> {
        self.runner
            .next_reload()
            .map(|deadline| deadline.saturating_duration_since(now).as_secs())
    }

    /// The initialization trigger: runs once per loaded page.
    ///
    /// Rebuilds page state, plans the behaviors against the injected
    /// clock, and applies the immediate ones (highlighting). Pending
    /// effects of the previous page are discarded.
    fn page_loaded(&mut self, snapshot: PageSnapshot, now: Instant) {
        let mut page = PageData::from_snapshot(snapshot);

        let effects = plan_page_load(&page, self.clock.now(), self.refresh_after);
        self.runner.schedule(now, effects);
        self.runner.run_due(&mut page, now);

        self.page = Some(page);
        self.load_error = None;
        self.last_loaded = Some(now);
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
