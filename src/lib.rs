// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # trimq-board
//!
//! A terminal queue-display board for TrimQ barbershop branches.
//!
//! The TrimQ server renders queue pages as JSON snapshots; this crate
//! displays them and applies the display-board behaviors to each page it
//! loads:
//!
//! - **Scheduled refresh**: a queue-display page re-fetches itself from
//!   the origin after a fixed interval (default 30s), discarding all
//!   page state.
//! - **Current-customer highlighting**: the row whose `HH:MM` time slot
//!   matches the wall clock is marked, at the moment the page loads.
//! - **Alert auto-dismissal**: flash alerts fade after 5s and are removed
//!   shortly after.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐   ┌──────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │  app    │──▶│ behavior │──▶│   ui     │──▶│Terminal │  │
//! │  │ (state) │   │(plan+run)│   │(render)  │   │         │  │
//! │  └────┬────┘   └────▲─────┘   └──────────┘   └─────────┘  │
//! │       │             │ clock (injected)                    │
//! │       ▼                                                   │
//! │  ┌─────────┐                                              │
//! │  │ source  │◀── FileSource | ChannelSource                │
//! │  │ (pages) │                                              │
//! │  └─────────┘                                              │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: per-page-view state; runs the load trigger once per page
//! - **[`behavior`]**: pure planning of scheduled effects, plus the thin
//!   runner that executes them when due
//! - **[`page`]**: the rendered-page model ([`PageSnapshot`] in,
//!   [`PageData`] live)
//! - **[`source`]**: where pages come from ([`PageSource`] trait with
//!   file and channel implementations)
//! - **[`clock`]**: injected time source and `HH:MM` formatting
//! - **[`ui`]**: ratatui rendering
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Display the page snapshot the server writes
//! trimq-board --file page.json
//!
//! # Refresh every 10 seconds instead of 30
//! trimq-board --file page.json --refresh 10000
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use std::time::Duration;
//! use trimq_board::{App, FileSource, WallClock};
//!
//! let source = Box::new(FileSource::new("page.json"));
//! let app = App::new(source, Box::new(WallClock), Duration::from_secs(30));
//! ```
//!
//! ### As a library with a channel source (for embedding)
//!
//! ```
//! use std::time::Duration;
//! use trimq_board::{App, ChannelSource, PageSnapshot, WallClock};
//!
//! # tokio_test::block_on(async {
//! let (tx, source) = ChannelSource::create("embedded");
//!
//! // The rendering side pushes pages as the server produces them
//! let renderer = tokio::spawn(async move {
//!     tx.send(PageSnapshot::default())
//! });
//! renderer.await.unwrap().unwrap();
//!
//! // The board picks each page up on its next poll
//! let app = App::new(Box::new(source), Box::new(WallClock), Duration::from_secs(30));
//! # });
//! ```

pub mod app;
pub mod behavior;
pub mod clock;
pub mod events;
pub mod page;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use behavior::{plan_page_load, Effect, EffectRunner};
pub use clock::{format_hhmm, Clock, FixedClock, WallClock};
pub use page::{
    AlertCategory, AlertPhase, EntryStatus, FlashAlert, PageData, PageSnapshot, QueueEntry,
    QueueView,
};
pub use source::{ChannelSource, FileSource, PageSource};
