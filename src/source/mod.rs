//! Page source abstraction.
//!
//! The board consumes pages the TrimQ server renders. A [`PageSource`]
//! hands those pages over, either by polling a file the server writes or
//! by receiving them over an in-memory channel when embedded.

mod channel;
mod file;

pub use channel::ChannelSource;
pub use file::FileSource;

use std::fmt::Debug;

use crate::page::PageSnapshot;

/// Supplies rendered pages to the board.
pub trait PageSource: Send + Debug {
    /// Poll for a newly rendered page.
    ///
    /// Returns `Some(page)` only when the source has something newer than
    /// the last page it handed out. Non-blocking.
    fn poll(&mut self) -> Option<PageSnapshot>;

    /// Re-fetch the current page from the origin, bypassing any caching
    /// the source does.
    ///
    /// This is the scheduled-refresh path: it must return the origin's
    /// current page even if nothing changed since the last poll. Returns
    /// `None` only when the origin cannot be read at all.
    fn reload(&mut self) -> Option<PageSnapshot>;

    /// Human-readable description of the source, for the status bar.
    fn description(&self) -> &str;

    /// Error from the most recent fetch, if any.
    fn error(&self) -> Option<&str>;
}
