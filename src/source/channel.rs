//! Channel-based page source.
//!
//! Receives page snapshots via a tokio watch channel. Useful when the
//! board is embedded in a larger process that renders pages itself
//! (and in tests, where it stands in for the server).

use tokio::sync::watch;

use super::PageSource;
use crate::page::PageSnapshot;

/// A page source fed through a watch channel.
///
/// The producer pushes freshly rendered pages; `poll` hands each one out
/// once, and `reload` returns whatever the channel currently holds -
/// the channel end is the origin, so there is no cache to bypass.
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<PageSnapshot>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    pub fn new(receiver: watch::Receiver<PageSnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for pushing pages to a `ChannelSource`.
    ///
    /// Returns (sender, source); the sender side renders pages, the
    /// source side plugs into the board.
    pub fn create(source_description: &str) -> (watch::Sender<PageSnapshot>, Self) {
        let (tx, rx) = watch::channel(PageSnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl PageSource for ChannelSource {
    fn poll(&mut self) -> Option<PageSnapshot> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        if self.receiver.has_changed().unwrap_or(false) {
            Some(self.receiver.borrow_and_update().clone())
        } else {
            None
        }
    }

    fn reload(&mut self) -> Option<PageSnapshot> {
        Some(self.receiver.borrow_and_update().clone())
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // The channel itself cannot fail; a dropped sender just means
        // no further pages arrive.
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{FlashAlert, QueueView};

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the default (empty) page
        let page = source.poll().unwrap();
        assert!(page.queue.is_none());

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Push a new page
        let mut rendered = PageSnapshot::default();
        rendered.queue = Some(QueueView {
            branch: "uptown".into(),
            entries: Vec::new(),
        });
        tx.send(rendered).unwrap();

        let page = source.poll().unwrap();
        assert_eq!(page.queue.unwrap().branch, "uptown");
    }

    #[test]
    fn test_reload_returns_current_page() {
        let (tx, mut source) = ChannelSource::create("test");
        let _ = source.poll();

        let mut rendered = PageSnapshot::default();
        rendered.alerts.push(FlashAlert {
            category: Default::default(),
            message: "hello".into(),
        });
        tx.send(rendered).unwrap();

        // reload sees the latest page even without an intervening poll,
        // and repeated reloads keep returning it.
        assert_eq!(source.reload().unwrap().alerts.len(), 1);
        assert_eq!(source.reload().unwrap().alerts.len(), 1);
    }
}
