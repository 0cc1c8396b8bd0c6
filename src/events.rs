//! Change notification for whitelist mutations
//!
//! The store owns a broadcast channel and fires a `MediaStoreChanged` event
//! after every mutating call. Sends are fire-and-forget: delivery is not
//! part of the mutation's atomicity, and a send with nobody listening is
//! fine.

use tokio::sync::broadcast;

/// Capacity of the change-event channel. Lagging subscribers miss old
/// events rather than block the store.
const CHANNEL_CAPACITY: usize = 16;

/// Events emitted by the whitelist store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The set of whitelisted folders changed; media should be rescanned
    MediaStoreChanged,
}

/// Store event receiver type
pub type StoreEventReceiver = broadcast::Receiver<StoreEvent>;

/// Broadcast sender shared by all clones of a store handle
#[derive(Debug, Clone)]
pub(crate) struct ChangeNotifier {
    tx: broadcast::Sender<StoreEvent>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to events sent from this point on
    pub fn subscribe(&self) -> StoreEventReceiver {
        self.tx.subscribe()
    }

    /// An error here just means nobody is subscribed
    pub fn media_store_changed(&self) {
        let _ = self.tx.send(StoreEvent::MediaStoreChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[tokio::test]
    async fn every_subscriber_receives_the_event() {
        let notifier = ChangeNotifier::new();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.media_store_changed();

        assert_eq!(first.try_recv().unwrap(), StoreEvent::MediaStoreChanged);
        assert_eq!(second.try_recv().unwrap(), StoreEvent::MediaStoreChanged);
    }

    #[tokio::test]
    async fn send_without_subscribers_is_not_an_error() {
        let notifier = ChangeNotifier::new();
        notifier.media_store_changed();
    }

    #[tokio::test]
    async fn late_subscriber_misses_earlier_events() {
        let notifier = ChangeNotifier::new();
        notifier.media_store_changed();

        let mut rx = notifier.subscribe();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }
}
