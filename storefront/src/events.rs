// storefront/src/events.rs

//! Change notifications. Every successful mutation publishes one `StoreEvent`;
//! views subscribe and re-render instead of polling storage.

use tokio::sync::broadcast;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreEvent {
  ProductsChanged,
  CartChanged,
  UsersChanged,
  SessionChanged,
  ThemeChanged,
}

#[derive(Debug, Clone)]
pub struct ChangeFeed {
  sender: broadcast::Sender<StoreEvent>,
}

impl ChangeFeed {
  pub fn new(capacity: usize) -> Self {
    let (sender, _) = broadcast::channel(capacity.max(1));
    Self { sender }
  }

  pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
    self.sender.subscribe()
  }

  /// Number of subscribers that will see the event. Publishing with nobody
  /// listening is not an error.
  pub fn publish(&self, event: StoreEvent) -> usize {
    let delivered = self.sender.send(event).unwrap_or(0);
    trace!(?event, delivered, "Store event published.");
    delivered
  }

  pub fn subscriber_count(&self) -> usize {
    self.sender.receiver_count()
  }
}
