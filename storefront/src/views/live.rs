// storefront/src/views/live.rs

//! Keeps a rendered view current. The view renders once on spawn, then again
//! after every store event it watches. There is no polling.

use crate::errors::Result;
use crate::events::{ChangeFeed, StoreEvent};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Something that can be drawn from current store contents.
pub trait View: Send + Sync + 'static {
  type Output: Clone + Send + Sync + 'static;

  fn watches(&self, event: StoreEvent) -> bool;

  fn render(&self) -> Result<Self::Output>;
}

/// The latest frame of a spawned view. Dropping it stops the refresh task.
pub struct LiveView<T> {
  frames: watch::Receiver<Option<T>>,
  task: JoinHandle<()>,
}

impl<T: Clone> LiveView<T> {
  /// The last successful render, if any.
  pub fn latest(&self) -> Option<T> {
    self.frames.borrow().clone()
  }

  /// Waits for the next re-render. `None` once the refresh task has ended.
  pub async fn next_frame(&mut self) -> Option<T> {
    self.frames.changed().await.ok()?;
    self.frames.borrow_and_update().clone()
  }
}

impl<T> Drop for LiveView<T> {
  fn drop(&mut self) {
    self.task.abort();
  }
}

/// Renders `view` and publishes the frame. Returns false once nobody is
/// listening. A failed render keeps the previous frame.
fn refresh<V: View>(view: &V, frames: &watch::Sender<Option<V::Output>>) -> bool {
  match view.render() {
    Ok(frame) => frames.send(Some(frame)).is_ok(),
    Err(e) => {
      warn!(error = %e, "View render failed; keeping the previous frame.");
      !frames.is_closed()
    }
  }
}

/// Must be called inside a tokio runtime.
pub fn spawn_live_view<V: View>(feed: &ChangeFeed, view: V) -> LiveView<V::Output> {
  // Subscribe first so nothing published during the initial render is missed.
  let mut events = feed.subscribe();
  let initial = match view.render() {
    Ok(frame) => Some(frame),
    Err(e) => {
      warn!(error = %e, "Initial view render failed.");
      None
    }
  };
  let (frames_tx, frames_rx) = watch::channel(initial);

  let task = tokio::spawn(async move {
    loop {
      let keep_going = match events.recv().await {
        Ok(event) if view.watches(event) => {
          debug!(?event, "Re-rendering view.");
          refresh(&view, &frames_tx)
        }
        Ok(_) => true,
        Err(RecvError::Lagged(skipped)) => {
          debug!(skipped, "View fell behind the change feed; re-rendering.");
          refresh(&view, &frames_tx)
        }
        Err(RecvError::Closed) => false,
      };
      if !keep_going {
        break;
      }
    }
  });

  LiveView {
    frames: frames_rx,
    task,
  }
}
