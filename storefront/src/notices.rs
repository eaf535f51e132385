// storefront/src/notices.rs

//! Transient user-facing messages. Errors and confirmations are turned into
//! notices at the store boundary; the presentation layer shows `active()`.

use crate::errors::StoreError;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Success,
  Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeChannel {
  /// Console and login messages. A new banner replaces the current one.
  Banner,
  /// Cart confirmations. Toasts stack.
  Toast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub id: u64,
  pub kind: NoticeKind,
  pub channel: NoticeChannel,
  pub message: String,
  pub posted_at: Instant,
  pub ttl: Duration,
}

impl Notice {
  pub fn expires_at(&self) -> Instant {
    self.posted_at + self.ttl
  }

  pub fn is_expired_at(&self, now: Instant) -> bool {
    now >= self.expires_at()
  }
}

#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
  inner: Arc<Mutex<Vec<Notice>>>,
  next_id: Arc<AtomicU64>,
}

impl NoticeBoard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn post(&self, kind: NoticeKind, channel: NoticeChannel, message: impl Into<String>, ttl: Duration) -> Notice {
    self.post_at(kind, channel, message, ttl, Instant::now())
  }

  pub fn post_at(
    &self,
    kind: NoticeKind,
    channel: NoticeChannel,
    message: impl Into<String>,
    ttl: Duration,
    now: Instant,
  ) -> Notice {
    let notice = Notice {
      id: self.next_id.fetch_add(1, Ordering::Relaxed),
      kind,
      channel,
      message: message.into(),
      posted_at: now,
      ttl,
    };
    let mut notices = self.inner.lock();
    notices.retain(|n| !n.is_expired_at(now));
    if channel == NoticeChannel::Banner {
      notices.retain(|n| n.channel != NoticeChannel::Banner);
    }
    notices.push(notice.clone());
    notice
  }

  pub fn success(&self, message: impl Into<String>, ttl: Duration) -> Notice {
    self.post(NoticeKind::Success, NoticeChannel::Banner, message, ttl)
  }

  pub fn error(&self, err: &StoreError, ttl: Duration) -> Notice {
    self.post(NoticeKind::Error, NoticeChannel::Banner, err.notice_text(), ttl)
  }

  pub fn toast(&self, message: impl Into<String>, ttl: Duration) -> Notice {
    self.post(NoticeKind::Success, NoticeChannel::Toast, message, ttl)
  }

  /// Notices still on screen; expired ones are dropped.
  pub fn active(&self) -> Vec<Notice> {
    self.active_at(Instant::now())
  }

  pub fn active_at(&self, now: Instant) -> Vec<Notice> {
    let mut notices = self.inner.lock();
    notices.retain(|n| !n.is_expired_at(now));
    notices.clone()
  }

  pub fn dismiss(&self, id: u64) {
    self.inner.lock().retain(|n| n.id != id);
  }

  pub fn clear(&self) {
    self.inner.lock().clear();
  }

  #[cfg(test)]
  fn stored_len(&self) -> usize {
    self.inner.lock().len()
  }
}
