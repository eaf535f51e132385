// storefront/src/state.rs

use crate::config::StoreConfig;
use crate::errors::{Result, StoreError};
use crate::events::ChangeFeed;
use crate::models::Session;
use crate::notices::NoticeBoard;
use crate::storage::{Storage, StorageKey};
use shopflow::FlowRegistry;
use std::sync::Arc;

/// Everything a store handle or a flow step needs. Cheap to clone.
#[derive(Clone)]
pub struct StoreState {
  pub storage: Storage,
  pub config: Arc<StoreConfig>,
  pub feed: ChangeFeed,
  pub notices: NoticeBoard,
  pub flows: Arc<FlowRegistry<StoreError>>,
}

impl StoreState {
  pub fn current_session(&self) -> Result<Option<Session>> {
    self.storage.load(StorageKey::CurrentUser)
  }

  /// Turns an operation's result into a banner: the error text on failure,
  /// `success` (if any) otherwise. The result is passed through unchanged.
  pub fn settle<T>(&self, result: Result<T>, success: Option<&str>) -> Result<T> {
    match &result {
      Ok(_) => {
        if let Some(message) = success {
          self.notices.success(message, self.config.banner_notice_ttl);
        }
      }
      Err(err) => {
        if err.is_user_facing() {
          tracing::info!(error = %err, "Operation rejected.");
        } else {
          tracing::error!(error = %err, "Operation failed.");
        }
        self.notices.error(err, self.config.banner_notice_ttl);
      }
    }
    result
  }
}
