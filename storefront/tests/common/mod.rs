// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::path::Path;
use std::time::Duration;
use storefront::models::ProductDraft;
use storefront::{StoreConfig, StoreEvent, Storefront};
use tokio::sync::broadcast;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn memory_store() -> Storefront {
  setup_tracing();
  Storefront::open(StoreConfig::in_memory()).expect("in-memory storefront")
}

pub fn memory_store_with(config: StoreConfig) -> Storefront {
  setup_tracing();
  Storefront::open(config).expect("in-memory storefront")
}

pub fn file_config(path: &Path) -> StoreConfig {
  StoreConfig {
    data_path: Some(path.to_path_buf()),
    ..StoreConfig::in_memory()
  }
}

pub fn file_store(path: &Path) -> Storefront {
  setup_tracing();
  Storefront::open(file_config(path)).expect("file storefront")
}

pub fn dress(name: &str, price: i64) -> ProductDraft {
  ProductDraft::new(name, price, "Dresses")
}

pub async fn login_admin(store: &Storefront) {
  let email = store.config().admin_email.clone();
  let password = store.config().admin_password.clone();
  store.auth().login(&email, &password, false).await.expect("admin login");
}

/// Collects events already queued on `rx` without waiting.
pub fn drain(rx: &mut broadcast::Receiver<StoreEvent>) -> Vec<StoreEvent> {
  let mut events = Vec::new();
  while let Ok(event) = rx.try_recv() {
    events.push(event);
  }
  events
}

pub const SHORT_WAIT: Duration = Duration::from_millis(200);
