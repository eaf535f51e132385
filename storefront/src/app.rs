// storefront/src/app.rs

use crate::config::StoreConfig;
use crate::errors::Result;
use crate::events::{ChangeFeed, StoreEvent};
use crate::flows;
use crate::notices::NoticeBoard;
use crate::state::StoreState;
use crate::storage::{FileStorage, KeyValueStore, MemoryStorage, Storage};
use crate::stores::{AuthGate, CartStore, ProductStore, ThemeStore};
use crate::views::live::{spawn_live_view, LiveView};
use crate::views::pages::{AdminConsoleFrame, AdminConsolePage, CartPanel, CartPanelFrame, CatalogPage};
use crate::views::CatalogView;
use shopflow::FlowRegistry;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::info;

/// One storefront: its storage, flows, change feed and notice board.
///
/// Handles are cheap clones over shared state; every page of the site works
/// from the same `Storefront`.
#[derive(Clone)]
pub struct Storefront {
  state: StoreState,
}

impl Storefront {
  /// Opens the file store at `config.data_path`, or an empty in-memory store.
  pub fn open(config: StoreConfig) -> Result<Self> {
    let backend: Arc<dyn KeyValueStore> = match &config.data_path {
      Some(path) => Arc::new(FileStorage::open(path)?),
      None => Arc::new(MemoryStorage::new()),
    };
    Ok(Self::with_backend(config, backend))
  }

  /// Builds a storefront over an existing backend. Two storefronts sharing a
  /// backend see each other's writes but not each other's events.
  pub fn with_backend(config: StoreConfig, backend: Arc<dyn KeyValueStore>) -> Self {
    let registry = FlowRegistry::new();
    flows::register_all_flows(&registry);

    let state = StoreState {
      storage: Storage::new(backend, config.key_prefix.clone()),
      feed: ChangeFeed::new(config.event_buffer),
      notices: NoticeBoard::new(),
      flows: Arc::new(registry),
      config: Arc::new(config),
    };
    info!(prefix = %state.config.key_prefix, "Storefront opened.");
    Self { state }
  }

  pub fn state(&self) -> &StoreState {
    &self.state
  }

  pub fn config(&self) -> &StoreConfig {
    &self.state.config
  }

  pub fn products(&self) -> ProductStore {
    ProductStore::new(self.state.clone())
  }

  pub fn cart(&self) -> CartStore {
    CartStore::new(self.state.clone())
  }

  pub fn auth(&self) -> AuthGate {
    AuthGate::new(self.state.clone())
  }

  pub fn theme(&self) -> ThemeStore {
    ThemeStore::new(self.state.clone())
  }

  pub fn notices(&self) -> &NoticeBoard {
    &self.state.notices
  }

  pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
    self.state.feed.subscribe()
  }

  pub fn live_catalog(&self) -> LiveView<CatalogView> {
    spawn_live_view(&self.state.feed, CatalogPage { products: self.products() })
  }

  pub fn live_cart_panel(&self) -> LiveView<CartPanelFrame> {
    spawn_live_view(&self.state.feed, CartPanel { cart: self.cart() })
  }

  pub fn live_admin_console(&self) -> LiveView<AdminConsoleFrame> {
    spawn_live_view(
      &self.state.feed,
      AdminConsolePage {
        products: self.products(),
        preview_limit: self.state.config.preview_limit,
      },
    )
  }
}
