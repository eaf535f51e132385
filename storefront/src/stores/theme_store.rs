// storefront/src/stores/theme_store.rs

use crate::errors::Result;
use crate::events::StoreEvent;
use crate::models::Theme;
use crate::state::StoreState;
use crate::storage::StorageKey;
use tracing::debug;

/// Light/dark preference, shared by every page.
#[derive(Clone)]
pub struct ThemeStore {
  state: StoreState,
}

impl ThemeStore {
  pub fn new(state: StoreState) -> Self {
    Self { state }
  }

  /// Stored preference; anything unrecognised reads as light.
  pub fn get(&self) -> Result<Theme> {
    let raw = self.state.storage.load_raw(StorageKey::Theme)?;
    Ok(raw.and_then(|r| r.parse().ok()).unwrap_or_default())
  }

  pub fn set(&self, theme: Theme) -> Result<()> {
    self.state.storage.save_raw(StorageKey::Theme, theme.as_str())?;
    debug!(theme = theme.as_str(), "Theme saved.");
    self.state.feed.publish(StoreEvent::ThemeChanged);
    Ok(())
  }

  pub fn toggle(&self) -> Result<Theme> {
    let next = self.get()?.toggled();
    self.set(next)?;
    Ok(next)
  }
}
