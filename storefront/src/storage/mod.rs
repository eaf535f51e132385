// storefront/src/storage/mod.rs

//! Key-value persistence. Backends store plain strings per key; `Storage`
//! layers JSON (de)serialization and key naming on top.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::errors::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{instrument, trace};

/// A string key-value store scoped to one storefront, like a browser's local storage.
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Result<Option<String>>;
  fn set(&self, key: &str, value: String) -> Result<()>;
  fn remove(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
  Products,
  Users,
  CurrentUser,
  Cart,
  RememberMe,
  Theme,
}

impl StorageKey {
  /// Full key under `prefix`. The theme key is shared across storefronts and
  /// carries no prefix.
  pub fn full_name(self, prefix: &str) -> String {
    let suffix = match self {
      StorageKey::Products => "Products",
      StorageKey::Users => "Users",
      StorageKey::CurrentUser => "CurrentUser",
      StorageKey::Cart => "Cart",
      StorageKey::RememberMe => "RememberMe",
      StorageKey::Theme => return "theme".to_string(),
    };
    format!("{}{}", prefix, suffix)
  }
}

/// Typed access to a `KeyValueStore`.
#[derive(Clone)]
pub struct Storage {
  backend: Arc<dyn KeyValueStore>,
  prefix: String,
}

impl Storage {
  pub fn new(backend: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
    Self {
      backend,
      prefix: prefix.into(),
    }
  }

  pub fn key(&self, key: StorageKey) -> String {
    key.full_name(&self.prefix)
  }

  /// Reads a JSON array; an absent key is an empty list.
  #[instrument(name = "storage::load_list", skip(self), level = "trace", err(Display))]
  pub fn load_list<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Vec<T>> {
    Ok(self.load(key)?.unwrap_or_default())
  }

  pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Option<T>> {
    match self.backend.get(&self.key(key))? {
      Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
      None => Ok(None),
    }
  }

  pub fn save<T: Serialize + ?Sized>(&self, key: StorageKey, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    trace!(key = ?key, bytes = raw.len(), "Persisting value.");
    self.backend.set(&self.key(key), raw)
  }

  /// Raw string values (theme, remember-me flag) are stored without JSON quoting.
  pub fn load_raw(&self, key: StorageKey) -> Result<Option<String>> {
    self.backend.get(&self.key(key))
  }

  pub fn save_raw(&self, key: StorageKey, value: &str) -> Result<()> {
    self.backend.set(&self.key(key), value.to_string())
  }

  pub fn clear(&self, key: StorageKey) -> Result<()> {
    self.backend.remove(&self.key(key))
  }
}
