// storefront/src/storage/memory.rs

use crate::errors::Result;
use crate::storage::KeyValueStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-local store. Everything is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

impl KeyValueStore for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: String) -> Result<()> {
    self.entries.write().insert(key.to_string(), value);
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.entries.write().remove(key);
    Ok(())
  }
}
