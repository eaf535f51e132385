// storefront/src/storage/file.rs

use crate::errors::{Result, StoreError};
use crate::storage::KeyValueStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// A JSON object file `{ "key": "value", ... }`.
///
/// Every call re-reads the file, so another process sharing it sees changes on
/// its next read. Writes are read-modify-write of the whole file: concurrent
/// writers in different processes race and the last write wins.
#[derive(Debug)]
pub struct FileStorage {
  path: PathBuf,
  // Serializes read-modify-write cycles within this process.
  write_lock: Mutex<()>,
}

impl FileStorage {
  #[instrument(name = "FileStorage::open", err(Display))]
  pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent)?;
    }
    let storage = Self {
      path,
      write_lock: Mutex::new(()),
    };
    // Fail early on an unreadable or corrupt file.
    let entries = storage.read_all()?;
    debug!(path = %storage.path.display(), keys = entries.len(), "File storage opened.");
    Ok(storage)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn read_all(&self) -> Result<BTreeMap<String, String>> {
    match fs::read_to_string(&self.path) {
      Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
      Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
        StoreError::Storage(format!("corrupt storage file {}: {}", self.path.display(), e))
      }),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
      Err(e) => Err(StoreError::Io(e)),
    }
  }

  fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
    let tmp = self.path.with_extension("tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }

  fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
    let _guard = self.write_lock.lock();
    let mut entries = self.read_all()?;
    f(&mut entries);
    self.write_all(&entries)
  }
}

impl KeyValueStore for FileStorage {
  fn get(&self, key: &str) -> Result<Option<String>> {
    Ok(self.read_all()?.remove(key))
  }

  fn set(&self, key: &str, value: String) -> Result<()> {
    self.modify(|entries| {
      entries.insert(key.to_string(), value);
    })
  }

  fn remove(&self, key: &str) -> Result<()> {
    self.modify(|entries| {
      entries.remove(key);
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn values_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    {
      let store = FileStorage::open(&path).unwrap();
      store.set("theme", "dark".to_string()).unwrap();
    }
    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
  }

  #[test]
  fn second_handle_sees_out_of_band_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");
    let tab_a = FileStorage::open(&path).unwrap();
    let tab_b = FileStorage::open(&path).unwrap();

    tab_a.set("elssyCart", "[]".to_string()).unwrap();
    assert_eq!(tab_b.get("elssyCart").unwrap().as_deref(), Some("[]"));

    tab_b.remove("elssyCart").unwrap();
    assert_eq!(tab_a.get("elssyCart").unwrap(), None);
  }

  #[test]
  fn corrupt_file_is_rejected_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2").unwrap();
    assert!(matches!(FileStorage::open(&path), Err(StoreError::Storage(_))));
  }
}
