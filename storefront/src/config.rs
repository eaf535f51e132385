// storefront/src/config.rs

use crate::errors::{Result, StoreError};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@elssyboutique.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone)]
pub struct StoreConfig {
  /// JSON file backing the key-value store. `None` keeps everything in memory.
  pub data_path: Option<PathBuf>,
  pub key_prefix: String,

  // The one credential pair the login gate accepts.
  pub admin_email: String,
  pub admin_password: String,
  pub admin_name: String,

  /// Also accept registered users (verified against their stored hash).
  pub allow_registered_login: bool,
  pub min_password_len: usize,

  pub upload_latency: Duration,
  pub cart_notice_ttl: Duration,
  pub banner_notice_ttl: Duration,
  pub preview_limit: usize,
  pub event_buffer: usize,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      data_path: None,
      key_prefix: "elssy".to_string(),
      admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
      admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
      admin_name: "Store Admin".to_string(),
      allow_registered_login: false,
      min_password_len: 6,
      upload_latency: Duration::from_millis(1000),
      cart_notice_ttl: Duration::from_secs(3),
      banner_notice_ttl: Duration::from_secs(5),
      preview_limit: 6,
      event_buffer: 64,
    }
  }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match env::var(name) {
    Ok(raw) => raw
      .trim()
      .parse::<T>()
      .map_err(|e| StoreError::Config(format!("Invalid {}: {}", name, e))),
    Err(env::VarError::NotPresent) => Ok(default),
    Err(e) => Err(StoreError::Config(format!("Unreadable environment variable '{}': {}", name, e))),
  }
}

impl StoreConfig {
  /// Reads `STOREFRONT_*` variables (after loading a `.env` file if present).
  /// Unset variables keep their defaults.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    let defaults = Self::default();

    let data_path = env::var("STOREFRONT_DATA_PATH")
      .ok()
      .filter(|p| !p.trim().is_empty())
      .map(PathBuf::from);

    let key_prefix = parse_var("STOREFRONT_KEY_PREFIX", defaults.key_prefix)?;
    let admin_email = parse_var("STOREFRONT_ADMIN_EMAIL", defaults.admin_email)?;
    let admin_password = parse_var("STOREFRONT_ADMIN_PASSWORD", defaults.admin_password)?;
    let admin_name = parse_var("STOREFRONT_ADMIN_NAME", defaults.admin_name)?;
    let allow_registered_login = parse_var("STOREFRONT_ALLOW_REGISTERED_LOGIN", defaults.allow_registered_login)?;
    let min_password_len = parse_var("STOREFRONT_MIN_PASSWORD_LEN", defaults.min_password_len)?;
    let upload_latency_ms = parse_var("STOREFRONT_UPLOAD_LATENCY_MS", defaults.upload_latency.as_millis() as u64)?;
    let preview_limit = parse_var("STOREFRONT_PREVIEW_LIMIT", defaults.preview_limit)?;
    let event_buffer = parse_var("STOREFRONT_EVENT_BUFFER", defaults.event_buffer)?;

    if admin_email.is_empty() || admin_password.is_empty() {
      return Err(StoreError::Config("Admin credentials must not be empty".to_string()));
    }
    if event_buffer == 0 {
      return Err(StoreError::Config("STOREFRONT_EVENT_BUFFER must be at least 1".to_string()));
    }

    tracing::info!(
      storage = if data_path.is_some() { "file" } else { "memory" },
      %key_prefix,
      allow_registered_login,
      "Store configuration loaded."
    );

    Ok(Self {
      data_path,
      key_prefix,
      admin_email,
      admin_password,
      admin_name,
      allow_registered_login,
      min_password_len,
      upload_latency: Duration::from_millis(upload_latency_ms),
      preview_limit,
      event_buffer,
      ..defaults
    })
  }

  /// Configuration for tests and embedding: in memory, no simulated latency.
  pub fn in_memory() -> Self {
    Self {
      upload_latency: Duration::ZERO,
      ..Self::default()
    }
  }
}
