// storefront/src/errors.rs

use shopflow::FlowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  /// User input failed a form rule; `field` names the first offending input.
  #[error("{message}")]
  Validation { field: &'static str, message: String },

  /// Uniform for unknown email and wrong password.
  #[error("Invalid email or password")]
  InvalidCredentials,

  #[error("User with this email already exists")]
  DuplicateEmail(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Storage error: {0}")]
  Storage(String),

  #[error("Storage I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Stored data could not be (de)serialized: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

impl StoreError {
  pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
    StoreError::Validation {
      field,
      message: message.into(),
    }
  }

  /// Whether this error is the user's to fix (shown as-is) rather than a fault of the store.
  pub fn is_user_facing(&self) -> bool {
    matches!(
      self,
      StoreError::Validation { .. } | StoreError::InvalidCredentials | StoreError::DuplicateEmail(_)
    )
  }

  /// Text for the error banner shown at the boundary.
  pub fn notice_text(&self) -> String {
    if self.is_user_facing() {
      self.to_string()
    } else {
      "Something went wrong. Please try again.".to_string()
    }
  }
}

impl From<anyhow::Error> for StoreError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<StoreError>() {
      Ok(store_err) => store_err,
      Err(other) => StoreError::Internal(format!("{:#}", other)),
    }
  }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
