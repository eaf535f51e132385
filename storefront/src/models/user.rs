// storefront/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: String,
  pub name: String,
  pub email: String,
  /// Argon2 PHC string. Kept under the `password` key of the stored schema.
  #[serde(rename = "password")]
  pub password_hash: String,
  pub role: Role,
  pub created_at: DateTime<Utc>,
}

/// The signup form as submitted.
#[derive(Clone, Default)]
pub struct SignupForm {
  pub name: String,
  pub email: String,
  pub password: String,
  pub confirm_password: String,
  pub agree_terms: bool,
}

impl SignupForm {
  pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
    let password = password.into();
    Self {
      name: name.into(),
      email: email.into(),
      confirm_password: password.clone(),
      password,
      agree_terms: true,
    }
  }
}

impl std::fmt::Debug for SignupForm {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SignupForm")
      .field("name", &self.name)
      .field("email", &self.email)
      .field("password", &"[REDACTED]")
      .field("agree_terms", &self.agree_terms)
      .finish()
  }
}
