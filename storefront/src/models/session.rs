// storefront/src/models/session.rs

use crate::models::user::{Role, User};
use serde::{Deserialize, Serialize};

/// The signed-in actor. No token, no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub id: String,
  pub name: String,
  pub email: String,
  pub role: Role,
}

impl From<&User> for Session {
  fn from(user: &User) -> Self {
    Self {
      id: user.id.clone(),
      name: user.name.clone(),
      email: user.email.clone(),
      role: user.role,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
  LoggedOut,
  LoggedIn(Session),
}

impl SessionState {
  pub fn is_logged_in(&self) -> bool {
    matches!(self, SessionState::LoggedIn(_))
  }

  pub fn session(&self) -> Option<&Session> {
    match self {
      SessionState::LoggedIn(s) => Some(s),
      SessionState::LoggedOut => None,
    }
  }
}

impl From<Option<Session>> for SessionState {
  fn from(session: Option<Session>) -> Self {
    session.map_or(SessionState::LoggedOut, SessionState::LoggedIn)
  }
}
