// storefront/src/flows/login_flow.rs

use crate::config::StoreConfig;
use crate::errors::{Result, StoreError};
use crate::flows::common_steps::{self, missing};
use crate::flows::contexts::LoginCtxData;
use crate::models::{Role, Session, User};
use crate::services::auth_service;
use crate::storage::{Storage, StorageKey};
use shopflow::{Flow, FlowContext, FlowRegistry, StepControl};
use tracing::{info, warn};

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// The session the fixed console account signs in as.
pub fn admin_session(config: &StoreConfig) -> Session {
  Session {
    id: "1".to_string(),
    name: config.admin_name.clone(),
    email: config.admin_email.clone(),
    role: Role::Admin,
  }
}

/// Looks `email` up among registered users and checks the password.
/// An unreadable stored hash counts as a mismatch.
fn registered_session(storage: &Storage, email: &str, password: &str) -> Result<Option<Session>> {
  let users: Vec<User> = storage.load_list(StorageKey::Users)?;
  let Some(user) = users.iter().find(|u| u.email == email) else {
    return Ok(None);
  };
  match auth_service::verify_password(&user.password_hash, password) {
    Ok(true) => Ok(Some(Session::from(user))),
    Ok(false) => Ok(None),
    Err(e) => {
      warn!(user_id = %user.id, error = %e, "Stored password hash is unreadable.");
      Ok(None)
    }
  }
}

pub fn register_login_flow(registry: &FlowRegistry<StoreError>) {
  let mut flow = Flow::<LoginCtxData, StoreError>::new(&[
    ("require_credentials", false, None),
    ("verify_credentials", false, None),
    ("open_session", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("require_credentials", |ctx: FlowContext<LoginCtxData>| {
    Box::pin(async move {
      let (email_blank, password_blank) = {
        let guard = ctx.read();
        (guard.email.trim().is_empty(), guard.password.is_empty())
      };
      if email_blank {
        return Err(StoreError::validation("email", FILL_ALL_FIELDS_MESSAGE));
      }
      if password_blank {
        return Err(StoreError::validation("password", FILL_ALL_FIELDS_MESSAGE));
      }
      Ok(StepControl::Continue)
    })
  });

  flow.on_step("verify_credentials", |ctx: FlowContext<LoginCtxData>| {
    Box::pin(async move {
      let (email, password, state) = {
        let guard = ctx.read();
        (guard.email.trim().to_string(), guard.password.clone(), guard.state.clone())
      };
      let config = &state.config;
      let session = if email == config.admin_email && password == config.admin_password {
        Some(admin_session(config))
      } else if config.allow_registered_login {
        registered_session(&state.storage, &email, &password)?
      } else {
        None
      };
      let Some(session) = session else {
        warn!(%email, "Login rejected.");
        return Err(StoreError::InvalidCredentials);
      };
      ctx.write().session = Some(session);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("open_session", |ctx: FlowContext<LoginCtxData>| {
    Box::pin(async move {
      let (session, remember, storage) = {
        let guard = ctx.read();
        (guard.session.clone(), guard.remember, guard.state.storage.clone())
      };
      let session = session.ok_or_else(|| missing("session"))?;
      storage.save(StorageKey::CurrentUser, &session)?;
      if remember {
        storage.save_raw(StorageKey::RememberMe, "true")?;
      }
      info!(user_id = %session.id, remember, "Session opened.");
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_session_changed::<LoginCtxData>);

  registry.register(flow);
}
