// storefront/src/flows/signup_flow.rs

use crate::errors::StoreError;
use crate::flows::common_steps::{self, missing};
use crate::flows::contexts::SignupCtxData;
use crate::models::{Role, User};
use crate::services::{auth_service, ids};
use crate::storage::StorageKey;
use chrono::Utc;
use shopflow::{Flow, FlowContext, FlowRegistry, StepControl};
use tracing::{event, info, warn, Level};

pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const TERMS_MESSAGE: &str = "Please agree to the terms and conditions";

fn password_length_message(min_len: usize) -> String {
  format!("Password must be at least {} characters long", min_len)
}

/// Signup rules run in this order and the first failure wins.
pub fn register_signup_flow(registry: &FlowRegistry<StoreError>) {
  let mut flow = Flow::<SignupCtxData, StoreError>::new(&[
    ("require_all_fields", false, None),
    ("match_passwords", false, None),
    ("require_terms", false, None),
    ("check_password_length", false, None),
    ("check_existing_email", false, None),
    ("hash_password", false, None),
    ("persist_user", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("require_all_fields", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let guard = ctx.read();
      let form = &guard.form;
      let blank = [
        ("name", form.name.trim()),
        ("email", form.email.trim()),
        ("password", form.password.as_str()),
        ("confirm_password", form.confirm_password.as_str()),
      ]
      .into_iter()
      .find(|(_, value)| value.is_empty());
      if let Some((field, _)) = blank {
        event!(Level::DEBUG, field, "Signup form incomplete.");
        return Err(StoreError::validation(field, FILL_ALL_FIELDS_MESSAGE));
      }
      Ok(StepControl::Continue)
    })
  });

  flow.on_step("match_passwords", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let matches = {
        let guard = ctx.read();
        guard.form.password == guard.form.confirm_password
      };
      if !matches {
        return Err(StoreError::validation("confirm_password", PASSWORD_MISMATCH_MESSAGE));
      }
      Ok(StepControl::Continue)
    })
  });

  flow.on_step("require_terms", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let agreed = ctx.read().form.agree_terms;
      if !agreed {
        return Err(StoreError::validation("agree_terms", TERMS_MESSAGE));
      }
      Ok(StepControl::Continue)
    })
  });

  flow.on_step("check_password_length", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let (len, min_len) = {
        let guard = ctx.read();
        (guard.form.password.chars().count(), guard.state.config.min_password_len)
      };
      if len < min_len {
        return Err(StoreError::validation("password", password_length_message(min_len)));
      }
      Ok(StepControl::Continue)
    })
  });

  flow.on_step("check_existing_email", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let (email, storage) = {
        let guard = ctx.read();
        (guard.form.email.trim().to_string(), guard.state.storage.clone())
      };
      let users: Vec<User> = storage.load_list(StorageKey::Users)?;
      if users.iter().any(|u| u.email == email) {
        warn!(%email, "Signup attempted with a registered email.");
        return Err(StoreError::DuplicateEmail(email));
      }
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("hash_password", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let password = ctx.read().form.password.clone();
      let hashed = auth_service::hash_password(&password)?;
      ctx.write().password_hash = Some(hashed);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("persist_user", |ctx: FlowContext<SignupCtxData>| {
    Box::pin(async move {
      let (form, password_hash, storage) = {
        let guard = ctx.read();
        (guard.form.clone(), guard.password_hash.clone(), guard.state.storage.clone())
      };
      let password_hash = password_hash.ok_or_else(|| missing("password hash"))?;
      let user = User {
        id: ids::next_id(),
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password_hash,
        role: Role::Admin,
        created_at: Utc::now(),
      };
      let mut users: Vec<User> = storage.load_list(StorageKey::Users)?;
      // The file backend can be written by another process between steps.
      if users.iter().any(|u| u.email == user.email) {
        return Err(StoreError::DuplicateEmail(user.email));
      }
      users.push(user.clone());
      storage.save(StorageKey::Users, &users)?;
      info!(user_id = %user.id, email = %user.email, "User registered.");
      ctx.write().created_user = Some(user);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_users_changed::<SignupCtxData>);

  registry.register(flow);
}
