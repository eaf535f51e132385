// storefront/src/stores/auth_gate.rs

use crate::errors::{Result, StoreError};
use crate::events::StoreEvent;
use crate::flows::contexts::{LoginCtxData, SignupCtxData};
use crate::gate::{self, GateDecision};
use crate::models::{Session, SessionState, SignupForm, User};
use crate::state::StoreState;
use crate::storage::StorageKey;
use shopflow::{FlowContext, FlowOutcome};
use tracing::{info, instrument};

pub const LOGIN_MESSAGE: &str = "Login successful! Redirecting...";
pub const SIGNUP_MESSAGE: &str = "Account created successfully! You can now login.";

/// Sign-in state for the admin console, and the registration form behind it.
#[derive(Clone)]
pub struct AuthGate {
  state: StoreState,
}

impl AuthGate {
  pub fn new(state: StoreState) -> Self {
    Self { state }
  }

  pub fn current(&self) -> Result<Option<Session>> {
    self.state.current_session()
  }

  pub fn session_state(&self) -> Result<SessionState> {
    Ok(SessionState::from(self.current()?))
  }

  /// Whether "remember me" was ticked at some login.
  pub fn remember_me(&self) -> Result<bool> {
    Ok(self.state.storage.load_raw(StorageKey::RememberMe)?.as_deref() == Some("true"))
  }

  pub fn users(&self) -> Result<Vec<User>> {
    self.state.storage.load_list(StorageKey::Users)
  }

  /// Entry check for the admin console page.
  pub fn console_gate(&self) -> Result<GateDecision> {
    Ok(gate::console_entry(&self.session_state()?))
  }

  /// Entry check for the login page.
  pub fn login_gate(&self) -> Result<GateDecision> {
    Ok(gate::login_entry(&self.session_state()?))
  }

  #[instrument(name = "AuthGate::login", skip(self, password))]
  pub async fn login(&self, email: &str, password: &str, remember: bool) -> Result<Session> {
    let ctx = FlowContext::new(LoginCtxData::new(
      self.state.clone(),
      email.to_string(),
      password.to_string(),
      remember,
    ));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(FlowOutcome::Completed) => ctx
        .read()
        .session
        .clone()
        .ok_or_else(|| StoreError::Internal("login flow finished without a session".to_string())),
      Ok(FlowOutcome::Stopped) => Err(StoreError::Internal("login flow stopped early".to_string())),
      Err(e) => Err(e),
    };
    self.state.settle(result, Some(LOGIN_MESSAGE))
  }

  /// Ends the session. The remember-me flag is left as is.
  #[instrument(name = "AuthGate::logout", skip(self))]
  pub fn logout(&self) -> Result<()> {
    let result = self.state.storage.clear(StorageKey::CurrentUser);
    self.state.settle(result, None)?;
    info!("Session closed.");
    self.state.feed.publish(StoreEvent::SessionChanged);
    Ok(())
  }

  /// Registers a console account. Signing up does not sign in.
  #[instrument(name = "AuthGate::signup", skip(self, form), fields(email = %form.email))]
  pub async fn signup(&self, form: SignupForm) -> Result<User> {
    let ctx = FlowContext::new(SignupCtxData::new(self.state.clone(), form));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(FlowOutcome::Completed) => ctx
        .read()
        .created_user
        .clone()
        .ok_or_else(|| StoreError::Internal("signup flow finished without a user".to_string())),
      Ok(FlowOutcome::Stopped) => Err(StoreError::Internal("signup flow stopped early".to_string())),
      Err(e) => Err(e),
    };
    self.state.settle(result, Some(SIGNUP_MESSAGE))
  }
}
