// storefront/src/gate.rs

//! Decisions the presentation layer acts on: page redirects and yes/no
//! confirmation before destructive actions.

use crate::models::SessionState;

/// Asked before a destructive action; `false` cancels it.
pub trait ConfirmGate: Send + Sync {
  fn confirm(&self, prompt: &str) -> bool;
}

impl<F> ConfirmGate for F
where
  F: Fn(&str) -> bool + Send + Sync,
{
  fn confirm(&self, prompt: &str) -> bool {
    self(prompt)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
  Storefront,
  Login,
  AdminConsole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
  Proceed,
  Redirect(Page),
}

/// The admin console needs a session.
pub fn console_entry(state: &SessionState) -> GateDecision {
  if state.is_logged_in() {
    GateDecision::Proceed
  } else {
    GateDecision::Redirect(Page::Login)
  }
}

/// Someone already signed in skips the login page.
pub fn login_entry(state: &SessionState) -> GateDecision {
  if state.is_logged_in() {
    GateDecision::Redirect(Page::AdminConsole)
  } else {
    GateDecision::Proceed
  }
}
