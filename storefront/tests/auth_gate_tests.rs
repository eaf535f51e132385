// tests/auth_gate_tests.rs
mod common;

use common::*;
use serial_test::serial;
use storefront::models::{Role, SignupForm};
use storefront::notices::NoticeKind;
use storefront::services::auth_service;
use storefront::{GateDecision, Page, StoreConfig, StoreError, StoreEvent};

#[tokio::test]
#[serial]
async fn fixed_credentials_open_an_admin_session() {
  let store = memory_store();
  let mut events = store.subscribe();

  let session = store
    .auth()
    .login("admin@elssyboutique.com", "admin123", false)
    .await
    .unwrap();

  assert_eq!(session.id, "1");
  assert_eq!(session.name, "Store Admin");
  assert_eq!(session.role, Role::Admin);
  assert_eq!(store.auth().current().unwrap(), Some(session));
  assert_eq!(drain(&mut events), vec![StoreEvent::SessionChanged]);
  assert_eq!(store.notices().active()[0].message, "Login successful! Redirecting...");
}

#[tokio::test]
#[serial]
async fn wrong_password_and_unknown_email_fail_the_same_way() {
  let store = memory_store();

  let wrong_password = store.auth().login("admin@elssyboutique.com", "nope", false).await.unwrap_err();
  let unknown_email = store.auth().login("who@example.com", "admin123", false).await.unwrap_err();

  assert!(matches!(wrong_password, StoreError::InvalidCredentials));
  assert!(matches!(unknown_email, StoreError::InvalidCredentials));
  assert_eq!(store.auth().current().unwrap(), None);

  let banner = store.notices().active().pop().unwrap();
  assert_eq!(banner.kind, NoticeKind::Error);
  assert_eq!(banner.message, "Invalid email or password");
}

#[tokio::test]
#[serial]
async fn blank_login_fields_are_rejected() {
  let store = memory_store();
  let err = store.auth().login("", "admin123", false).await.unwrap_err();
  assert_eq!(err.to_string(), "Please fill in all fields");
  let err = store.auth().login("admin@elssyboutique.com", "", false).await.unwrap_err();
  assert_eq!(err.to_string(), "Please fill in all fields");
}

#[tokio::test]
#[serial]
async fn remember_me_survives_logout() {
  let store = memory_store();
  assert!(!store.auth().remember_me().unwrap());

  store.auth().login("admin@elssyboutique.com", "admin123", true).await.unwrap();
  assert!(store.auth().remember_me().unwrap());

  let mut events = store.subscribe();
  store.auth().logout().unwrap();
  assert_eq!(store.auth().current().unwrap(), None);
  assert!(store.auth().remember_me().unwrap());
  assert_eq!(drain(&mut events), vec![StoreEvent::SessionChanged]);
}

#[tokio::test]
#[serial]
async fn gates_redirect_by_session_state() {
  let store = memory_store();
  assert_eq!(store.auth().console_gate().unwrap(), GateDecision::Redirect(Page::Login));
  assert_eq!(store.auth().login_gate().unwrap(), GateDecision::Proceed);

  login_admin(&store).await;
  assert_eq!(store.auth().console_gate().unwrap(), GateDecision::Proceed);
  assert_eq!(store.auth().login_gate().unwrap(), GateDecision::Redirect(Page::AdminConsole));
}

#[tokio::test]
#[serial]
async fn signup_stores_a_hashed_password() {
  let store = memory_store();
  let mut events = store.subscribe();

  let user = store
    .auth()
    .signup(SignupForm::new("Wanjiku", "wanjiku@example.com", "Secret123"))
    .await
    .unwrap();

  assert_eq!(user.role, Role::Admin);
  assert_ne!(user.password_hash, "Secret123");
  assert!(auth_service::verify_password(&user.password_hash, "Secret123").unwrap());
  assert_eq!(store.auth().users().unwrap(), vec![user]);
  assert_eq!(drain(&mut events), vec![StoreEvent::UsersChanged]);
  assert_eq!(
    store.notices().active()[0].message,
    "Account created successfully! You can now login."
  );
  // Signing up does not sign in.
  assert_eq!(store.auth().current().unwrap(), None);
}

#[tokio::test]
#[serial]
async fn signup_rules_apply_in_order() {
  let store = memory_store();
  let base = SignupForm::new("Wanjiku", "wanjiku@example.com", "abc");

  let blank_name = SignupForm {
    name: "  ".to_string(),
    ..base.clone()
  };
  let mismatch = SignupForm {
    confirm_password: "abd".to_string(),
    agree_terms: false,
    ..base.clone()
  };
  let no_terms = SignupForm {
    agree_terms: false,
    ..base.clone()
  };

  let cases = [
    (blank_name, "Please fill in all fields"),
    (mismatch, "Passwords do not match"),
    (no_terms, "Please agree to the terms and conditions"),
    (base, "Password must be at least 6 characters long"),
  ];
  for (form, expected) in cases {
    let err = store.auth().signup(form).await.unwrap_err();
    assert_eq!(err.to_string(), expected);
  }
  assert!(store.auth().users().unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn duplicate_email_is_rejected() {
  let store = memory_store();
  store
    .auth()
    .signup(SignupForm::new("Wanjiku", "wanjiku@example.com", "Secret123"))
    .await
    .unwrap();

  let err = store
    .auth()
    .signup(SignupForm::new("Other", "wanjiku@example.com", "Another123"))
    .await
    .unwrap_err();

  assert!(matches!(err, StoreError::DuplicateEmail(ref email) if email == "wanjiku@example.com"));
  assert_eq!(err.to_string(), "User with this email already exists");
  assert_eq!(store.auth().users().unwrap().len(), 1);
}

#[tokio::test]
#[serial]
async fn registered_users_cannot_log_in_by_default() {
  let store = memory_store();
  store
    .auth()
    .signup(SignupForm::new("Wanjiku", "wanjiku@example.com", "Secret123"))
    .await
    .unwrap();

  let err = store.auth().login("wanjiku@example.com", "Secret123", false).await.unwrap_err();
  assert!(matches!(err, StoreError::InvalidCredentials));
}

#[tokio::test]
#[serial]
async fn registered_login_can_be_enabled() {
  let store = memory_store_with(StoreConfig {
    allow_registered_login: true,
    ..StoreConfig::in_memory()
  });
  let user = store
    .auth()
    .signup(SignupForm::new("Wanjiku", "wanjiku@example.com", "Secret123"))
    .await
    .unwrap();

  let session = store.auth().login("wanjiku@example.com", "Secret123", false).await.unwrap();
  assert_eq!(session.id, user.id);
  assert_eq!(session.name, "Wanjiku");

  let err = store.auth().login("wanjiku@example.com", "wrong-pass", false).await.unwrap_err();
  assert!(matches!(err, StoreError::InvalidCredentials));
}
