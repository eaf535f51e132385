// storefront/src/flows/contexts.rs

//! Context data for every store flow. Each struct carries the shared
//! `StoreState`, the caller's input, and slots the steps fill in.

use crate::gate::ConfirmGate;
use crate::models::{CartLine, ImagePayload, Product, ProductDraft, ProductPatch, Session, SignupForm, User};
use crate::state::StoreState;
use std::sync::Arc;

/// Gives shared steps access to the state inside any context.
pub trait HasState {
  fn state(&self) -> &StoreState;
}

macro_rules! impl_has_state {
  ($($ctx:ty),* $(,)?) => {
    $(impl HasState for $ctx {
      fn state(&self) -> &StoreState {
        &self.state
      }
    })*
  };
}

impl_has_state!(
  AddProductCtxData,
  UpdateProductCtxData,
  RemoveProductCtxData,
  AddToCartCtxData,
  SignupCtxData,
  LoginCtxData,
);

// --- Product console ---

#[derive(Clone)]
pub struct AddProductCtxData {
  pub state: StoreState,
  pub draft: ProductDraft,
  pub price: Option<u64>,
  pub image: Option<ImagePayload>,
  pub created: Option<Product>,
}

impl AddProductCtxData {
  pub fn new(state: StoreState, draft: ProductDraft) -> Self {
    Self {
      state,
      draft,
      price: None,
      image: None,
      created: None,
    }
  }
}

#[derive(Clone)]
pub struct UpdateProductCtxData {
  pub state: StoreState,
  pub id: String,
  pub patch: ProductPatch,
  pub price: Option<u64>,
  pub found: bool,
  pub image: Option<ImagePayload>,
  pub updated: Option<Product>,
}

impl UpdateProductCtxData {
  pub fn new(state: StoreState, id: String, patch: ProductPatch) -> Self {
    Self {
      state,
      id,
      patch,
      price: None,
      found: false,
      image: None,
      updated: None,
    }
  }
}

#[derive(Clone)]
pub struct RemoveProductCtxData {
  pub state: StoreState,
  pub id: String,
  pub gate: Arc<dyn ConfirmGate>,
  pub declined: bool,
  pub removed: Option<Product>,
}

impl RemoveProductCtxData {
  pub fn new(state: StoreState, id: String, gate: Arc<dyn ConfirmGate>) -> Self {
    Self {
      state,
      id,
      gate,
      declined: false,
      removed: None,
    }
  }
}

// --- Cart ---

#[derive(Clone)]
pub struct AddToCartCtxData {
  pub state: StoreState,
  pub product_id: String,
  pub name: String,
  pub price: u64,
  pub cart: Vec<CartLine>,
  pub line: Option<CartLine>,
}

impl AddToCartCtxData {
  pub fn new(state: StoreState, product_id: String, name: String, price: u64) -> Self {
    Self {
      state,
      product_id,
      name,
      price,
      cart: Vec::new(),
      line: None,
    }
  }
}

// --- Auth ---

#[derive(Clone)]
pub struct SignupCtxData {
  pub state: StoreState,
  pub form: SignupForm,
  pub password_hash: Option<String>,
  pub created_user: Option<User>,
}

impl SignupCtxData {
  pub fn new(state: StoreState, form: SignupForm) -> Self {
    Self {
      state,
      form,
      password_hash: None,
      created_user: None,
    }
  }
}

#[derive(Clone)]
pub struct LoginCtxData {
  pub state: StoreState,
  pub email: String,
  pub password: String,
  pub remember: bool,
  pub session: Option<Session>,
}

impl LoginCtxData {
  pub fn new(state: StoreState, email: String, password: String, remember: bool) -> Self {
    Self {
      state,
      email,
      password,
      remember,
      session: None,
    }
  }
}
