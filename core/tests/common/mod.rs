// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use shopflow::{FlowContext, FlowError, Handler, StepControl};
use tracing::Level;

/// Stand-in for a storefront operation context: a basket being priced.
#[derive(Clone, Debug, Default)]
pub struct BasketCtx {
  pub total: u64,
  pub steps_executed: Vec<String>,
  pub stop_at: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ReceiptCtx {
  pub lines: Vec<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("flow engine error: {0}")]
  Flow(String),

  #[error("handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(err: FlowError) -> Self {
    TestError::Flow(format!("{:?}", err))
  }
}

/// Adds `amount` to the basket and records the step; stops if `stop_at` names it.
pub fn add_amount(step_name: &'static str, amount: u64) -> Handler<BasketCtx, TestError> {
  Box::new(move |ctx: FlowContext<BasketCtx>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.total += amount;
      guard.steps_executed.push(step_name.to_string());
      if guard.stop_at.as_deref() == Some(step_name) {
        return Ok(StepControl::Stop);
      }
      Ok(StepControl::Continue)
    })
  })
}

pub fn fail_with(step_name: &'static str, message: &'static str) -> Handler<BasketCtx, TestError> {
  Box::new(move |ctx: FlowContext<BasketCtx>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      Err(TestError::Handler(message.to_string()))
    })
  })
}

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
