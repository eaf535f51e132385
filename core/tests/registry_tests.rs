// tests/registry_tests.rs
mod common;

use common::*;
use serial_test::serial;
use shopflow::{Flow, FlowContext, FlowError, FlowOutcome, FlowRegistry, StepControl};

fn receipt_flow() -> Flow<ReceiptCtx, TestError> {
  let mut flow = Flow::<ReceiptCtx, TestError>::new(&[("print", false, None)]);
  flow.on_step("print", |ctx: FlowContext<ReceiptCtx>| {
    Box::pin(async move {
      ctx.write().lines.push("Thank you for shopping".to_string());
      Ok::<_, TestError>(StepControl::Continue)
    })
  });
  flow
}

#[tokio::test]
#[serial]
async fn dispatches_by_context_type() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  let mut basket = Flow::<BasketCtx, TestError>::new(&[("add", false, None)]);
  basket.on_step_boxed("add", add_amount("add", 250));
  registry.register(basket);
  registry.register(receipt_flow());

  let basket_ctx = FlowContext::new(BasketCtx::default());
  let receipt_ctx = FlowContext::new(ReceiptCtx::default());
  assert_eq!(registry.run(basket_ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(registry.run(receipt_ctx.clone()).await.unwrap(), FlowOutcome::Completed);

  assert_eq!(basket_ctx.read().total, 250);
  assert_eq!(receipt_ctx.read().lines, vec!["Thank you for shopping"]);
  assert!(registry.is_registered::<BasketCtx>());
  assert_eq!(registry.steps_of::<ReceiptCtx>(), Some(vec!["print".to_string()]));
}

#[tokio::test]
#[serial]
async fn unregistered_context_type_is_an_error() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  let err = registry.run(FlowContext::new(ReceiptCtx::default())).await.unwrap_err();
  match err {
    TestError::Flow(msg) => assert!(msg.contains("NotRegistered")),
    other => panic!("expected NotRegistered, got {:?}", other),
  }
  assert_eq!(registry.steps_of::<ReceiptCtx>(), None);
}

#[tokio::test]
#[serial]
async fn default_registry_reports_flow_errors() {
  setup_tracing();
  let registry: FlowRegistry = FlowRegistry::default();
  let mut flow = Flow::<ReceiptCtx, FlowError>::new(&[("print", false, None)]);
  flow.on_step("print", |_ctx: FlowContext<ReceiptCtx>| {
    Box::pin(async move { Err(FlowError::Internal("printer jammed".to_string())) })
  });
  registry.register(flow);

  match registry.run(FlowContext::new(ReceiptCtx::default())).await {
    Err(FlowError::Internal(msg)) => assert_eq!(msg, "printer jammed"),
    other => panic!("expected Internal, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn later_registration_replaces_earlier_one() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  let mut first = Flow::<BasketCtx, TestError>::new(&[("add", false, None)]);
  first.on_step_boxed("add", add_amount("add", 1));
  let mut second = Flow::<BasketCtx, TestError>::new(&[("add_more", false, None)]);
  second.on_step_boxed("add_more", add_amount("add_more", 100));
  registry.register(first);
  registry.register(second);

  let ctx = FlowContext::new(BasketCtx::default());
  registry.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().total, 100);
}
