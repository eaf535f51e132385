// shopflow/src/core/handler.rs

use crate::core::context::FlowContext;
use crate::core::control::StepControl;
use std::future::Future;
use std::pin::Pin;

/// A boxed step handler.
///
/// It receives a clone of the flow's `FlowContext` and resolves to either a
/// `StepControl` or the flow's error type. Handlers must release any guard on
/// the context before awaiting.
pub type Handler<TData, Err> = Box<
  dyn Fn(FlowContext<TData>) -> Pin<Box<dyn Future<Output = Result<StepControl, Err>> + Send>>
    + Send
    + Sync,
>;
