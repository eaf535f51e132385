// shopflow/src/flow/hooks.rs

//! Handler registration. User handlers may return any error that converts into
//! the flow's `Err`; the conversion happens inside the boxed wrapper.

use crate::core::context::FlowContext;
use crate::core::control::StepControl;
use crate::core::handler::Handler;
use crate::error::FlowError;
use crate::flow::definition::Flow;
use std::future::Future;

#[derive(Clone, Copy)]
enum Phase {
  Before,
  On,
  After,
}

fn wrap<TData, Err, F, UserErr>(
  handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
) -> Handler<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: Send + Sync + 'static,
  F: Future<Output = Result<StepControl, UserErr>> + Send + 'static,
  UserErr: Into<Err> + Send + Sync + 'static,
{
  Box::new(move |ctx| {
    let user_fut = handler_fn(ctx);
    Box::pin(async move { user_fut.await.map_err(Into::into) })
  })
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn push_handler(&mut self, phase: Phase, step_name: &str, handler: Handler<TData, Err>) {
    self.step_index(step_name);
    let table = match phase {
      Phase::Before => &mut self.before,
      Phase::On => &mut self.on,
      Phase::After => &mut self.after,
    };
    table.entry(step_name.to_string()).or_default().push(handler);
  }

  /// Runs before the step's `on` handlers.
  pub fn before_step<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::Before, step_name, wrap(handler_fn));
  }

  /// The step's main work.
  pub fn on_step<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::On, step_name, wrap(handler_fn));
  }

  pub fn after_step<F, UserErr>(
    &mut self,
    step_name: &str,
    handler_fn: impl Fn(FlowContext<TData>) -> F + Send + Sync + 'static,
  ) where
    F: Future<Output = Result<StepControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.push_handler(Phase::After, step_name, wrap(handler_fn));
  }

  /// Registers an already boxed handler, e.g. one built by a shared helper.
  pub fn on_step_boxed(&mut self, step_name: &str, handler: Handler<TData, Err>) {
    self.push_handler(Phase::On, step_name, handler);
  }
}
