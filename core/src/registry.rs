// shopflow/src/registry.rs

//! `FlowRegistry<E>`: one flow per context type, dispatched by `TypeId`.

use crate::core::context::FlowContext;
use crate::core::control::FlowOutcome;
use crate::error::FlowError;
use crate::flow::Flow;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{event, instrument, Level};

#[async_trait]
trait ErasedFlow<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  /// `ctx` must hold a `FlowContext<TData>` for the wrapped flow's `TData`.
  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr>;

  fn step_names(&self) -> Vec<String>;
}

struct FlowRunner<TData, HandlerErr, AppErr>
where
  TData: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FlowError> + Send + Sync + 'static,
{
  flow: Arc<Flow<TData, HandlerErr>>,
  _phantom: PhantomData<fn() -> AppErr>,
}

#[async_trait]
impl<TData, HandlerErr, AppErr> ErasedFlow<AppErr> for FlowRunner<TData, HandlerErr, AppErr>
where
  TData: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FlowError> + Send + Sync + 'static,
{
  async fn run_erased(&self, ctx: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr> {
    let typed_ctx = match ctx.downcast::<FlowContext<TData>>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        let expected_type = std::any::type_name::<FlowContext<TData>>().to_string();
        event!(Level::ERROR, %expected_type, "Context handed to the registry has the wrong type.");
        return Err(AppErr::from(FlowError::TypeMismatch { expected_type }));
      }
    };
    self.flow.run(typed_ctx).await.map_err(AppErr::from)
  }

  fn step_names(&self) -> Vec<String> {
    self.flow.step_names().into_iter().map(str::to_string).collect()
  }
}

/// Holds the flows an application runs, keyed by context data type.
///
/// `AppErr` is what `run` returns; it must absorb `FlowError` (unregistered
/// context types) and every registered flow's handler error.
pub struct FlowRegistry<AppErr = FlowError>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  flows: RwLock<HashMap<TypeId, Arc<dyn ErasedFlow<AppErr>>>>,
}

impl<AppErr> FlowRegistry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      flows: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `flow` for its context type, replacing any earlier registration.
  pub fn register<TData, HandlerErr>(&self, flow: Flow<TData, HandlerErr>)
  where
    TData: 'static + Send + Sync,
    HandlerErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
    AppErr: From<HandlerErr>,
  {
    event!(Level::DEBUG, context_type = %std::any::type_name::<TData>(), "Registering flow.");
    let runner = FlowRunner::<TData, HandlerErr, AppErr> {
      flow: Arc::new(flow),
      _phantom: PhantomData,
    };
    self.flows.write().insert(TypeId::of::<TData>(), Arc::new(runner));
  }

  pub fn is_registered<TData: 'static + Send + Sync>(&self) -> bool {
    self.flows.read().contains_key(&TypeId::of::<TData>())
  }

  /// Step names of the flow registered for `TData`, in run order.
  pub fn steps_of<TData: 'static + Send + Sync>(&self) -> Option<Vec<String>> {
    self.flows.read().get(&TypeId::of::<TData>()).map(|f| f.step_names())
  }

  #[instrument(name = "FlowRegistry::run", skip_all, fields(context_type = %std::any::type_name::<TData>()))]
  pub async fn run<TData>(&self, ctx: FlowContext<TData>) -> Result<FlowOutcome, AppErr>
  where
    TData: 'static + Send + Sync,
  {
    let runner = self.flows.read().get(&TypeId::of::<TData>()).cloned();
    let runner = runner.ok_or_else(|| {
      let context_type = std::any::type_name::<TData>().to_string();
      event!(Level::ERROR, %context_type, "No flow registered.");
      AppErr::from(FlowError::NotRegistered { context_type })
    })?;
    runner.run_erased(Box::new(ctx)).await
  }
}

impl<AppErr> Default for FlowRegistry<AppErr>
where
  AppErr: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
