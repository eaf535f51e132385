// storefront/src/flows/common_steps.rs

//! Steps shared by several flows.

use crate::errors::{Result, StoreError};
use crate::events::StoreEvent;
use crate::flows::contexts::HasState;
use crate::state::StoreState;
use shopflow::{FlowContext, StepControl};
use tracing::{debug, instrument};

fn publish<T: HasState + Send + Sync + 'static>(ctx: &FlowContext<T>, event: StoreEvent) -> StepControl {
  let feed = ctx.read().state().feed.clone();
  let delivered = feed.publish(event);
  debug!(?event, delivered, "Change announced.");
  StepControl::Continue
}

#[instrument(name = "common_step::announce_products_changed", skip_all)]
pub async fn announce_products_changed<T: HasState + Send + Sync + 'static>(ctx: FlowContext<T>) -> Result<StepControl> {
  Ok(publish(&ctx, StoreEvent::ProductsChanged))
}

#[instrument(name = "common_step::announce_cart_changed", skip_all)]
pub async fn announce_cart_changed<T: HasState + Send + Sync + 'static>(ctx: FlowContext<T>) -> Result<StepControl> {
  Ok(publish(&ctx, StoreEvent::CartChanged))
}

#[instrument(name = "common_step::announce_users_changed", skip_all)]
pub async fn announce_users_changed<T: HasState + Send + Sync + 'static>(ctx: FlowContext<T>) -> Result<StepControl> {
  Ok(publish(&ctx, StoreEvent::UsersChanged))
}

#[instrument(name = "common_step::announce_session_changed", skip_all)]
pub async fn announce_session_changed<T: HasState + Send + Sync + 'static>(ctx: FlowContext<T>) -> Result<StepControl> {
  Ok(publish(&ctx, StoreEvent::SessionChanged))
}

/// Name recorded as a product's creator: the signed-in user, or "Admin".
pub fn acting_name(state: &StoreState) -> Result<String> {
  Ok(
    state
      .current_session()?
      .map(|s| s.name)
      .unwrap_or_else(|| "Admin".to_string()),
  )
}

/// Missing slot that an earlier step should have filled.
pub fn missing(what: &str) -> StoreError {
  StoreError::Internal(format!("{} was not set by an earlier step", what))
}
