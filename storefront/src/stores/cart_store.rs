// storefront/src/stores/cart_store.rs

use crate::errors::{Result, StoreError};
use crate::events::StoreEvent;
use crate::flows::contexts::AddToCartCtxData;
use crate::models::CartLine;
use crate::state::StoreState;
use crate::storage::StorageKey;
use shopflow::{FlowContext, FlowOutcome};
use tracing::{info, instrument};

/// The shopper's cart. Lines keep the name and price they were added with.
#[derive(Clone)]
pub struct CartStore {
  state: StoreState,
}

impl CartStore {
  pub fn new(state: StoreState) -> Self {
    Self { state }
  }

  pub fn list(&self) -> Result<Vec<CartLine>> {
    self.state.storage.load_list(StorageKey::Cart)
  }

  /// Sum of quantities over all lines.
  pub fn total_item_count(&self) -> Result<u32> {
    Ok(CartLine::item_count(&self.list()?))
  }

  pub fn subtotal(&self) -> Result<u64> {
    Ok(CartLine::subtotal(&self.list()?))
  }

  /// Adds one unit and shows a "{name} added to cart!" toast.
  #[instrument(name = "CartStore::add_item", skip(self, name, price))]
  pub async fn add_item(&self, product_id: &str, name: &str, price: u64) -> Result<CartLine> {
    let ctx = FlowContext::new(AddToCartCtxData::new(
      self.state.clone(),
      product_id.to_string(),
      name.to_string(),
      price,
    ));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(FlowOutcome::Completed) => ctx
        .read()
        .line
        .clone()
        .ok_or_else(|| StoreError::Internal("cart flow finished without a line".to_string())),
      Ok(FlowOutcome::Stopped) => Err(StoreError::Internal("add to cart flow stopped early".to_string())),
      Err(e) => Err(e),
    };
    let line = self.state.settle(result, None)?;
    self
      .state
      .notices
      .toast(format!("{} added to cart!", line.name), self.state.config.cart_notice_ttl);
    Ok(line)
  }

  /// Drops the whole line for `product_id`. Returns whether one existed.
  #[instrument(name = "CartStore::remove_item", skip(self))]
  pub fn remove_item(&self, product_id: &str) -> Result<bool> {
    let result = (|| -> Result<bool> {
      let mut cart = self.list()?;
      let before = cart.len();
      cart.retain(|l| l.id != product_id);
      if cart.len() == before {
        return Ok(false);
      }
      self.state.storage.save(StorageKey::Cart, &cart)?;
      Ok(true)
    })();
    let removed = self.state.settle(result, None)?;
    if removed {
      info!(product_id, "Cart line removed.");
      self.state.feed.publish(StoreEvent::CartChanged);
    }
    Ok(removed)
  }

  #[instrument(name = "CartStore::clear", skip(self))]
  pub fn clear(&self) -> Result<()> {
    let result = self.state.storage.clear(StorageKey::Cart);
    self.state.settle(result, None)?;
    self.state.feed.publish(StoreEvent::CartChanged);
    Ok(())
  }
}
