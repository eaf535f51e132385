// storefront/src/flows/cart_flow.rs

use crate::errors::StoreError;
use crate::flows::common_steps::{self, missing};
use crate::flows::contexts::AddToCartCtxData;
use crate::models::CartLine;
use crate::storage::StorageKey;
use shopflow::{Flow, FlowContext, FlowRegistry, StepControl};
use tracing::{debug, info};

/// Adds one unit of `id` to `cart`, merging with an existing line.
/// Returns the line as it now stands.
pub(crate) fn merge_line(cart: &mut Vec<CartLine>, id: &str, name: &str, price: u64) -> CartLine {
  if let Some(line) = cart.iter_mut().find(|l| l.id == id) {
    line.quantity = line.quantity.saturating_add(1);
    return line.clone();
  }
  let line = CartLine {
    id: id.to_string(),
    name: name.to_string(),
    price,
    quantity: 1,
  };
  cart.push(line.clone());
  line
}

pub fn register_add_to_cart_flow(registry: &FlowRegistry<StoreError>) {
  let mut flow = Flow::<AddToCartCtxData, StoreError>::new(&[
    ("merge_cart_line", false, None),
    ("persist_cart", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("merge_cart_line", |ctx: FlowContext<AddToCartCtxData>| {
    Box::pin(async move {
      let (id, name, price, storage) = {
        let guard = ctx.read();
        (guard.product_id.clone(), guard.name.clone(), guard.price, guard.state.storage.clone())
      };
      let mut cart: Vec<CartLine> = storage.load_list(StorageKey::Cart)?;
      let line = merge_line(&mut cart, &id, &name, price);
      debug!(product_id = %id, quantity = line.quantity, "Cart line merged.");
      {
        let mut guard = ctx.write();
        guard.cart = cart;
        guard.line = Some(line);
      }
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("persist_cart", |ctx: FlowContext<AddToCartCtxData>| {
    Box::pin(async move {
      let (cart, line, storage) = {
        let guard = ctx.read();
        (guard.cart.clone(), guard.line.clone(), guard.state.storage.clone())
      };
      let line = line.ok_or_else(|| missing("cart line"))?;
      storage.save(StorageKey::Cart, &cart)?;
      info!(product_id = %line.id, lines = cart.len(), "Cart saved.");
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_cart_changed::<AddToCartCtxData>);

  registry.register(flow);
}
