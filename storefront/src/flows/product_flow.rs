// storefront/src/flows/product_flow.rs

use crate::errors::{Result, StoreError};
use crate::flows::common_steps::{self, acting_name, missing};
use crate::flows::contexts::{AddProductCtxData, RemoveProductCtxData, UpdateProductCtxData};
use crate::models::{ImagePayload, ImageSource, Product};
use crate::services::{ids, image_service};
use crate::storage::StorageKey;
use chrono::Utc;
use shopflow::{Flow, FlowContext, FlowRegistry, SkipCondition, StepControl};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const NEGATIVE_PRICE_MESSAGE: &str = "Price cannot be negative";
pub const REMOVE_PROMPT: &str = "Are you sure you want to delete this product? This action cannot be undone.";

/// Checks the required product fields in form order and returns the price.
pub(crate) fn validate_product_fields(name: &str, price: Option<i64>, category: &str) -> Result<u64> {
  if name.trim().is_empty() {
    return Err(StoreError::validation("name", REQUIRED_FIELDS_MESSAGE));
  }
  let Some(price) = price else {
    return Err(StoreError::validation("price", REQUIRED_FIELDS_MESSAGE));
  };
  if category.trim().is_empty() {
    return Err(StoreError::validation("category", REQUIRED_FIELDS_MESSAGE));
  }
  u64::try_from(price).map_err(|_| StoreError::validation("price", NEGATIVE_PRICE_MESSAGE))
}

fn optional_text(raw: &str) -> Option<String> {
  let trimmed = raw.trim();
  (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Encodes the picked image. A failed upload is logged and the product is
/// saved without an image.
async fn upload_or_skip(source: Option<ImageSource>, latency: Duration) -> Option<ImagePayload> {
  let source = source?;
  match image_service::upload(&source, latency).await {
    Ok(payload) => Some(payload),
    Err(e) => {
      warn!(error = %e, "Image upload failed; continuing without an image.");
      None
    }
  }
}

pub fn register_add_product_flow(registry: &FlowRegistry<StoreError>) {
  let no_image: SkipCondition<AddProductCtxData> = Arc::new(|ctx: FlowContext<AddProductCtxData>| {
    let none = ctx.read().draft.image.is_none();
    none
  });

  let mut flow = Flow::<AddProductCtxData, StoreError>::new(&[
    ("validate_product_input", false, None),
    ("attach_image", true, Some(no_image)),
    ("assign_identity", false, None),
    ("persist_product", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("validate_product_input", |ctx: FlowContext<AddProductCtxData>| {
    Box::pin(async move {
      let price = {
        let guard = ctx.read();
        validate_product_fields(&guard.draft.name, guard.draft.price, &guard.draft.category)?
      };
      ctx.write().price = Some(price);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("attach_image", |ctx: FlowContext<AddProductCtxData>| {
    Box::pin(async move {
      let (source, latency) = {
        let guard = ctx.read();
        (guard.draft.image.clone(), guard.state.config.upload_latency)
      };
      let payload = upload_or_skip(source, latency).await;
      ctx.write().image = payload;
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("assign_identity", |ctx: FlowContext<AddProductCtxData>| {
    Box::pin(async move {
      let (draft, price, image, state) = {
        let guard = ctx.read();
        (guard.draft.clone(), guard.price, guard.image.clone(), guard.state.clone())
      };
      let price = price.ok_or_else(|| missing("validated price"))?;
      let product = Product {
        id: ids::next_id(),
        name: draft.name.trim().to_string(),
        price,
        description: optional_text(&draft.description),
        category: draft.category.trim().to_string(),
        status: draft.status,
        image,
        created_at: Utc::now(),
        created_by: acting_name(&state)?,
      };
      debug!(product_id = %product.id, "Product identity assigned.");
      ctx.write().created = Some(product);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("persist_product", |ctx: FlowContext<AddProductCtxData>| {
    Box::pin(async move {
      let (product, storage) = {
        let guard = ctx.read();
        (guard.created.clone(), guard.state.storage.clone())
      };
      let product = product.ok_or_else(|| missing("product"))?;
      let mut products: Vec<Product> = storage.load_list(StorageKey::Products)?;
      if products.iter().any(|p| p.id == product.id) {
        return Err(StoreError::Internal(format!("product id {} already in use", product.id)));
      }
      products.insert(0, product.clone());
      storage.save(StorageKey::Products, &products)?;
      info!(product_id = %product.id, count = products.len(), "Product saved.");
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_products_changed::<AddProductCtxData>);

  registry.register(flow);
}

pub fn register_update_product_flow(registry: &FlowRegistry<StoreError>) {
  let no_image: SkipCondition<UpdateProductCtxData> = Arc::new(|ctx: FlowContext<UpdateProductCtxData>| {
    let none = ctx.read().patch.image.is_none();
    none
  });

  let mut flow = Flow::<UpdateProductCtxData, StoreError>::new(&[
    ("validate_patch", false, None),
    ("locate_product", false, None),
    ("attach_image", true, Some(no_image)),
    ("apply_patch", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("validate_patch", |ctx: FlowContext<UpdateProductCtxData>| {
    Box::pin(async move {
      let price = {
        let guard = ctx.read();
        let patch = &guard.patch;
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
          return Err(StoreError::validation("name", REQUIRED_FIELDS_MESSAGE));
        }
        if patch.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
          return Err(StoreError::validation("category", REQUIRED_FIELDS_MESSAGE));
        }
        match patch.price {
          Some(p) => Some(u64::try_from(p).map_err(|_| StoreError::validation("price", NEGATIVE_PRICE_MESSAGE))?),
          None => None,
        }
      };
      ctx.write().price = price;
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("locate_product", |ctx: FlowContext<UpdateProductCtxData>| {
    Box::pin(async move {
      let (id, storage) = {
        let guard = ctx.read();
        (guard.id.clone(), guard.state.storage.clone())
      };
      let products: Vec<Product> = storage.load_list(StorageKey::Products)?;
      if !products.iter().any(|p| p.id == id) {
        debug!(product_id = %id, "Update target not found; nothing to do.");
        return Ok(StepControl::Stop);
      }
      ctx.write().found = true;
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("attach_image", |ctx: FlowContext<UpdateProductCtxData>| {
    Box::pin(async move {
      let (source, latency) = {
        let guard = ctx.read();
        (guard.patch.image.clone(), guard.state.config.upload_latency)
      };
      let payload = upload_or_skip(source, latency).await;
      ctx.write().image = payload;
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("apply_patch", |ctx: FlowContext<UpdateProductCtxData>| {
    Box::pin(async move {
      let (id, patch, price, image, storage) = {
        let guard = ctx.read();
        (
          guard.id.clone(),
          guard.patch.clone(),
          guard.price,
          guard.image.clone(),
          guard.state.storage.clone(),
        )
      };
      let mut products: Vec<Product> = storage.load_list(StorageKey::Products)?;
      // Removed by someone else since locate_product ran.
      let Some(product) = products.iter_mut().find(|p| p.id == id) else {
        ctx.write().found = false;
        return Ok(StepControl::Stop);
      };
      if let Some(name) = patch.name {
        product.name = name.trim().to_string();
      }
      if let Some(price) = price {
        product.price = price;
      }
      if let Some(description) = patch.description {
        product.description = optional_text(&description);
      }
      if let Some(category) = patch.category {
        product.category = category.trim().to_string();
      }
      if let Some(status) = patch.status {
        product.status = status;
      }
      if image.is_some() {
        product.image = image;
      }
      let updated = product.clone();
      storage.save(StorageKey::Products, &products)?;
      info!(product_id = %updated.id, "Product updated.");
      ctx.write().updated = Some(updated);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_products_changed::<UpdateProductCtxData>);

  registry.register(flow);
}

pub fn register_remove_product_flow(registry: &FlowRegistry<StoreError>) {
  let mut flow = Flow::<RemoveProductCtxData, StoreError>::new(&[
    ("confirm_removal", false, None),
    ("remove_product", false, None),
    ("announce_change", false, None),
  ]);

  flow.on_step("confirm_removal", |ctx: FlowContext<RemoveProductCtxData>| {
    Box::pin(async move {
      let gate = ctx.read().gate.clone();
      if gate.confirm(REMOVE_PROMPT) {
        return Ok(StepControl::Continue);
      }
      debug!("Product removal declined.");
      ctx.write().declined = true;
      Ok::<_, StoreError>(StepControl::Stop)
    })
  });

  flow.on_step("remove_product", |ctx: FlowContext<RemoveProductCtxData>| {
    Box::pin(async move {
      let (id, storage) = {
        let guard = ctx.read();
        (guard.id.clone(), guard.state.storage.clone())
      };
      let mut products: Vec<Product> = storage.load_list(StorageKey::Products)?;
      let Some(pos) = products.iter().position(|p| p.id == id) else {
        debug!(product_id = %id, "Product to remove not found; nothing to do.");
        return Ok(StepControl::Stop);
      };
      let removed = products.remove(pos);
      storage.save(StorageKey::Products, &products)?;
      info!(product_id = %removed.id, remaining = products.len(), "Product removed.");
      ctx.write().removed = Some(removed);
      Ok::<_, StoreError>(StepControl::Continue)
    })
  });

  flow.on_step("announce_change", common_steps::announce_products_changed::<RemoveProductCtxData>);

  registry.register(flow);
}
