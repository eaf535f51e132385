// storefront/src/stores/product_store.rs

use crate::errors::{Result, StoreError};
use crate::flows::contexts::{AddProductCtxData, RemoveProductCtxData, UpdateProductCtxData};
use crate::gate::ConfirmGate;
use crate::models::{Product, ProductDraft, ProductPatch};
use crate::state::StoreState;
use crate::storage::StorageKey;
use crate::views::admin::DashboardStats;
use shopflow::{FlowContext, FlowOutcome};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub const ADDED_MESSAGE: &str = "Product added successfully!";
pub const UPDATED_MESSAGE: &str = "Product updated successfully!";
pub const DELETED_MESSAGE: &str = "Product deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
  Removed(Product),
  /// The confirmation was refused; nothing changed.
  Declined,
  /// No product had that id; nothing changed.
  NotFound,
}

/// The product catalog, newest first.
#[derive(Clone)]
pub struct ProductStore {
  state: StoreState,
}

impl ProductStore {
  pub fn new(state: StoreState) -> Self {
    Self { state }
  }

  pub fn list(&self) -> Result<Vec<Product>> {
    self.state.storage.load_list(StorageKey::Products)
  }

  pub fn get(&self, id: &str) -> Result<Option<Product>> {
    Ok(self.list()?.into_iter().find(|p| p.id == id))
  }

  pub fn stats(&self) -> Result<DashboardStats> {
    Ok(DashboardStats::from_product_count(self.list()?.len()))
  }

  #[instrument(name = "ProductStore::add", skip(self, draft), fields(name = %draft.name))]
  pub async fn add(&self, draft: ProductDraft) -> Result<Product> {
    let ctx = FlowContext::new(AddProductCtxData::new(self.state.clone(), draft));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(FlowOutcome::Completed) => ctx.read().created.clone().ok_or_else(|| {
        warn!("Add product flow completed without a product.");
        StoreError::Internal("product flow finished without creating a product".to_string())
      }),
      Ok(FlowOutcome::Stopped) => Err(StoreError::Internal("add product flow stopped early".to_string())),
      Err(e) => Err(e),
    };
    self.state.settle(result, Some(ADDED_MESSAGE))
  }

  /// Loads a product into a fresh draft for editing. Submitting the draft
  /// through `add` stores it as a new product; the original stays.
  pub fn edit_draft(&self, id: &str) -> Result<Option<ProductDraft>> {
    let result = self.get(id);
    let result = self.state.settle(result, None)?;
    Ok(result.map(|product| {
      self.state.notices.success(
        format!(
          "Editing: {} - Update the fields and click \"Add Product\" to save changes",
          product.name
        ),
        self.state.config.banner_notice_ttl,
      );
      ProductDraft::from(&product)
    }))
  }

  /// Changes a product in place, keeping its id and creation record.
  /// An unknown id yields `None` and changes nothing.
  #[instrument(name = "ProductStore::update", skip(self, patch))]
  pub async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
    let ctx = FlowContext::new(UpdateProductCtxData::new(self.state.clone(), id.to_string(), patch));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(FlowOutcome::Completed) => Ok(ctx.read().updated.clone()),
      Ok(FlowOutcome::Stopped) => Ok(None),
      Err(e) => Err(e),
    };
    let updated = self.state.settle(result, None)?;
    if updated.is_some() {
      self.state.notices.success(UPDATED_MESSAGE, self.state.config.banner_notice_ttl);
    }
    Ok(updated)
  }

  /// Removes a product after `gate` confirms. Declining or an unknown id
  /// leaves the catalog untouched and posts nothing.
  #[instrument(name = "ProductStore::remove", skip(self, gate))]
  pub async fn remove(&self, id: &str, gate: impl ConfirmGate + 'static) -> Result<RemoveOutcome> {
    let ctx = FlowContext::new(RemoveProductCtxData::new(self.state.clone(), id.to_string(), Arc::new(gate)));
    let result = match self.state.flows.run(ctx.clone()).await {
      Ok(outcome) => {
        let guard = ctx.read();
        Ok(match (&guard.removed, guard.declined) {
          (Some(product), _) => RemoveOutcome::Removed(product.clone()),
          (None, true) => RemoveOutcome::Declined,
          (None, false) => {
            if outcome == FlowOutcome::Completed {
              warn!("Remove flow completed without a removed product.");
            }
            RemoveOutcome::NotFound
          }
        })
      }
      Err(e) => Err(e),
    };
    let outcome = self.state.settle(result, None)?;
    if let RemoveOutcome::Removed(product) = &outcome {
      info!(product_id = %product.id, "Product deleted.");
      self.state.notices.success(DELETED_MESSAGE, self.state.config.banner_notice_ttl);
    }
    Ok(outcome)
  }
}
