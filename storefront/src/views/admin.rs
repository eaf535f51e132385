// storefront/src/views/admin.rs

//! Admin console render models: the product list, the storefront preview and
//! the dashboard counters.

use crate::models::{ImagePayload, Product};
use crate::views::format::price_label;

pub const NO_PRODUCTS_TITLE: &str = "No Products Yet";
pub const NO_PRODUCTS_HINT: &str = "Add your first product to get started";
pub const EMPTY_PREVIEW_TITLE: &str = "No Products in Store";
pub const EMPTY_PREVIEW_HINT: &str = "Add products to see how they appear to customers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProductRow {
  pub id: String,
  pub name: String,
  pub price_label: String,
  pub category: String,
  pub status_label: &'static str,
  pub image: Option<ImagePayload>,
}

impl From<&Product> for AdminProductRow {
  fn from(product: &Product) -> Self {
    Self {
      id: product.id.clone(),
      name: product.name.clone(),
      price_label: price_label(product.price),
      category: product.category.clone(),
      status_label: product.status.label(),
      image: product.image.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminProductsView {
  Empty { title: &'static str, hint: &'static str },
  Rows(Vec<AdminProductRow>),
}

impl AdminProductsView {
  pub fn render(products: &[Product]) -> Self {
    if products.is_empty() {
      return AdminProductsView::Empty {
        title: NO_PRODUCTS_TITLE,
        hint: NO_PRODUCTS_HINT,
      };
    }
    AdminProductsView::Rows(products.iter().map(AdminProductRow::from).collect())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTile {
  pub name: String,
  pub price_label: String,
  pub image: Option<ImagePayload>,
}

/// The first few products as shoppers will see them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorePreview {
  Empty { title: &'static str, hint: &'static str },
  Tiles {
    tiles: Vec<PreviewTile>,
    /// Products beyond the preview limit.
    more: usize,
  },
}

impl StorePreview {
  pub fn render(products: &[Product], limit: usize) -> Self {
    if products.is_empty() {
      return StorePreview::Empty {
        title: EMPTY_PREVIEW_TITLE,
        hint: EMPTY_PREVIEW_HINT,
      };
    }
    let tiles = products
      .iter()
      .take(limit)
      .map(|p| PreviewTile {
        name: p.name.clone(),
        price_label: price_label(p.price),
        image: p.image.clone(),
      })
      .collect();
    StorePreview::Tiles {
      tiles,
      more: products.len().saturating_sub(limit),
    }
  }

  /// "+ N more products in store", when there are any.
  pub fn more_label(&self) -> Option<String> {
    match self {
      StorePreview::Tiles { more, .. } if *more > 0 => Some(format!("+ {} more products in store", more)),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
  pub total_products: usize,
  /// Placeholder figure until real orders exist: products x 2.5, rounded down.
  pub total_orders: usize,
}

impl DashboardStats {
  pub fn from_product_count(total_products: usize) -> Self {
    Self {
      total_products,
      total_orders: total_products * 5 / 2,
    }
  }
}
