// storefront/src/views/catalog.rs

use crate::models::{ImagePayload, Product, ProductStatus};
use crate::views::format::price_label;

pub const EMPTY_TITLE: &str = "No Products Available";
pub const EMPTY_HINT: &str = "Check back soon for new arrivals!";
pub const DESCRIPTION_PLACEHOLDER: &str = "Premium quality product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
  Hot,
  SoldOut,
}

impl Badge {
  pub fn label(self) -> &'static str {
    match self {
      Badge::Hot => "HOT",
      Badge::SoldOut => "SOLD OUT",
    }
  }
}

/// One card on the public storefront grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: u64,
  pub price_label: String,
  pub image: Option<ImagePayload>,
  pub badge: Badge,
  pub button_label: &'static str,
  /// The add-to-cart button is disabled when false.
  pub can_add: bool,
}

impl From<&Product> for ProductCard {
  fn from(product: &Product) -> Self {
    let available = product.status.is_available();
    Self {
      id: product.id.clone(),
      name: product.name.clone(),
      description: product
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DESCRIPTION_PLACEHOLDER)
        .to_string(),
      price: product.price,
      price_label: price_label(product.price),
      image: product.image.clone(),
      badge: match product.status {
        ProductStatus::InStock => Badge::Hot,
        ProductStatus::OutOfStock => Badge::SoldOut,
      },
      button_label: if available { "ADD TO CART" } else { "SOLD OUT" },
      can_add: available,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
  Empty { title: &'static str, hint: &'static str },
  Cards(Vec<ProductCard>),
}

impl CatalogView {
  pub fn render(products: &[Product]) -> Self {
    if products.is_empty() {
      return CatalogView::Empty {
        title: EMPTY_TITLE,
        hint: EMPTY_HINT,
      };
    }
    CatalogView::Cards(products.iter().map(ProductCard::from).collect())
  }

  pub fn cards(&self) -> &[ProductCard] {
    match self {
      CatalogView::Cards(cards) => cards,
      CatalogView::Empty { .. } => &[],
    }
  }
}
