// storefront/src/models/product.rs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
  #[default]
  InStock,
  OutOfStock,
}

impl ProductStatus {
  pub fn label(self) -> &'static str {
    match self {
      ProductStatus::InStock => "In Stock",
      ProductStatus::OutOfStock => "Out of Stock",
    }
  }

  pub fn is_available(self) -> bool {
    self == ProductStatus::InStock
  }
}

/// An image embedded as a `data:<mime>;base64,<payload>` URL. Treated as opaque
/// once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImagePayload(String);

impl ImagePayload {
  pub fn encode(mime: &str, bytes: &[u8]) -> Self {
    ImagePayload(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
  }

  /// Wraps an already encoded URL as-is.
  pub fn from_raw(raw: impl Into<String>) -> Self {
    ImagePayload(raw.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Media type of a `data:` URL, if it is one.
  pub fn mime_type(&self) -> Option<&str> {
    let rest = self.0.strip_prefix("data:")?;
    let end = rest.find(|c| c == ';' || c == ',')?;
    Some(&rest[..end])
  }
}

/// Where a new product image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
  File(PathBuf),
  Bytes { mime: String, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: u64,
  #[serde(default)]
  pub description: Option<String>,
  pub category: String,
  #[serde(default)]
  pub status: ProductStatus,
  #[serde(default)]
  pub image: Option<ImagePayload>,
  pub created_at: DateTime<Utc>,
  pub created_by: String,
}

/// The add/edit product form as submitted.
///
/// `price` is `None` when the field was left empty or was not a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
  pub name: String,
  pub price: Option<i64>,
  pub description: String,
  pub category: String,
  pub status: ProductStatus,
  pub image: Option<ImageSource>,
}

impl ProductDraft {
  pub fn new(name: impl Into<String>, price: i64, category: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      price: Some(price),
      category: category.into(),
      ..Default::default()
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn with_status(mut self, status: ProductStatus) -> Self {
    self.status = status;
    self
  }

  pub fn with_image(mut self, image: ImageSource) -> Self {
    self.image = Some(image);
    self
  }

  /// Parses the price field the way the form does: leading/trailing blanks
  /// ignored, anything non-numeric counts as empty.
  pub fn parse_price(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
  }
}

/// Loads a product's editable fields into the form. The image is not carried
/// over.
impl From<&Product> for ProductDraft {
  fn from(product: &Product) -> Self {
    Self {
      name: product.name.clone(),
      price: i64::try_from(product.price).ok(),
      description: product.description.clone().unwrap_or_default(),
      category: product.category.clone(),
      status: product.status,
      image: None,
    }
  }
}

/// Fields to change in place; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
  pub name: Option<String>,
  pub price: Option<i64>,
  pub description: Option<String>,
  pub category: Option<String>,
  pub status: Option<ProductStatus>,
  pub image: Option<ImageSource>,
}

impl ProductPatch {
  pub fn is_empty(&self) -> bool {
    *self == ProductPatch::default()
  }
}
