// storefront/src/models/cart_line.rs

use serde::{Deserialize, Serialize};

/// One cart row. `name` and `price` are copied from the product when it is
/// first added and never refreshed; `id` may outlive the product it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
  pub id: String,
  pub name: String,
  pub price: u64,
  pub quantity: u32,
}

impl CartLine {
  pub fn line_total(&self) -> u64 {
    self.price.saturating_mul(u64::from(self.quantity))
  }

  /// Sum of quantities, clamped at `u32::MAX`.
  pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
  }

  pub fn subtotal(lines: &[CartLine]) -> u64 {
    lines.iter().fold(0u64, |acc, l| acc.saturating_add(l.line_total()))
  }
}
