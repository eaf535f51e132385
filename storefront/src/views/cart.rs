// storefront/src/views/cart.rs

use crate::models::CartLine;
use crate::views::format::price_label;

/// The item counter in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartBadge {
  pub count: u32,
}

impl CartBadge {
  pub fn render(lines: &[CartLine]) -> Self {
    Self {
      count: CartLine::item_count(lines),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLine {
  pub id: String,
  pub name: String,
  pub quantity: u32,
  pub unit_price_label: String,
  pub line_total_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSidebar {
  pub lines: Vec<SidebarLine>,
  pub item_count: u32,
  pub subtotal: u64,
  pub subtotal_label: String,
}

impl CartSidebar {
  pub fn render(lines: &[CartLine]) -> Self {
    let subtotal = CartLine::subtotal(lines);
    Self {
      lines: lines
        .iter()
        .map(|l| SidebarLine {
          id: l.id.clone(),
          name: l.name.clone(),
          quantity: l.quantity,
          unit_price_label: price_label(l.price),
          line_total_label: price_label(l.line_total()),
        })
        .collect(),
      item_count: CartBadge::render(lines).count,
      subtotal,
      subtotal_label: price_label(subtotal),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}
