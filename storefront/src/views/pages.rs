// storefront/src/views/pages.rs

//! Page-level views wired to the stores they read from.

use crate::errors::Result;
use crate::events::StoreEvent;
use crate::stores::{CartStore, ProductStore};
use crate::views::admin::{AdminProductsView, DashboardStats, StorePreview};
use crate::views::cart::{CartBadge, CartSidebar};
use crate::views::catalog::CatalogView;
use crate::views::live::View;

/// The public product grid.
pub struct CatalogPage {
  pub products: ProductStore,
}

impl View for CatalogPage {
  type Output = CatalogView;

  fn watches(&self, event: StoreEvent) -> bool {
    event == StoreEvent::ProductsChanged
  }

  fn render(&self) -> Result<CatalogView> {
    Ok(CatalogView::render(&self.products.list()?))
  }
}

/// Header badge plus sidebar contents.
pub struct CartPanel {
  pub cart: CartStore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanelFrame {
  pub badge: CartBadge,
  pub sidebar: CartSidebar,
}

impl View for CartPanel {
  type Output = CartPanelFrame;

  fn watches(&self, event: StoreEvent) -> bool {
    event == StoreEvent::CartChanged
  }

  fn render(&self) -> Result<CartPanelFrame> {
    let lines = self.cart.list()?;
    Ok(CartPanelFrame {
      badge: CartBadge::render(&lines),
      sidebar: CartSidebar::render(&lines),
    })
  }
}

/// Product list, preview and counters on the admin console.
pub struct AdminConsolePage {
  pub products: ProductStore,
  pub preview_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConsoleFrame {
  pub products: AdminProductsView,
  pub preview: StorePreview,
  pub stats: DashboardStats,
}

impl View for AdminConsolePage {
  type Output = AdminConsoleFrame;

  fn watches(&self, event: StoreEvent) -> bool {
    event == StoreEvent::ProductsChanged
  }

  fn render(&self) -> Result<AdminConsoleFrame> {
    let products = self.products.list()?;
    Ok(AdminConsoleFrame {
      products: AdminProductsView::render(&products),
      preview: StorePreview::render(&products, self.preview_limit),
      stats: DashboardStats::from_product_count(products.len()),
    })
  }
}
