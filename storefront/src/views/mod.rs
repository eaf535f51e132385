// storefront/src/views/mod.rs

//! Render models: plain data a page binds to. Nothing here touches storage
//! except the `live` module, which re-renders views when stores change.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod format;
pub mod live;
pub mod pages;

pub use admin::{AdminProductRow, AdminProductsView, DashboardStats, StorePreview};
pub use cart::{CartBadge, CartSidebar};
pub use catalog::{Badge, CatalogView, ProductCard};
pub use format::price_label;
pub use live::{spawn_live_view, LiveView, View};
pub use pages::{AdminConsoleFrame, AdminConsolePage, CartPanel, CartPanelFrame, CatalogPage};
