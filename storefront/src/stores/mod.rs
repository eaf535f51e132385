// storefront/src/stores/mod.rs

//! Handles the presentation layer calls into. Each one runs the matching flow,
//! then reports the outcome on the notice board.

pub mod auth_gate;
pub mod cart_store;
pub mod product_store;
pub mod theme_store;

pub use auth_gate::AuthGate;
pub use cart_store::CartStore;
pub use product_store::{ProductStore, RemoveOutcome};
pub use theme_store::ThemeStore;
