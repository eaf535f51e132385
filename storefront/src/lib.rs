// storefront/src/lib.rs

//! Store layer for a small boutique storefront: a product catalog managed from
//! an admin console, a shopper cart, and a login gate, all persisted in a
//! key-value store.
//!
//! Mutations run as `shopflow` flows and publish a `StoreEvent` on success.
//! Views subscribe to those events through `views::live` instead of polling.

pub mod app;
pub mod config;
pub mod errors;
pub mod events;
pub mod flows;
pub mod gate;
pub mod models;
pub mod notices;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
pub mod views;

pub use app::Storefront;
pub use config::StoreConfig;
pub use errors::{Result, StoreError};
pub use events::StoreEvent;
pub use gate::{ConfirmGate, GateDecision, Page};
