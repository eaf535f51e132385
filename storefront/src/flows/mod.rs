// storefront/src/flows/mod.rs

//! Every store mutation runs as a named-step flow. This module defines them and
//! registers them with the shared `FlowRegistry`.

use crate::errors::StoreError;
use shopflow::FlowRegistry;

pub mod common_steps;
pub mod contexts;

pub mod cart_flow;
pub mod login_flow;
pub mod product_flow;
pub mod signup_flow;

/// Registers all store flows. Called once when a storefront is opened.
pub fn register_all_flows(registry: &FlowRegistry<StoreError>) {
  tracing::debug!("Registering store flows...");

  product_flow::register_add_product_flow(registry);
  product_flow::register_update_product_flow(registry);
  product_flow::register_remove_product_flow(registry);
  cart_flow::register_add_to_cart_flow(registry);
  signup_flow::register_signup_flow(registry);
  login_flow::register_login_flow(registry);

  tracing::debug!("All store flows registered.");
}
