// storefront/src/services/mod.rs

//! Stateless helpers used by the flows.

pub mod auth_service;
pub mod ids;
pub mod image_service;
