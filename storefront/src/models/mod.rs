// storefront/src/models/mod.rs

//! Records persisted in the key-value store. Field names serialize in camelCase
//! so stored data keeps the storefront's original schema.

pub mod cart_line;
pub mod product;
pub mod session;
pub mod theme;
pub mod user;

pub use cart_line::CartLine;
pub use product::{ImagePayload, ImageSource, Product, ProductDraft, ProductPatch, ProductStatus};
pub use session::{Session, SessionState};
pub use theme::Theme;
pub use user::{Role, SignupForm, User};
