// shopflow/src/lib.rs

//! shopflow: small async workflows made of named steps.
//!
//! Every storefront operation (adding a product, signing up, putting an item in
//! the cart) is a `Flow` over a context struct. A flow:
//!  - runs its steps in declaration order,
//!  - runs `before`, `on` and `after` handlers for each step,
//!  - stops early when a handler returns `StepControl::Stop`,
//!  - fails fast on the first handler error,
//!  - can be edited after construction (insert, remove, toggle optional, skip conditions).
//!
//! Flows are registered in a `FlowRegistry` keyed by their context type and run
//! through it, so callers only need the context value to dispatch.

pub mod core;
pub mod error;
pub mod flow;
pub mod registry;

pub use crate::core::context::FlowContext;
pub use crate::core::control::{FlowOutcome, StepControl};
pub use crate::core::handler::Handler;
pub use crate::core::step::{SkipCondition, StepDef};
pub use crate::error::{FlowError, FlowResult};
pub use crate::flow::Flow;
pub use crate::registry::FlowRegistry;
