// shopflow/src/flow/mod.rs

//! `Flow<TData, Err>`: construction and editing, handler registration, execution.

pub mod definition;
pub mod execution;
pub mod hooks;

pub use definition::Flow;
