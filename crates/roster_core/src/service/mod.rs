//! Use-case facade over the model layer.
//!
//! # Responsibility
//! - Expose the operations the command and presentation layers call.
//! - Keep callers decoupled from store, view and session internals.

pub mod model_manager;
