//! Domain models for shrinklet.
//!
//! This module contains the data structures shared by the provider contract
//! and its collaborators.
//!
//! ## Submodules
//!
//! - [`method`] - HTTP method selection (`HttpMethod`)
//! - [`schema`] - Declarative reply schema (`ResponseSchema`)
//! - [`target`] - Per-operation request target (`ShrinkTarget`)

mod method;
mod schema;
mod target;

// Re-export everything at the models level
pub use method::HttpMethod;
pub use schema::{DEFAULT_ERROR_KEY, ResponseSchema};
pub use target::ShrinkTarget;
