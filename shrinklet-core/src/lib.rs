// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Shrinklet Core
//!
//! Core types, contract trait, and shared behavior for the shrinklet
//! workspace.
//!
//! This crate defines the pluggable abstraction for URL-shortening service
//! clients: the contract every concrete provider satisfies, plus the
//! behavior that is uniform across providers:
//!
//! - The [`Shrinker`] contract (required and defaulted operations)
//! - Declarative reply schemas ([`ResponseSchema`])
//! - Candidate URL sanitization ([`sanitize::sanitize_url`])
//! - API-key resolution against an injected [`credentials::KeySource`]
//! - Per-operation request state ([`ShrinkTarget`])
//!
//! ## Key Types
//!
//! ### Contract
//! - [`Shrinker`] - Trait each provider implements
//! - [`HttpMethod`] - GET/POST selection, GET by default
//! - [`ShrinkTarget`] - Sanitized long URL for one shrink operation
//!
//! ### Reply interpretation
//! - [`ResponseSchema`] - Where the short URL, optional collection wrapper,
//!   and error message live in a decoded reply
//!
//! ### Credentials
//! - [`credentials::KeySource`] - Injected credential lookup
//! - [`credentials::EnvKeySource`] - Process-environment implementation
//! - Variables follow the `<PROVIDER_ID_UPPERCASE>_URL_KEY` convention
//!
//! Network execution is not part of this crate: a separate executor
//! consumes the assembled request shape and owns transport concerns.

pub mod credentials;
pub mod error;
pub mod models;
pub mod sanitize;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{DEFAULT_ERROR_KEY, HttpMethod, ResponseSchema, ShrinkTarget};

// Re-export credential helpers
pub use credentials::{
    CREDENTIAL_SUFFIX, EnvKeySource, KeySource, StaticKeySource, credential_env_var, has_api_key,
    resolve_api_key,
};

// Re-export sanitization
pub use sanitize::sanitize_url;

// Re-export traits
pub use traits::{DEFAULT_CONTENT_TYPE, Shrinker};
