// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Shrinklet Providers
//!
//! Provider registration and request assembly for shrinklet.
//!
//! This crate sits on top of `shrinklet-core` and turns individual
//! [`Shrinker`](shrinklet_core::Shrinker) implementations into a usable
//! catalog:
//!
//! - **Descriptor**: one provider bound to its response schema, with
//!   credential lookup and URL assembly on top
//! - **Registry**: explicit registration and lookup by identifier
//! - **Outbound request**: the executor-facing shape of one shorten call
//!
//! Transport is out of scope. The types here stop at a fully assembled
//! [`OutboundRequest`]; performing the call belongs to the embedding
//! application.
//!
//! ## Usage
//!
//! ```
//! use shrinklet_core::{CoreError, ResponseSchema, ShrinkTarget, Shrinker, StaticKeySource};
//! use shrinklet_providers::{ShrinkerDescriptor, ShrinkerRegistry};
//!
//! struct Shorty;
//!
//! impl Shrinker for Shorty {
//!     fn id(&self) -> &'static str {
//!         "shorty"
//!     }
//!
//!     fn base_url(&self) -> Result<String, CoreError> {
//!         Ok("http://shorty.com/api/2.0/shorten".to_string())
//!     }
//!
//!     fn query_parameter(&self, sanitized_url: &str) -> Result<String, CoreError> {
//!         Ok(format!("?url={}", sanitized_url))
//!     }
//! }
//!
//! let mut registry = ShrinkerRegistry::new();
//! registry.register(ShrinkerDescriptor::new(
//!     Box::new(Shorty),
//!     ResponseSchema::new("shortUrl").with_collection("data"),
//! ))?;
//!
//! let keys = StaticKeySource::new().with_key("SHORTY_URL_KEY", "abc123");
//! let target = ShrinkTarget::new("example.com");
//!
//! let descriptor = registry.lookup("shorty")?;
//! let url = descriptor.api_url(&target, &keys)?;
//! assert_eq!(url, "http://shorty.com/api/2.0/shorten?url=http%3A%2F%2Fexample.com");
//! # Ok::<(), CoreError>(())
//! ```

pub mod descriptor;
pub mod registry;
pub mod request;

// Re-export key types
pub use descriptor::ShrinkerDescriptor;
pub use registry::ShrinkerRegistry;
pub use request::OutboundRequest;
