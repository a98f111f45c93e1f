//! Provider descriptor system.
//!
//! A descriptor is the registration unit for one provider: the [`Shrinker`]
//! implementation bound to the [`ResponseSchema`] describing its replies.
//! On top of that pair it exposes the behavior that is uniform across
//! providers (credential lookup, URL assembly, reply interpretation) so
//! concrete providers only carry their own overrides.

use serde_json::{Map, Value};
use tracing::debug;

use shrinklet_core::credentials::{self, KeySource};
use shrinklet_core::{CoreError, ResponseSchema, ShrinkTarget, Shrinker};

use crate::request::OutboundRequest;

// ============================================================================
// Shrinker Descriptor
// ============================================================================

/// Registration unit binding one provider implementation to its schema.
pub struct ShrinkerDescriptor {
    /// The provider implementation.
    pub shrinker: Box<dyn Shrinker>,
    /// How to read the provider's replies.
    pub schema: ResponseSchema,
}

impl ShrinkerDescriptor {
    /// Creates a descriptor from an implementation and its schema.
    pub fn new(shrinker: Box<dyn Shrinker>, schema: ResponseSchema) -> Self {
        Self { shrinker, schema }
    }

    /// Returns the provider identifier.
    pub fn id(&self) -> &'static str {
        self.shrinker.id()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        self.shrinker.display_name()
    }

    /// Returns the credential variable name for this provider.
    pub fn credential_env_var(&self) -> String {
        credentials::credential_env_var(self.id())
    }

    /// Returns true iff a credential is present for this provider.
    pub fn has_api_key(&self, keys: &dyn KeySource) -> bool {
        credentials::has_api_key(keys, self.id())
    }

    /// Returns the provider's credential, when one is present.
    pub fn api_key(&self, keys: &dyn KeySource) -> Option<String> {
        credentials::resolve_api_key(keys, self.id())
    }

    /// Assembles the request URL for `target`.
    ///
    /// With a credential present this is the base URL plus the provider's
    /// query fragment; without one it degrades to the bare base URL.
    /// Whether an unparameterized request is still worth sending is the
    /// caller's decision, not made here.
    pub fn api_url(
        &self,
        target: &ShrinkTarget,
        keys: &dyn KeySource,
    ) -> Result<String, CoreError> {
        let base = self.shrinker.base_url()?;
        if !self.has_api_key(keys) {
            debug!(provider = self.id(), "No API key; using bare base URL");
            return Ok(base);
        }
        let query = self.shrinker.query_parameter(target.sanitized_url())?;
        Ok(format!("{}{}", base, query))
    }

    /// Delegates to the provider's chart/QR capability.
    pub fn chart_url(
        &self,
        url: &str,
        image_size: &Map<String, Value>,
    ) -> Result<String, CoreError> {
        self.shrinker.generate_chart_url(url, image_size)
    }

    /// Assembles the full executor-facing request shape for `target`.
    pub fn outbound_request(
        &self,
        target: &ShrinkTarget,
        keys: &dyn KeySource,
        params: Map<String, Value>,
    ) -> Result<OutboundRequest, CoreError> {
        Ok(OutboundRequest {
            provider: self.id().to_string(),
            url: self.api_url(target, keys)?,
            method: self.shrinker.http_method(),
            content_type: self.shrinker.content_type().to_string(),
            body: self.shrinker.body_parameters(params),
        })
    }

    /// Interprets a decoded reply body through the provider's schema.
    pub fn interpret_response(&self, body: &Value) -> Result<String, CoreError> {
        self.schema.interpret(body)
    }

    /// Decodes and interprets a raw JSON reply through the provider's
    /// schema.
    pub fn interpret_response_str(&self, body: &str) -> Result<String, CoreError> {
        self.schema.interpret_str(body)
    }
}

impl std::fmt::Debug for ShrinkerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShrinkerDescriptor")
            .field("id", &self.id())
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
