//! Declarative response schema.
//!
//! A [`ResponseSchema`] records, for one provider, where in a decoded JSON
//! reply the interesting fields live: the key holding the shortened URL, an
//! optional top-level collection key wrapping the real payload, and the key
//! carrying an error message when the provider signals failure inside a
//! successful reply. The record is built once at provider-registration time
//! and is immutable afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CoreError;

/// Error key assumed when a provider does not declare one.
pub const DEFAULT_ERROR_KEY: &str = "error";

static NULL: Value = Value::Null;

fn default_error_key() -> String {
    DEFAULT_ERROR_KEY.to_string()
}

// ============================================================================
// Response Schema
// ============================================================================

/// Per-provider metadata describing how to read a decoded reply.
///
/// The short-URL key is required at construction, so a schema that could not
/// interpret any successful reply cannot exist. Schema contents never affect
/// request assembly; they only govern reply interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSchema {
    /// Top-level key wrapping the real payload, when the provider nests it.
    #[serde(default)]
    collection_key: Option<String>,
    /// Key holding the shortened URL.
    url_key: String,
    /// Key holding an error message on provider-reported failure.
    #[serde(default = "default_error_key")]
    error_key: String,
}

impl ResponseSchema {
    /// Creates a schema reading the short URL from `url_key`, with the
    /// default error key and no collection wrapper.
    pub fn new(url_key: impl Into<String>) -> Self {
        Self {
            collection_key: None,
            url_key: url_key.into(),
            error_key: default_error_key(),
        }
    }

    /// Declares that the real payload is nested under `key`.
    pub fn with_collection(mut self, key: impl Into<String>) -> Self {
        self.collection_key = Some(key.into());
        self
    }

    /// Overrides the key carrying provider-reported error messages.
    pub fn with_error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = key.into();
        self
    }

    /// Returns the collection key, when one is declared.
    pub fn collection_key(&self) -> Option<&str> {
        self.collection_key.as_deref()
    }

    /// Returns the key holding the shortened URL.
    pub fn url_key(&self) -> &str {
        &self.url_key
    }

    /// Returns the key holding provider-reported error messages.
    pub fn error_key(&self) -> &str {
        &self.error_key
    }

    // ========================================================================
    // Reply navigation
    // ========================================================================

    /// Returns the payload portion of a decoded reply.
    ///
    /// Descends into the collection key when one is declared; a missing
    /// collection yields a null payload, so subsequent reads find nothing.
    pub fn payload<'a>(&self, body: &'a Value) -> &'a Value {
        match &self.collection_key {
            Some(key) => body.get(key).unwrap_or(&NULL),
            None => body,
        }
    }

    /// Returns the shortened URL string, when the payload carries one.
    pub fn short_url<'a>(&self, body: &'a Value) -> Option<&'a str> {
        self.payload(body).get(&self.url_key).and_then(Value::as_str)
    }

    /// Returns the provider-reported error message, when the payload
    /// carries one.
    pub fn error_message<'a>(&self, body: &'a Value) -> Option<&'a str> {
        self.payload(body).get(&self.error_key).and_then(Value::as_str)
    }

    /// Interprets a decoded reply: the shortened URL on success,
    /// [`CoreError::ProviderReported`] when the error key is populated
    /// instead, [`CoreError::MissingResponseKey`] when neither key is
    /// readable.
    pub fn interpret(&self, body: &Value) -> Result<String, CoreError> {
        if let Some(url) = self.short_url(body) {
            debug!(key = %self.url_key, "Short URL extracted from reply");
            return Ok(url.to_string());
        }
        if let Some(message) = self.error_message(body) {
            warn!(key = %self.error_key, message, "Provider reported an error");
            return Err(CoreError::ProviderReported(message.to_string()));
        }
        Err(CoreError::MissingResponseKey(self.url_key.clone()))
    }

    /// Decodes a raw JSON reply and interprets it.
    pub fn interpret_str(&self, body: &str) -> Result<String, CoreError> {
        debug!(len = body.len(), "Parsing provider reply");
        let value: Value = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "Failed to parse provider reply JSON");
            CoreError::Serialization(e)
        })?;
        self.interpret(&value)
    }
}

// ============================================================================
// Tests
// ============================================================================
