//! Core error types for shrinklet.

use thiserror::Error;

/// Core error type for shrinklet operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required contract method was invoked on a provider that did not
    /// supply an override. Signals a provider-implementation bug, never a
    /// runtime condition; callers must not swallow or retry it.
    #[error("Provider `{provider}` does not implement `{operation}`")]
    NotImplemented {
        /// Identifier of the offending provider.
        provider: String,
        /// The contract method that was missing.
        operation: &'static str,
    },

    /// The provider signalled failure inside a successful reply body.
    #[error("Provider reported an error: {0}")]
    ProviderReported(String),

    /// Neither the short-URL key nor the error key was readable from a
    /// reply payload.
    #[error("Response key not found: {0}")]
    MissingResponseKey(String),

    /// Provider not found in the registry.
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// A second provider was registered under an already-taken identifier.
    #[error("Duplicate provider id: {0}")]
    DuplicateProvider(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Builds the error for a contract method missing its override.
    pub fn not_implemented(provider: &str, operation: &'static str) -> Self {
        Self::NotImplemented {
            provider: provider.to_string(),
            operation,
        }
    }
}
