//! API-key resolution.
//!
//! Providers that require an API key receive it through a key source under
//! the name `<PROVIDER_ID_UPPERCASE>_URL_KEY`. The source is injected so
//! the convention can be exercised against a fixed map in tests;
//! [`EnvKeySource`] is the process-environment implementation. A missing
//! key is a normal, expected state, never an error.

use std::collections::HashMap;

use tracing::debug;

/// Suffix of every credential variable name.
pub const CREDENTIAL_SUFFIX: &str = "_URL_KEY";

// ============================================================================
// Key Source
// ============================================================================

/// Read access to named credential values.
///
/// Presence and value are decoupled: a present-but-empty credential is
/// reported as `Some("")`, never as absent.
pub trait KeySource: Send + Sync {
    /// Returns the value stored under `name`, when one is present.
    fn get(&self, name: &str) -> Option<String>;
}

/// Process-environment key source.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvKeySource;

impl EnvKeySource {
    /// Creates a new environment-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for EnvKeySource {
    fn get(&self, name: &str) -> Option<String> {
        // var_os keeps empty variables visible as present.
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// Fixed in-memory key source for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct StaticKeySource {
    values: HashMap<String, String>,
}

impl StaticKeySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a credential, builder style.
    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Adds a credential in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

impl KeySource for StaticKeySource {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Returns the credential variable name for a provider id.
///
/// ```
/// use shrinklet_core::credentials::credential_env_var;
///
/// assert_eq!(credential_env_var("shorty"), "SHORTY_URL_KEY");
/// ```
pub fn credential_env_var(provider_id: &str) -> String {
    format!("{}{}", provider_id.to_ascii_uppercase(), CREDENTIAL_SUFFIX)
}

/// Returns true iff a credential is present for the provider, regardless of
/// its value (empty values included).
pub fn has_api_key(source: &dyn KeySource, provider_id: &str) -> bool {
    source.get(&credential_env_var(provider_id)).is_some()
}

/// Returns the provider's credential when one is present.
pub fn resolve_api_key(source: &dyn KeySource, provider_id: &str) -> Option<String> {
    let name = credential_env_var(provider_id);
    let value = source.get(&name);
    if value.is_some() {
        debug!(provider = provider_id, var = %name, "API key resolved");
    }
    value
}

// ============================================================================
// Tests
// ============================================================================
