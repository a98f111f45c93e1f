//! Provider registry.
//!
//! Providers are made available by explicit registration. The registry
//! owns its descriptors and hands out shared references; identifiers are
//! unique within one registry and lookups are case-sensitive.

use tracing::debug;

use shrinklet_core::CoreError;

use crate::descriptor::ShrinkerDescriptor;

// ============================================================================
// Shrinker Registry
// ============================================================================

/// Ordered collection of registered providers.
#[derive(Debug, Default)]
pub struct ShrinkerRegistry {
    providers: Vec<ShrinkerDescriptor>,
}

impl ShrinkerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { providers: Vec::new() }
    }

    /// Creates a registry from a batch of descriptors.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateProvider`] when two descriptors share
    /// an identifier.
    pub fn with_providers(providers: Vec<ShrinkerDescriptor>) -> Result<Self, CoreError> {
        let mut registry = Self::new();
        for descriptor in providers {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Registers one provider, keeping identifiers unique.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateProvider`] when the identifier is
    /// already taken.
    pub fn register(&mut self, descriptor: ShrinkerDescriptor) -> Result<(), CoreError> {
        let id = descriptor.id();
        if self.contains(id) {
            return Err(CoreError::DuplicateProvider(id.to_string()));
        }
        debug!(provider = id, "Registered provider");
        self.providers.push(descriptor);
        Ok(())
    }

    /// Finds a provider by identifier.
    pub fn get(&self, id: &str) -> Option<&ShrinkerDescriptor> {
        // Registries stay small; a linear scan beats a map here.
        self.providers.iter().find(|descriptor| descriptor.id() == id)
    }

    /// Finds a provider by identifier, failing loudly when absent.
    ///
    /// # Errors
    /// Returns [`CoreError::ProviderNotFound`] for unknown identifiers.
    pub fn lookup(&self, id: &str) -> Result<&ShrinkerDescriptor, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::ProviderNotFound(id.to_string()))
    }

    /// Returns all registered providers in registration order.
    pub fn all(&self) -> &[ShrinkerDescriptor] {
        &self.providers
    }

    /// Returns the registered identifiers in registration order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(ShrinkerDescriptor::id).collect()
    }

    /// Returns the number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns true when no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns true when `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shrinklet_core::{ResponseSchema, Shrinker};

    struct Fixed(&'static str);

    impl Shrinker for Fixed {
        fn id(&self) -> &'static str {
            self.0
        }
    }

    fn descriptor(id: &'static str) -> ShrinkerDescriptor {
        ShrinkerDescriptor::new(Box::new(Fixed(id)), ResponseSchema::new("url"))
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ShrinkerRegistry::new();
        registry.register(descriptor("shorty")).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("shorty"));
        assert_eq!(registry.get("shorty").unwrap().id(), "shorty");
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut registry = ShrinkerRegistry::new();
        registry.register(descriptor("shorty")).unwrap();

        let err = registry.register(descriptor("shorty")).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProvider(id) if id == "shorty"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_id_fails() {
        let registry = ShrinkerRegistry::new();
        let err = registry.lookup("nope").unwrap_err();
        assert!(matches!(err, CoreError::ProviderNotFound(id) if id == "nope"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = ShrinkerRegistry::new();
        registry.register(descriptor("shorty")).unwrap();

        assert!(registry.get("Shorty").is_none());
        assert!(registry.get("SHORTY").is_none());
    }

    #[test]
    fn test_with_providers_keeps_order() {
        let registry = ShrinkerRegistry::with_providers(vec![
            descriptor("alpha"),
            descriptor("beta"),
            descriptor("gamma"),
        ])
        .unwrap();

        assert_eq!(registry.ids(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(registry.all().len(), 3);
    }

    #[test]
    fn test_with_providers_rejects_batch_duplicates() {
        let result =
            ShrinkerRegistry::with_providers(vec![descriptor("alpha"), descriptor("alpha")]);
        assert!(matches!(result, Err(CoreError::DuplicateProvider(_))));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ShrinkerRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.ids().is_empty());
    }
}
