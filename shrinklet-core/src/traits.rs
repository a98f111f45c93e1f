//! Trait definitions for shrinklet.
//!
//! This module defines the contract every URL-shortening provider must
//! satisfy.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::models::HttpMethod;

/// Content type assumed when a provider does not declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Contract for a URL-shortening provider.
///
/// Implementors supply:
/// - a stable identifier ([`id`](Shrinker::id)), which also names the
///   credential variable `<ID_UPPERCASE>_URL_KEY`,
/// - the API endpoint ([`base_url`](Shrinker::base_url)),
/// - the query fragment appended to it
///   ([`query_parameter`](Shrinker::query_parameter)).
///
/// `base_url`, `query_parameter`, and the optional `generate_chart_url`
/// default to [`CoreError::NotImplemented`] so that a provider missing a
/// required override fails loudly at the call site instead of silently
/// producing a broken request. Method, content type, and body handling
/// have working defaults and are overridden only when a provider needs to
/// deviate.
///
/// ```
/// use shrinklet_core::{CoreError, Shrinker};
///
/// struct Shorty;
///
/// impl Shrinker for Shorty {
///     fn id(&self) -> &'static str {
///         "shorty"
///     }
///
///     fn base_url(&self) -> Result<String, CoreError> {
///         Ok("http://shorty.com/api/2.0/shorten".to_string())
///     }
///
///     fn query_parameter(&self, sanitized_url: &str) -> Result<String, CoreError> {
///         Ok(format!("?url={}", sanitized_url))
///     }
/// }
/// ```
pub trait Shrinker: Send + Sync {
    /// Stable identifier for this provider.
    fn id(&self) -> &'static str;

    /// Human-readable name; defaults to the identifier.
    fn display_name(&self) -> &str {
        self.id()
    }

    /// The provider's API endpoint.
    fn base_url(&self) -> Result<String, CoreError> {
        Err(CoreError::not_implemented(self.id(), "base_url"))
    }

    /// Provider-specific query fragment appended to the base URL, built
    /// from the sanitized long URL (e.g. `?url=<encoded>`).
    fn query_parameter(&self, sanitized_url: &str) -> Result<String, CoreError> {
        let _ = sanitized_url;
        Err(CoreError::not_implemented(self.id(), "query_parameter"))
    }

    /// Optional secondary capability: a chart/QR-code URL for `url`.
    ///
    /// `image_size` carries provider-interpreted rendering options such as
    /// width and height.
    fn generate_chart_url(
        &self,
        url: &str,
        image_size: &Map<String, Value>,
    ) -> Result<String, CoreError> {
        let _ = (url, image_size);
        Err(CoreError::not_implemented(self.id(), "generate_chart_url"))
    }

    /// HTTP method the endpoint expects.
    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Content type sent with the request.
    fn content_type(&self) -> &str {
        DEFAULT_CONTENT_TYPE
    }

    /// Request body handed to the executor.
    ///
    /// The base behavior is a pass-through: `None` for an empty map, the
    /// map unchanged otherwise. POST providers override this with real
    /// body construction.
    fn body_parameters(&self, params: Map<String, Value>) -> Option<Map<String, Value>> {
        if params.is_empty() {
            None
        } else {
            Some(params)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Provider supplying nothing beyond its identifier.
    struct Bare;

    impl Shrinker for Bare {
        fn id(&self) -> &'static str {
            "bare"
        }
    }

    /// Provider with the required overrides supplied.
    struct Shorty;

    impl Shrinker for Shorty {
        fn id(&self) -> &'static str {
            "shorty"
        }

        fn base_url(&self) -> Result<String, CoreError> {
            Ok("http://shorty.com/api/2.0/shorten".to_string())
        }

        fn query_parameter(&self, sanitized_url: &str) -> Result<String, CoreError> {
            Ok(format!("?url={}", sanitized_url))
        }
    }

    #[test]
    fn test_missing_overrides_fail_with_not_implemented() {
        let bare = Bare;

        let err = bare.base_url().unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotImplemented { operation: "base_url", .. }
        ));

        let err = bare.query_parameter("http%3A%2F%2Fexample.com").unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotImplemented { operation: "query_parameter", .. }
        ));

        let err = bare
            .generate_chart_url("http://sho.rt/x", &Map::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::NotImplemented { operation: "generate_chart_url", .. }
        ));
    }

    #[test]
    fn test_not_implemented_names_the_provider() {
        let err = Bare.base_url().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Provider `bare` does not implement `base_url`"
        );
    }

    #[test]
    fn test_contract_defaults() {
        let shorty = Shorty;
        assert_eq!(shorty.display_name(), "shorty");
        assert_eq!(shorty.http_method(), HttpMethod::Get);
        assert_eq!(shorty.content_type(), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_body_parameters_pass_through() {
        let shorty = Shorty;
        assert!(shorty.body_parameters(Map::new()).is_none());

        let mut params = Map::new();
        params.insert("a".to_string(), json!(1));
        let passed = shorty.body_parameters(params.clone());
        assert_eq!(passed, Some(params));
    }

    #[test]
    fn test_required_overrides_are_used_when_supplied() {
        let shorty = Shorty;
        assert_eq!(
            shorty.base_url().unwrap(),
            "http://shorty.com/api/2.0/shorten"
        );
        assert_eq!(
            shorty.query_parameter("http%3A%2F%2Fexample.com").unwrap(),
            "?url=http%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn test_trait_is_object_safe() {
        let boxed: Box<dyn Shrinker> = Box::new(Shorty);
        assert_eq!(boxed.id(), "shorty");
    }
}
