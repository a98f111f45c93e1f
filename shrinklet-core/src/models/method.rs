//! HTTP method selection for provider requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP method a provider's endpoint expects.
///
/// The contract defaults to GET; POST providers override
/// [`Shrinker::http_method`](crate::traits::Shrinker::http_method) and
/// usually supply real [`body_parameters`](crate::traits::Shrinker::body_parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Query-string request (the default).
    #[default]
    Get,
    /// Body-carrying request.
    Post,
}

impl HttpMethod {
    /// Returns the wire name for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_serde_uppercase() {
        assert_eq!(serde_json::to_string(&HttpMethod::Post).unwrap(), "\"POST\"");
        let parsed: HttpMethod = serde_json::from_str("\"GET\"").unwrap();
        assert_eq!(parsed, HttpMethod::Get);
    }
}
