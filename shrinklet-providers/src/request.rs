//! Executor-facing request shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shrinklet_core::HttpMethod;

// ============================================================================
// Outbound Request
// ============================================================================

/// Everything a transport executor needs to perform one shorten call.
///
/// Assembled by [`crate::descriptor::ShrinkerDescriptor::outbound_request`];
/// this crate stops at assembly and never performs the call itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundRequest {
    /// Identifier of the provider the request targets.
    pub provider: String,
    /// Fully assembled request URL.
    pub url: String,
    /// HTTP method the provider expects.
    pub method: HttpMethod,
    /// Content type for the request body.
    pub content_type: String,
    /// Body parameters, absent for body-less requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
}
