//! Candidate URL sanitization.
//!
//! Every long URL entering the system passes through [`sanitize_url`]: a
//! missing scheme is patched with `http://`, then the whole string is
//! percent-encoded so it can be embedded as a query-string value without
//! further treatment. Sanitization is pure, never fails, and is idempotent
//! on its own output.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped when a URL is embedded as a query-string value.
///
/// `%` stays unescaped so already-encoded input passes through unchanged;
/// every character this set emits is itself safe, which is what makes
/// [`sanitize_url`] idempotent.
const QUERY_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'%')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Normalizes a candidate long URL for safe embedding in a query string.
///
/// A candidate without a scheme marker gets `http://` prepended, then the
/// result is percent-encoded. Any input yields a best-effort absolute form;
/// rejecting a truly invalid URL is the network executor's job.
///
/// ```
/// use shrinklet_core::sanitize::sanitize_url;
///
/// assert_eq!(sanitize_url("example.com"), "http%3A%2F%2Fexample.com");
/// assert_eq!(sanitize_url("https://example.com"), "https%3A%2F%2Fexample.com");
/// ```
pub fn sanitize_url(candidate: &str) -> String {
    if has_scheme_marker(candidate) {
        utf8_percent_encode(candidate, QUERY_VALUE_SET).to_string()
    } else {
        let prefixed = format!("http://{}", candidate);
        utf8_percent_encode(&prefixed, QUERY_VALUE_SET).to_string()
    }
}

// Unanchored: the encoded form `http%3A%2F%2F...` must keep passing this
// test so repeated sanitization cannot stack prefixes, and partial matches
// (`httpfoo.bar`) count as already schemed.
fn has_scheme_marker(candidate: &str) -> bool {
    candidate.contains("http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_gets_prefixed_and_encoded() {
        assert_eq!(sanitize_url("example.com"), "http%3A%2F%2Fexample.com");
    }

    #[test]
    fn test_existing_http_prefix_is_not_duplicated() {
        assert_eq!(
            sanitize_url("http://example.com"),
            "http%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn test_https_prefix_is_preserved() {
        assert_eq!(
            sanitize_url("https://example.com"),
            "https%3A%2F%2Fexample.com"
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in ["example.com", "http://example.com", "https://a.b/c?d=e", ""] {
            let once = sanitize_url(input);
            assert_eq!(sanitize_url(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_query_characters_are_escaped() {
        assert_eq!(
            sanitize_url("example.com/path?a=b&c=d"),
            "http%3A%2F%2Fexample.com%2Fpath%3Fa%3Db%26c%3Dd"
        );
    }

    #[test]
    fn test_scheme_marker_is_loose() {
        // Any `http` occurrence counts as a scheme, wherever it sits.
        assert_eq!(sanitize_url("httpfoo.bar"), "httpfoo.bar");
        assert_eq!(sanitize_url("see http docs"), "see%20http%20docs");
    }

    #[test]
    fn test_empty_input_yields_bare_prefix() {
        assert_eq!(sanitize_url(""), "http%3A%2F%2F");
    }

    #[test]
    fn test_non_ascii_input_is_percent_encoded() {
        assert_eq!(
            sanitize_url("exämple.com"),
            "http%3A%2F%2Fex%C3%A4mple.com"
        );
    }

    #[test]
    fn test_pre_encoded_input_passes_through() {
        assert_eq!(
            sanitize_url("http%3A%2F%2Fexample.com"),
            "http%3A%2F%2Fexample.com"
        );
    }
}
