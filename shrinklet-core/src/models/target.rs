//! Per-operation request target.

use crate::sanitize::sanitize_url;

/// The long URL a single shrink operation works on.
///
/// The candidate handed in by the caller is sanitized on the way in and the
/// sanitized form is the only form ever read back. One target serves one
/// shrink operation; it is single-owner mutable state and must not be shared
/// across concurrent operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkTarget {
    sanitized_url: String,
}

impl ShrinkTarget {
    /// Creates a target for `candidate`, sanitizing it immediately.
    pub fn new(candidate: &str) -> Self {
        Self {
            sanitized_url: sanitize_url(candidate),
        }
    }

    /// Replaces the target URL, sanitizing the new candidate.
    pub fn set_url(&mut self, candidate: &str) {
        self.sanitized_url = sanitize_url(candidate);
    }

    /// Returns the sanitized URL.
    pub fn sanitized_url(&self) -> &str {
        &self.sanitized_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_sanitized_form() {
        let target = ShrinkTarget::new("example.com");
        assert_eq!(target.sanitized_url(), "http%3A%2F%2Fexample.com");
    }

    #[test]
    fn test_set_url_never_stores_raw_input() {
        let mut target = ShrinkTarget::new("example.com");
        target.set_url("other.org/path?q=1");
        assert_eq!(
            target.sanitized_url(),
            sanitize_url("other.org/path?q=1")
        );
        assert_ne!(target.sanitized_url(), "other.org/path?q=1");
    }

    #[test]
    fn test_resetting_same_url_is_stable() {
        let mut target = ShrinkTarget::new("http://example.com");
        let first = target.sanitized_url().to_string();
        let stored = first.clone();
        target.set_url(&stored);
        assert_eq!(target.sanitized_url(), first);
    }
}
