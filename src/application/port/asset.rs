// SPDX-License-Identifier: MPL-2.0
//! Asset source port definition.
//!
//! This module defines the [`AssetSource`] trait: read-only access to the
//! static server that publishes the manifest, the concept descriptions and
//! the concept images. Paths are always relative to the source's base URL
//! (e.g. `"dragons/dragons2.webp"`).

use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Failures while talking to the static asset server.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The base URL or a derived asset URL could not be built.
    InvalidUrl(String),

    /// The server answered with a non-success status (code, reason).
    Status(u16, String),

    /// Connection refused, DNS failure, timeout, TLS error...
    Transport(String),

    /// The body could not be read or decoded.
    Body(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "error-fetch-invalid-url",
            FetchError::Status(404, _) => "error-fetch-not-found",
            FetchError::Status(_, _) => "error-fetch-status",
            FetchError::Transport(_) => "error-fetch-transport",
            FetchError::Body(_) => "error-fetch-body",
        }
    }

    /// Builds a status error, using the canonical reason phrase when the
    /// server does not provide one.
    #[must_use]
    pub fn from_status(code: u16, reason: Option<&str>) -> Self {
        let reason = reason
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| default_reason(code).to_string());
        FetchError::Status(code, reason)
    }

    /// Status reason or transport message, without the error category.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            FetchError::Status(_, reason) => reason,
            FetchError::InvalidUrl(msg) | FetchError::Transport(msg) | FetchError::Body(msg) => {
                msg
            }
        }
    }
}

fn default_reason(code: u16) -> &'static str {
    match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        410 => "Gone",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unexpected Status",
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            FetchError::Status(code, reason) => write!(f, "{code} {reason}"),
            FetchError::Transport(msg) => write!(f, "Network error: {msg}"),
            FetchError::Body(msg) => write!(f, "Unreadable response: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Result type for asset source operations.
pub type FetchResult<T> = Result<T, FetchError>;

// =============================================================================
// AssetSource Trait
// =============================================================================

/// Port for reading files published by the static server.
///
/// Futures are boxed so the trait stays object-safe and the app can hold an
/// `Arc<dyn AssetSource>` inside `Task::perform` closures.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; probes for different concepts run
/// concurrently.
pub trait AssetSource: Send + Sync {
    /// Checks whether `path` exists, bypassing any HTTP cache.
    ///
    /// Transport failures are reported as errors; callers that only care
    /// about existence treat any error as absence.
    fn probe(&self, path: &str) -> BoxFuture<'_, FetchResult<bool>>;

    /// Fetches `path` and decodes the body as UTF-8 text.
    fn fetch_text(&self, path: &str) -> BoxFuture<'_, FetchResult<String>>;

    /// Fetches `path` as raw bytes.
    fn fetch_bytes(&self, path: &str) -> BoxFuture<'_, FetchResult<Vec<u8>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_uses_canonical_reason_when_missing() {
        let err = FetchError::from_status(404, None);
        assert_eq!(err, FetchError::Status(404, "Not Found".to_string()));
        assert_eq!(err.to_string(), "404 Not Found");
    }

    #[test]
    fn status_error_keeps_server_reason() {
        let err = FetchError::from_status(503, Some("Down for maintenance"));
        assert_eq!(err.reason(), "Down for maintenance");
    }

    #[test]
    fn empty_server_reason_is_replaced() {
        let err = FetchError::from_status(500, Some(""));
        assert_eq!(err.reason(), "Internal Server Error");
    }

    #[test]
    fn i18n_keys_distinguish_not_found() {
        assert_eq!(
            FetchError::from_status(404, None).i18n_key(),
            "error-fetch-not-found"
        );
        assert_eq!(
            FetchError::from_status(500, None).i18n_key(),
            "error-fetch-status"
        );
        assert_eq!(
            FetchError::Transport("refused".into()).i18n_key(),
            "error-fetch-transport"
        );
    }
}
