// ABOUTME: Error types for the WeChat article extractor including ErrorCode enum and ExtractError struct.
// ABOUTME: Provides categorized errors with convenience constructors and accessors.

use std::fmt;

/// Error codes representing the categories of pipeline failure.
///
/// Per-field selector misses are never errors; they are absorbed as `None`
/// fields in the assembled [`Article`](crate::Article).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The URL was empty, malformed, or not http/https.
    InvalidUrl,
    /// A transport-level fault: DNS, connection reset, TLS failure.
    Transport,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The target host resolves to a private/reserved address.
    Ssrf,
    /// The server answered with a non-200 status; the body is not parsed.
    Status(u16),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::InvalidUrl => write!(f, "invalid URL"),
            ErrorCode::Transport => write!(f, "transport error"),
            ErrorCode::Timeout => write!(f, "timeout"),
            ErrorCode::Ssrf => write!(f, "SSRF blocked"),
            ErrorCode::Status(code) => write!(f, "HTTP status {}", code),
        }
    }
}

/// The error type for extraction pipeline operations.
#[derive(Debug, thiserror::Error)]
pub struct ExtractError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getweixin: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExtractError {
    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::InvalidUrl,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Transport error.
    pub fn transport(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Transport,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Timeout,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create an SSRF error.
    pub fn ssrf(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code: ErrorCode::Ssrf,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Status error carrying the non-200 status code.
    pub fn status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self {
            code: ErrorCode::Status(status),
            url: url.into(),
            op: op.into(),
            source: None,
        }
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if this is a Transport error.
    pub fn is_transport(&self) -> bool {
        self.code == ErrorCode::Transport
    }

    /// Returns true if this is an SSRF error.
    pub fn is_ssrf(&self) -> bool {
        self.code == ErrorCode::Ssrf
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns the non-200 status code if this is a Status error.
    pub fn status_code(&self) -> Option<u16> {
        match self.code {
            ErrorCode::Status(code) => Some(code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code() {
        let err = ExtractError::status("https://example.com", "Fetch", 404);
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn timeout_error_classified() {
        let err = ExtractError::timeout("https://example.com", "Fetch", None);
        assert!(err.is_timeout());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn display_includes_source() {
        let err = ExtractError::transport(
            "https://example.com",
            "Fetch",
            Some(anyhow::anyhow!("connection reset")),
        );
        let s = err.to_string();
        assert!(s.contains("transport error"));
        assert!(s.contains("connection reset"));
    }
}
