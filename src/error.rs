//! Error types for Artworks Table
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use std::sync::Arc;

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Transport failure while talking to the data source
    #[snafu(display("Network error: {source}"))]
    Network { source: reqwest::Error },

    /// The data source answered with a non-success status
    #[snafu(display("HTTP {status} from {url}"))]
    HttpStatus { status: u16, url: String },

    /// The data source did not answer in time
    #[snafu(display("Timeout: no response after {secs}s"))]
    Timeout { secs: u64 },

    /// Response body did not match the expected shape
    #[snafu(display("Decode error: {source}"))]
    Decode { source: serde_json::Error },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

/// Failure classes surfaced by a page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Transport, status or timeout failure
    Network,
    /// Malformed response
    Decode,
    /// Rejected before any I/O happened
    Invalid,
}

impl FetchErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Decode => "decode",
            FetchErrorKind::Invalid => "invalid",
        }
    }
}

impl Error {
    /// Classify the error for the UI layer
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Error::Network { .. } | Error::HttpStatus { .. } | Error::Timeout { .. } => {
                FetchErrorKind::Network
            }
            Error::Decode { .. } => FetchErrorKind::Decode,
            Error::Invalid { .. }
            | Error::Io { .. }
            | Error::TomlDe { .. }
            | Error::TomlSe { .. } => FetchErrorKind::Invalid,
        }
    }

    /// Shorthand for an `Invalid` error
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::Invalid {
            message: message.into(),
        }
    }
}

/// Cloneable summary of a failed fetch, sent across the event channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FetchErrorKind,
    pub message: Arc<str>,
}

impl FetchFailure {
    pub fn new(kind: FetchErrorKind, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.kind.label(), self.message)
    }
}

impl From<&Error> for FetchFailure {
    fn from(error: &Error) -> Self {
        FetchFailure::new(error.kind(), error.to_string())
    }
}

impl From<Error> for FetchFailure {
    fn from(error: Error) -> Self {
        FetchFailure::from(&error)
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Decode { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Network { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Error::Timeout { secs: 5 }.kind(), FetchErrorKind::Network);
        assert_eq!(
            Error::HttpStatus {
                status: 503,
                url: "http://example".to_string()
            }
            .kind(),
            FetchErrorKind::Network
        );
        let decode = serde_json::from_str::<u32>("\"x\"").map_err(Error::from);
        assert_eq!(decode.err().map(|e| e.kind()), Some(FetchErrorKind::Decode));
        assert_eq!(Error::invalid("page 0").kind(), FetchErrorKind::Invalid);
    }

    #[test]
    fn test_fetch_failure_display() {
        let failure = FetchFailure::from(Error::Timeout { secs: 10 });
        assert_eq!(failure.kind, FetchErrorKind::Network);
        assert_eq!(
            failure.to_string(),
            "network error: Timeout: no response after 10s"
        );
    }
}
