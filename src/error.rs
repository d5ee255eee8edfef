//! Error types for the Elasticsearch client.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ElasticError>;

/// Main error type for client operations.
///
/// Engine-reported failures (a JSON body carrying an `error` key) are not
/// errors at this level: they come back as a failed
/// [`ResultEnvelope`](crate::envelope::ResultEnvelope). Only search turns them
/// into [`ElasticError::Pagination`], since a page cannot be built from them.
#[derive(Error, Debug)]
pub enum ElasticError {
    /// Network, DNS, connect or timeout failures
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine answered with something that is not JSON
    #[error("Parse error: {message}")]
    Parse { message: String, body: String },

    /// A page was requested from a failed or malformed search response
    #[error("Pagination error: {message}")]
    Pagination {
        message: String,
        response: serde_json::Value,
    },

    /// A terminal operation ran without the index/type it needs
    #[error("Target error: {message}")]
    Target { message: String },

    /// Caller-supplied arguments the engine would never accept
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization errors for request bodies
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ElasticError {
    /// Create a new parse error, keeping the offending body
    pub fn parse<S: Into<String>, B: Into<String>>(message: S, body: B) -> Self {
        Self::Parse {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Create a new pagination error
    pub fn pagination<S: Into<String>>(message: S, response: serde_json::Value) -> Self {
        Self::Pagination {
            message: message.into(),
            response,
        }
    }

    /// Create a new target error
    pub fn target<S: Into<String>>(message: S) -> Self {
        Self::Target {
            message: message.into(),
        }
    }

    /// Create a new invalid input error
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the request never produced an engine response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the engine response could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let parse = ElasticError::parse("expected value at line 1", "<html>");
        let target = ElasticError::target("no index selected");
        let invalid = ElasticError::invalid("size must be at least 1");

        assert!(parse.is_parse());
        assert!(!parse.is_transport());
        assert!(matches!(target, ElasticError::Target { .. }));
        assert!(matches!(invalid, ElasticError::InvalidInput { .. }));
        assert!(!invalid.is_timeout());
    }

    #[test]
    fn test_error_display() {
        let err = ElasticError::pagination(
            "search failed: index_not_found_exception",
            serde_json::json!({"error": {"type": "index_not_found_exception"}}),
        );

        assert_eq!(
            err.to_string(),
            "Pagination error: search failed: index_not_found_exception"
        );
    }

    #[test]
    fn test_parse_error_keeps_body() {
        match ElasticError::parse("bad json", "not json") {
            ElasticError::Parse { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
