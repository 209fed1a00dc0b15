//! Error types for the panel bridge and the layers around it.

use thiserror::Error;

/// Primary error type for all bridge, catalog and server operations.
#[derive(Error, Debug)]
pub enum PanelError {
    /// The connection to the panel could not be established or broke mid-flight.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The panel answered with a body that is not usable JSON.
    #[error("Invalid response: {excerpt}")]
    Protocol { excerpt: String },

    /// The panel reported an error envelope.
    #[error("tRPC error: {message}")]
    Rpc { message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool '{0}' performs a mutation and the server runs in read-only access mode")]
    ReadOnly(String),

    /// The MCP session could not be started or ended abnormally.
    #[error("MCP server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad error category for routing failure handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Protocol,
    Remote,
    Configuration,
    InvalidInput,
    AccessDenied,
    Server,
    Io,
}

impl PanelError {
    /// Create a protocol error from a raw response body, keeping at most
    /// [`EXCERPT_CHARS`] characters of it.
    pub fn protocol(body: &str) -> Self {
        Self::Protocol {
            excerpt: body.chars().take(EXCERPT_CHARS).collect(),
        }
    }

    /// Create a remote error carrying the extracted message.
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport(_) => ErrorCategory::Transport,
            Self::Protocol { .. } => ErrorCategory::Protocol,
            Self::Rpc { .. } => ErrorCategory::Remote,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::InvalidArgument(_) | Self::UnknownTool(_) => ErrorCategory::InvalidInput,
            Self::ReadOnly(_) => ErrorCategory::AccessDenied,
            Self::Server(_) => ErrorCategory::Server,
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Whether this error was produced by a bridge round trip
    /// (transport, protocol or remote error).
    pub fn is_bridge_error(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Transport | ErrorCategory::Protocol | ErrorCategory::Remote
        )
    }
}

/// Maximum number of body characters kept in a protocol error.
pub const EXCERPT_CHARS: usize = 500;

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_excerpt_is_truncated_on_char_boundaries() {
        let body = "é".repeat(800);
        let err = PanelError::protocol(&body);
        match err {
            PanelError::Protocol { excerpt } => assert_eq!(excerpt.chars().count(), 500),
            other => panic!("expected Protocol, got {other:?}"),
        }
    }

    #[test]
    fn rpc_error_display_keeps_prefix_and_message() {
        let err = PanelError::rpc("boom");
        assert_eq!(err.to_string(), "tRPC error: boom");
        assert!(err.is_bridge_error());
    }

    #[test]
    fn surrounding_errors_are_not_bridge_errors() {
        assert!(!PanelError::ReadOnly("x".into()).is_bridge_error());
        assert_eq!(
            PanelError::UnknownTool("x".into()).category(),
            ErrorCategory::InvalidInput
        );
    }
}
