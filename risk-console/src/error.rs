//! Error handling

use thiserror::Error;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Alert shown when the engine answers with an unexpected status
pub const SERVER_ALERT: &str = "Error communicating with server.";

/// Alert shown when the request never completes or the body is unusable
pub const CONNECT_ALERT: &str = "Failed to connect to the Zero Trust Engine.";

#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Engine answered with a status other than 2xx or 403
    #[error("Server error: {0}")]
    Server(u16),

    /// Request did not complete (refused, reset, timed out)
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not valid JSON or lacked a required field
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Text of the alert raised on the result surface
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Server(_) => SERVER_ALERT,
            Self::Network(_) | Self::Parse(_) | Self::Config(_) => CONNECT_ALERT,
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ConsoleError::Parse(err.to_string())
        } else {
            ConsoleError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_wording_differs() {
        assert_eq!(ConsoleError::Server(500).user_message(), SERVER_ALERT);
        assert_eq!(ConsoleError::Network("refused".into()).user_message(), CONNECT_ALERT);
        assert_eq!(ConsoleError::Parse("eof".into()).user_message(), CONNECT_ALERT);
        assert_ne!(SERVER_ALERT, CONNECT_ALERT);
    }

    #[test]
    fn test_json_error_is_parse() {
        let err: ConsoleError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ConsoleError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
