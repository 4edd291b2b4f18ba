//! Failure classes for a listing fetch.

use thiserror::Error;

/// Errors that can end a listing fetch.
///
/// All variants collapse into the same failed view; the distinction is kept
/// for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read.
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Body was not JSON, or JSON without a listing or error field.
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// The API answered with an explicit error field.
    #[error("API error: {code}")]
    Api { code: String },
}

impl FetchError {
    /// User-facing message. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        "There's an error! Try again!"
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Decode { .. } => "decode",
            FetchError::Api { .. } => "api",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_shares_the_user_message() {
        let errors = [
            FetchError::Transport {
                message: "connection refused".to_string(),
            },
            FetchError::Decode {
                message: "expected value".to_string(),
            },
            FetchError::Api {
                code: "404".to_string(),
            },
        ];
        for err in &errors {
            assert_eq!(err.user_message(), "There's an error! Try again!");
        }
    }

    #[test]
    fn serde_errors_become_decode() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "decode");
    }
}
