use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailvanError {
    /// Connection, DNS, timeout or response-decoding failure. Propagated
    /// unchanged from the transport; never wrapped or reinterpreted.
    #[error("transport request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error embedded in an otherwise well-formed provider response.
    /// Message and code are taken verbatim from the response body.
    #[error("provider error {code}: {message}")]
    Provider { message: String, code: Value },

    /// The operation catalog has no entry for the requested command.
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MailvanError>;
