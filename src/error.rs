use thiserror::Error;

/// Rejected domain values.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidMacro { field: &'static str, value: f64 },
}

/// Failures of a single chat exchange. All of them end up as the same
/// apology bubble in the conversation; the variant is kept for the caller.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyInput,
    #[error("chat request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("chat API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("malformed chat response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("chat API returned no choices")]
    EmptyResponse,
}
