use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Operand {name} must be finite, got {value}")]
    InvalidOperand { name: &'static str, value: f64 },

    /// The endpoint answered with a non-success status. The message is the
    /// body's `error` field verbatim, or the generic fallback when the body
    /// has no usable one.
    #[error("{message}")]
    Remote { message: String },

    /// The request never completed: network unreachable, connection refused,
    /// TLS failure. Distinct from a deliberate remote rejection.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body is not the documented shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error("No endpoint configured: set TALLY_API_BASE_URL or TALLY_PROXY_ORIGIN")]
    MissingEndpoint,
}
