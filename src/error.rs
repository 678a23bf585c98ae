use thiserror::Error;

/// Custom error types for the glam-forecast pipeline
#[derive(Error, Debug)]
pub enum AppError {
    /// Network-level failure: connection refused, timeout, interrupted body
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a status other than 200
    #[error("HTTP {status_code}: {reason}")]
    Http { status_code: u16, reason: String },

    /// IP geolocation reported `status == "fail"`
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// City search returned an empty result set
    #[error("No location found for: {0}")]
    NoLocationFound(String),

    /// Current-conditions response contained no elements
    #[error("No current condition data for location key: {0}")]
    NoConditionData(String),

    /// Payload did not match the expected shape
    #[error("Unexpected JSON shape for {context}: {source}")]
    JsonShape {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error when environment variable is not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// The pipeline was cancelled before it produced a result
    #[error("Request cancelled")]
    Cancelled,
}

impl AppError {
    /// Short status line for display. The full cause is available via `Display`.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::LocationUnavailable(_) | AppError::NoLocationFound(_) => {
                "Failed to resolve location."
            }
            AppError::NoConditionData(_) => "Failed to get current weather condition.",
            AppError::Transport(_) | AppError::Http { .. } | AppError::JsonShape { .. } => {
                "Failed to reach a remote service."
            }
            AppError::EnvVarNotSet(_) => "Application is not configured.",
            AppError::Cancelled => "Request cancelled.",
        }
    }
}
