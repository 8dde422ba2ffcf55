use thiserror::Error;

/// Errors raised by a page source while talking to the upstream datastore
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Datastore responded with HTTP status {status}")]
    Status { status: u16 },

    #[error("Datastore request failed: {reason}")]
    Transport { reason: String },

    #[error("Datastore payload could not be decoded: {reason}")]
    Decode { reason: String },
}

/// Errors raised while turning raw records into regression features
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreprocessError {
    #[error("Malformed month value: '{value}'")]
    MalformedMonth { value: String },

    #[error("Resale price cannot be represented as a float: {value}")]
    MalformedPrice { value: String },
}

/// Errors raised while fitting or applying the trend model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    #[error("Insufficient data: {actual} samples available for this segment")]
    InsufficientData { actual: usize },

    #[error("Sample length mismatch: {features} feature rows vs {targets} targets")]
    LengthMismatch { features: usize, targets: usize },
}
