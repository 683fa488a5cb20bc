#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("Unknown activation: {0}")]
    UnknownActivation(String),

    #[error("leaky_relu needs a slope, e.g. leaky_relu:0.01")]
    MissingSlope,

    #[error("Invalid slope: {0}")]
    InvalidSlope(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, ActivationError>;
