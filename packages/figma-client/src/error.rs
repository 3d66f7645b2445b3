use thiserror::Error;

pub type Result<T> = std::result::Result<T, FigmaError>;

#[derive(Debug, Error)]
pub enum FigmaError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the Figma API
    #[error("Figma API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl FigmaError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FigmaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
