use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug, PartialEq)]
pub enum BloomError {
    #[error("Invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Index out of bounds: {index} >= {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },

    #[error("Failed to parse environment variable {var_name}: value '{value}' - {error}")]
    EnvParseError {
        var_name: String,
        value: String,
        error: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl BloomError {
    pub(crate) fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        BloomError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}

impl From<crate::config::BloomConfigBuilderError> for BloomError {
    fn from(err: crate::config::BloomConfigBuilderError) -> Self {
        BloomError::Config(err.to_string())
    }
}
