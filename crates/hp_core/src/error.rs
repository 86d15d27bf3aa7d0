use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Model expects {expected} features, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Field '{field}' is not a number: '{value}'")]
    Parse { field: String, value: String },

    #[error("Missing field '{0}'")]
    MissingField(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl Error {
    /// Errors caused by what the client submitted, as opposed to the model.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::MissingField(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Parse {
            field: "rooms".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Field 'rooms' is not a number: 'abc'");
        assert!(err.is_input_error());

        let err = Error::DimensionMismatch { expected: 3, found: 0 };
        assert_eq!(err.to_string(), "Model expects 3 features, got 0");
        assert!(!err.is_input_error());

        let err = Error::MissingField("rooms".to_string());
        assert_eq!(err.to_string(), "Missing field 'rooms'");
        assert!(err.is_input_error());
    }
}
