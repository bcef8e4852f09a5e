use thiserror::Error;

/// Boxed error carried by transport failures so any HTTP backend can report through it
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for every fallible library call
pub type Result<T> = std::result::Result<T, DatamuseError>;

#[derive(Debug, Error)]
pub enum DatamuseError {
    // Validation errors, raised before any network access
    #[error("invalid endpoint \"{0}\"")]
    InvalidEndpoint(String),

    #[error("invalid query parameter \"{0}\"")]
    InvalidParameter(String),

    #[error("invalid metadata flag \"{0}\"")]
    InvalidMetadataFlag(char),

    // I/O errors
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DatamuseError {
    /// True for the errors raised by validation, i.e. before any request was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DatamuseError::InvalidEndpoint(_)
                | DatamuseError::InvalidParameter(_)
                | DatamuseError::InvalidMetadataFlag(_)
        )
    }

    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        DatamuseError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}
