use thiserror::Error;

/// Boxed cause carried by [`SlideError::UpstreamError`].
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SlideError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{action}: {source}")]
    UpstreamError {
        action: &'static str,
        #[source]
        source: Cause,
    },

    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Assembly error: {0}")]
    AssemblyError(String),
}

impl SlideError {
    pub(crate) fn upstream(action: &'static str, source: impl Into<Cause>) -> Self {
        SlideError::UpstreamError {
            action,
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
