//! Error types for slider operations.

/// Errors produced by the slider widget and its event bus.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    #[error("Track has no usable width: {width}")]
    EmptyTrack { width: f64 },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Handler for '{event}' failed: {source}")]
    Handler {
        event: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type SliderResult<T> = Result<T, SliderError>;
