//! Render error types.

/// Error raised when sidebar input cannot be used for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Page props are missing a required field or are not valid JSON.
    #[error("Invalid sidebar props: {0}")]
    Props(#[from] serde_json::Error),
}
