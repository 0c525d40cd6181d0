//! Render errors.

/// Errors that can occur while rendering the animation.
///
/// Every variant originates in a collaborator (color parsing or the output
/// stream). Nothing is retried; callers decide whether to abort.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Invalid color '{value}' (expected a name, a palette index or #RRGGBB)")]
    InvalidColor { value: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
