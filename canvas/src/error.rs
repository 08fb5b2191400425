//! Error type shared by the accessor, the sticker composer and the config layer.

/// Errors produced by canvas operations.
///
/// `OutOfBounds` and `EmptyResult` are raised before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// A coordinate fell outside the grid it addresses.
    #[error("position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: i32, y: i32, width: usize, height: usize },

    /// A sticker placement was cropped down to nothing.
    #[error("sticker would be completely out of bounds")]
    EmptyResult,

    /// The network request to the remote process failed.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A payload or configuration value could not be parsed.
    #[error("parse failed: {0}")]
    Parse(String),
}

impl CanvasError {
    /// Short status line shown to the user after a failed click.
    #[must_use]
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "Error: Position out of bounds",
            Self::EmptyResult => "Error: Sticker would be completely out of bounds",
            Self::Transport(_) | Self::Parse(_) => "Error: Failed to place pixel(s)",
        }
    }
}
