#[cfg(test)]
#[path = "tool_test.rs"]
mod tool_test;

use crate::pixel::Pixel;

/// Available drawing tools. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    #[default]
    Pencil,
    Sticker,
    Spray,
}

impl DrawMode {
    pub const ALL: [Self; 3] = [Self::Pencil, Self::Spray, Self::Sticker];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Sticker => "Sticker Editor",
            Self::Spray => "Spray Brush",
        }
    }
}

/// Selected color and active drawing mode. Changed only by user action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolState {
    pub color: Pixel,
    pub mode: DrawMode,
}

impl ToolState {
    /// Switch the active mode.
    ///
    /// Returns `true` when the sticker composer must be cleared, which is
    /// exactly when the switch enters or leaves sticker mode.
    pub fn set_mode(&mut self, mode: DrawMode) -> bool {
        let was_sticker = self.mode == DrawMode::Sticker;
        self.mode = mode;
        was_sticker != (mode == DrawMode::Sticker)
    }
}
