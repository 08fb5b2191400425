//! UI components for the canvas page.

pub mod canvas_grid;
pub mod color_picker;
pub mod painter;
pub mod status_bar;
pub mod sticker_editor;
