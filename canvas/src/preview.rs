//! Per-frame derivation of what every canvas cell displays.
//!
//! Everything here is a pure function of the cached canvas, the tool state,
//! the cursor and the sticker composer. Nothing is stored between frames.
//!
//! The sticker preview is intentionally not cropped like a commit is: every
//! pattern entry that lands on a visible cell is drawn, and the write path
//! in [`crate::sticker::place_pattern`] drops whatever falls off the canvas.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::consts::PREVIEW_OPACITY;
use crate::grid::{Canvas, GridPoint};
use crate::pixel::Pixel;
use crate::sticker::StickerComposer;
use crate::tool::{DrawMode, ToolState};

/// Display color and opacity of one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellView {
    pub color: Pixel,
    pub opacity: f64,
}

impl CellView {
    #[must_use]
    pub fn solid(color: Pixel) -> Self {
        Self { color, opacity: 1.0 }
    }

    #[must_use]
    pub fn preview(color: Pixel) -> Self {
        Self { color, opacity: PREVIEW_OPACITY }
    }

    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Display of the cell at `(x, y)`.
#[must_use]
pub fn cell_view(
    canvas: &Canvas,
    x: i32,
    y: i32,
    tool: &ToolState,
    cursor: Option<GridPoint>,
    sticker: &StickerComposer,
) -> CellView {
    let current = canvas.get(x, y).unwrap_or(Pixel::BACKGROUND);
    let Some(cursor) = cursor else {
        return CellView::solid(current);
    };

    match tool.mode {
        DrawMode::Sticker => {
            let k = sticker.half_extent();
            sticker
                .entry_at(x - cursor.x + k, y - cursor.y + k)
                .map_or(CellView::solid(current), |cell| CellView::preview(cell.color))
        }
        DrawMode::Pencil if (x, y) == (cursor.x, cursor.y) => CellView::preview(tool.color),
        DrawMode::Spray if (x, y) == (cursor.x, cursor.y) => CellView::preview(tool.color.blend(current)),
        DrawMode::Pencil | DrawMode::Spray => CellView::solid(current),
    }
}

/// Display of the whole canvas, `[row][col]`.
#[must_use]
pub fn render(
    canvas: &Canvas,
    tool: &ToolState,
    cursor: Option<GridPoint>,
    sticker: &StickerComposer,
) -> Vec<Vec<CellView>> {
    (0_i32..)
        .zip(canvas.rows())
        .map(|(y, row)| (0_i32..).zip(row).map(|(x, _)| cell_view(canvas, x, y, tool, cursor, sticker)).collect())
        .collect()
}
