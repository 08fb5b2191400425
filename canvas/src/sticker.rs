//! Sticker composer: a small dense grid painted by the user, and the sparse
//! pattern derived from it.
//!
//! The pattern is never edited directly. Every call to
//! [`StickerComposer::set_cell`] rescans the whole grid, so the pattern is
//! always a pure function of the cells.

#[cfg(test)]
#[path = "sticker_test.rs"]
mod sticker_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_STICKER_SIZE;
use crate::error::CanvasError;
use crate::grid::{GridPoint, check_bounds, in_bounds};
use crate::pixel::Pixel;
use crate::wire::PixelWrite;

/// One non-background cell of a sticker, at an offset from the sticker's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerCell {
    pub x: i32,
    pub y: i32,
    pub color: Pixel,
}

/// Square sticker grid plus its derived pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickerComposer {
    size: usize,
    cells: Vec<Vec<Pixel>>,
    pattern: Vec<StickerCell>,
}

impl Default for StickerComposer {
    fn default() -> Self {
        Self::new(DEFAULT_STICKER_SIZE)
    }
}

impl StickerComposer {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![vec![Pixel::BACKGROUND; size]; size], pattern: Vec::new() }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[Vec<Pixel>] {
        &self.cells
    }

    #[must_use]
    pub fn pattern(&self) -> &[StickerCell] {
        &self.pattern
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// `floor(size / 2)`: the offset that centers the sticker on a target cell.
    #[must_use]
    pub fn half_extent(&self) -> i32 {
        half_extent(self.size)
    }

    /// Paint one cell and rebuild the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::OutOfBounds`] if `(x, y)` is outside the sticker grid;
    /// the composer is left unchanged.
    pub fn set_cell(&mut self, x: i32, y: i32, color: Pixel) -> Result<(), CanvasError> {
        check_bounds(x, y, self.size, self.size)?;
        if let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) {
            self.cells[row][col] = color;
        }
        self.pattern = derive_pattern(&self.cells);
        Ok(())
    }

    /// Reset every cell to background and empty the pattern.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(Pixel::BACKGROUND);
        }
        self.pattern.clear();
    }

    /// Pattern entry at sticker offset `(x, y)`, if that cell is painted.
    #[must_use]
    pub fn entry_at(&self, x: i32, y: i32) -> Option<&StickerCell> {
        self.pattern.iter().find(|cell| cell.x == x && cell.y == y)
    }
}

/// Scan a dense grid row by row and keep every non-background cell.
#[must_use]
pub fn derive_pattern(cells: &[Vec<Pixel>]) -> Vec<StickerCell> {
    let mut pattern = Vec::new();
    for (y, row) in (0_i32..).zip(cells) {
        for (x, color) in (0_i32..).zip(row) {
            if !color.is_background() {
                pattern.push(StickerCell { x, y, color: *color });
            }
        }
    }
    pattern
}

/// `floor(size / 2)` as a signed offset.
#[must_use]
pub fn half_extent(size: usize) -> i32 {
    i32::try_from(size / 2).unwrap_or(i32::MAX)
}

/// Map a pattern centered on `origin` to absolute canvas writes.
///
/// Offset `(dx, dy)` lands on `(origin.x + dx - k, origin.y + dy - k)`.
/// Entries that land off a `width` x `height` canvas are dropped silently.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyResult`] if nothing survives the crop,
/// including the case of an empty pattern.
pub fn place_pattern(
    origin: GridPoint,
    pattern: &[StickerCell],
    half_extent: i32,
    width: usize,
    height: usize,
) -> Result<Vec<PixelWrite>, CanvasError> {
    let writes: Vec<PixelWrite> = pattern
        .iter()
        .map(|cell| PixelWrite {
            x: origin.x + cell.x - half_extent,
            y: origin.y + cell.y - half_extent,
            color: cell.color,
        })
        .filter(|write| in_bounds(write.x, write.y, width, height))
        .collect();

    if writes.is_empty() {
        return Err(CanvasError::EmptyResult);
    }
    Ok(writes)
}
