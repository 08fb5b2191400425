//! Fixed-size pixel grid cached from the remote process.
//!
//! The remote state is the source of truth. A [`Canvas`] is a read-only
//! projection of it: each successful fetch builds a fresh one through
//! [`Canvas::from_state`] and the previous one is dropped wholesale.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde_json::Value;

use crate::error::CanvasError;
use crate::pixel::Pixel;

/// A cell coordinate. Signed so that positions off the grid are representable
/// and can be rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Row-major RGB grid, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    rows: Vec<Vec<Pixel>>,
}

impl Canvas {
    /// All-background canvas of the given dimensions.
    #[must_use]
    pub fn blank(width: usize, height: usize) -> Self {
        Self { width, height, rows: vec![vec![Pixel::BACKGROUND; width]; height] }
    }

    /// Normalize a serialized process state into a `width` x `height` grid.
    ///
    /// Only the `pixels` key is read. Missing rows, missing cells and cells
    /// that are not a `[r, g, b]` triple of integers in `0..=255` become
    /// background white; anything beyond the configured size is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] when `pixels` is absent or not an array.
    pub fn from_state(state: &Value, width: usize, height: usize) -> Result<Self, CanvasError> {
        let Some(pixels) = state.get("pixels").and_then(Value::as_array) else {
            return Err(CanvasError::Parse("state has no `pixels` array".to_owned()));
        };

        let rows = (0..height)
            .map(|y| {
                let row = pixels.get(y).and_then(Value::as_array);
                (0..width)
                    .map(|x| row.and_then(|r| r.get(x)).and_then(parse_cell).unwrap_or(Pixel::BACKGROUND))
                    .collect()
            })
            .collect();

        Ok(Self { width, height, rows })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }

    /// Whether `(x, y)` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y, self.width, self.height)
    }

    /// Cell color at `(x, y)`, or `None` off the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        let (Ok(col), Ok(row)) = (usize::try_from(x), usize::try_from(y)) else {
            return None;
        };
        self.rows.get(row)?.get(col).copied()
    }

    /// Reject `(x, y)` with [`CanvasError::OutOfBounds`] if it is not on the grid.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn check_bounds(&self, x: i32, y: i32) -> Result<(), CanvasError> {
        check_bounds(x, y, self.width, self.height)
    }
}

/// `0 <= x < width && 0 <= y < height`, without lossy casts.
#[must_use]
pub fn in_bounds(x: i32, y: i32, width: usize, height: usize) -> bool {
    let fits = |v: i32, limit: usize| usize::try_from(v).is_ok_and(|v| v < limit);
    fits(x, width) && fits(y, height)
}

/// [`in_bounds`] as a `Result`.
///
/// # Errors
///
/// Returns [`CanvasError::OutOfBounds`] carrying the rejected point and the grid size.
pub fn check_bounds(x: i32, y: i32, width: usize, height: usize) -> Result<(), CanvasError> {
    if in_bounds(x, y, width, height) {
        Ok(())
    } else {
        Err(CanvasError::OutOfBounds { x, y, width, height })
    }
}

fn parse_cell(value: &Value) -> Option<Pixel> {
    let channels = value.as_array()?;
    if channels.len() != 3 {
        return None;
    }
    Some(Pixel([parse_channel(&channels[0])?, parse_channel(&channels[1])?, parse_channel(&channels[2])?]))
}

fn parse_channel(value: &Value) -> Option<u8> {
    match value.as_u64().map(u8::try_from) {
        Some(Ok(channel)) => Some(channel),
        _ => None,
    }
}
