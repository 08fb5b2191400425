//! Argument parsing, fixed and generated write sets, and expectation checks.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use canvas::grid::{Canvas, GridPoint};
use canvas::pixel::Pixel;
use canvas::sticker::StickerCell;
use canvas::wire::PixelWrite;

/// One `X,Y,HEX` expectation for `verify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub at: GridPoint,
    pub color: Pixel,
}

/// Parse `X,Y,HEX` into coordinates and a color.
///
/// # Errors
///
/// Returns a message suitable for clap when the triple is malformed.
pub fn parse_triple(raw: &str) -> Result<(i32, i32, Pixel), String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [x, y, hex] = parts.as_slice() else {
        return Err(format!("expected X,Y,HEX, got `{raw}`"));
    };
    let x = x.parse::<i32>().map_err(|e| format!("bad x in `{raw}`: {e}"))?;
    let y = y.parse::<i32>().map_err(|e| format!("bad y in `{raw}`: {e}"))?;
    let color = Pixel::from_hex(hex).map_err(|e| e.to_string())?;
    Ok((x, y, color))
}

/// clap parser for `--cell DX,DY,HEX`.
///
/// # Errors
///
/// See [`parse_triple`].
pub fn parse_cell(raw: &str) -> Result<StickerCell, String> {
    let (x, y, color) = parse_triple(raw)?;
    Ok(StickerCell { x, y, color })
}

/// clap parser for `--expect X,Y,HEX`.
///
/// # Errors
///
/// See [`parse_triple`].
pub fn parse_expectation(raw: &str) -> Result<Expectation, String> {
    let (x, y, color) = parse_triple(raw)?;
    Ok(Expectation { at: GridPoint::new(x, y), color })
}

/// clap parser for `--color HEX`.
///
/// # Errors
///
/// Returns the parse failure as a message.
pub fn parse_color(raw: &str) -> Result<Pixel, String> {
    Pixel::from_hex(raw).map_err(|e| e.to_string())
}

/// 3×3 smoke pattern: red center, black corners.
pub fn test_pattern() -> Vec<PixelWrite> {
    let red = Pixel::new(255, 0, 0);
    vec![
        PixelWrite { x: 1, y: 1, color: red },
        PixelWrite { x: 0, y: 0, color: Pixel::BLACK },
        PixelWrite { x: 2, y: 0, color: Pixel::BLACK },
        PixelWrite { x: 0, y: 2, color: Pixel::BLACK },
        PixelWrite { x: 2, y: 2, color: Pixel::BLACK },
    ]
}

/// Cells checked by `verify` when no `--expect` is given.
pub fn test_pattern_checkpoints() -> Vec<Expectation> {
    vec![
        Expectation { at: GridPoint::new(1, 1), color: Pixel::new(255, 0, 0) },
        Expectation { at: GridPoint::new(0, 0), color: Pixel::BLACK },
        Expectation { at: GridPoint::new(2, 2), color: Pixel::BLACK },
    ]
}

/// `count` in-bounds writes with random colors, reproducible from `seed`.
pub fn random_writes(count: usize, seed: u64, width: usize, height: usize) -> Vec<PixelWrite> {
    let max_x = i32::try_from(width).unwrap_or(i32::MAX);
    let max_y = i32::try_from(height).unwrap_or(i32::MAX);
    if max_x == 0 || max_y == 0 {
        return Vec::new();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| PixelWrite {
            x: rng.random_range(0..max_x),
            y: rng.random_range(0..max_y),
            color: Pixel(rng.random()),
        })
        .collect()
}

/// Final color per cell after applying `writes` in order.
pub fn expectations_for(writes: &[PixelWrite]) -> Vec<Expectation> {
    let mut out: Vec<Expectation> = Vec::new();
    for write in writes {
        let at = GridPoint::new(write.x, write.y);
        match out.iter_mut().find(|e| e.at == at) {
            Some(existing) => existing.color = write.color,
            None => out.push(Expectation { at, color: write.color }),
        }
    }
    out
}

/// Human-readable description of every expectation `canvas` does not meet.
pub fn mismatches(canvas: &Canvas, expectations: &[Expectation]) -> Vec<String> {
    expectations
        .iter()
        .filter_map(|e| match canvas.get(e.at.x, e.at.y) {
            Some(actual) if actual == e.color => None,
            Some(actual) => Some(format!(
                "({}, {}): expected {}, found {}",
                e.at.x,
                e.at.y,
                e.color.to_hex(),
                actual.to_hex()
            )),
            None => Some(format!("({}, {}): outside the canvas", e.at.x, e.at.y)),
        })
        .collect()
}

/// One line per row, cells as space-separated `#rrggbb`.
pub fn render_grid(canvas: &Canvas) -> String {
    canvas
        .rows()
        .iter()
        .map(|row| row.iter().map(|p| p.to_hex()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
