//! Latest canvas snapshot as seen by the UI.
//!
//! ARCHITECTURE
//! ============
//! The accessor owns the authoritative cache and notifies a refresh listener
//! after every successful fetch. The home page forwards those notifications
//! into this struct so the grid re-renders without touching the accessor.

#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

use canvas::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use canvas::grid::Canvas;

/// Canvas snapshot plus fetch bookkeeping consumed by the grid and status line.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewState {
    pub canvas: Canvas,
    /// Revision of `canvas`; 0 until the first fetch lands.
    pub revision: u64,
    /// True while the initial load is outstanding.
    pub loading: bool,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self::blank(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl CanvasViewState {
    /// All-background canvas awaiting its first fetch.
    pub fn blank(width: usize, height: usize) -> Self {
        Self { canvas: Canvas::blank(width, height), revision: 0, loading: true }
    }

    /// Install a refreshed snapshot. Returns `false` (and changes nothing)
    /// when `revision` is not newer than the one already shown.
    pub fn apply_refresh(&mut self, canvas: &Canvas, revision: u64) -> bool {
        if revision <= self.revision {
            return false;
        }
        self.canvas = canvas.clone();
        self.revision = revision;
        self.loading = false;
        true
    }

    /// Short label for the status line, e.g. `"10×10 · rev 3"`.
    pub fn summary(&self) -> String {
        if self.loading {
            return "Loading canvas...".to_owned();
        }
        format!("{}×{} · rev {}", self.canvas.width(), self.canvas.height(), self.revision)
    }
}
