//! Shared numeric constants for the canvas crate.

// ── Canvas ──────────────────────────────────────────────────────

/// Default canvas width in cells.
pub const DEFAULT_CANVAS_WIDTH: usize = 10;

/// Default canvas height in cells.
pub const DEFAULT_CANVAS_HEIGHT: usize = 10;

// ── Sticker ─────────────────────────────────────────────────────

/// Default edge length of the square sticker composer grid.
pub const DEFAULT_STICKER_SIZE: usize = 3;

// ── Timing ──────────────────────────────────────────────────────

/// Delay between two polling fetches, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;

/// Delay between a write acknowledgement and the confirming fetch, in milliseconds.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;

// ── Preview ─────────────────────────────────────────────────────

/// Opacity applied to cells showing a tool preview instead of canvas state.
pub const PREVIEW_OPACITY: f64 = 0.8;
