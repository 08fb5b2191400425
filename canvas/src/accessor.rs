//! Canvas state accessor: owns the cached canvas, refreshes it from the
//! remote process and turns user strokes into validated write messages.
//!
//! DESIGN
//! ======
//! Transport is split into a [`ProcessReader`] (state reads + timer) and a
//! [`ProcessWriter`] (signed message submission). The browser and the CLI
//! each provide their own pair; tests use counting fakes. Both traits are
//! `?Send`: everything runs on one event loop and the cache lives in
//! `Cell`/`RefCell`.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail outward. A transport or parse error keeps the stale cache
//! and is logged. Writes return `Result` so the caller can show a status line;
//! bounds and crop failures are raised before the writer is touched.
//!
//! Writes are not queued. Two commits may be in flight at once and their
//! arrival order at the process is not guaranteed.

#[cfg(test)]
#[path = "accessor_test.rs"]
mod accessor_test;

use std::cell::{Cell, RefCell};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use crate::config::ProcessConfig;
use crate::error::CanvasError;
use crate::grid::{Canvas, GridPoint, check_bounds};
use crate::pixel::Pixel;
use crate::poll::PollHandle;
use crate::sticker::{StickerCell, StickerComposer, place_pattern};
use crate::tool::{DrawMode, ToolState};
use crate::wire::{OutboundMessage, PixelWrite};

/// Read side of the remote process, plus the timer used between reads.
#[async_trait(?Send)]
pub trait ProcessReader {
    /// GET `url` and decode the body as JSON.
    async fn read_state(&self, url: &str) -> Result<Value, CanvasError>;

    /// Suspend for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Write side of the remote process.
#[async_trait(?Send)]
pub trait ProcessWriter {
    /// Sign and submit `message`; resolves with the message id once the
    /// process acknowledges receipt (not once the write is readable).
    async fn send(&self, message: &OutboundMessage) -> Result<String, CanvasError>;
}

/// Result of one [`CanvasAccessor::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The cache was replaced; carries the new revision.
    Updated(u64),
    /// Another fetch was outstanding; nothing was requested.
    Skipped,
    /// The poller was cancelled while the read was in flight; result dropped.
    Discarded,
    /// Read or parse failed; the stale cache was kept.
    Failed,
}

/// What a successful click wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    pub mode: DrawMode,
    pub pixels_sent: usize,
}

impl CommitReceipt {
    /// Short status line shown to the user.
    #[must_use]
    pub fn status_message(&self) -> String {
        match self.mode {
            DrawMode::Sticker => format!("Sticker placed successfully ({} pixels)", self.pixels_sent),
            DrawMode::Pencil | DrawMode::Spray => "Pixel placed successfully".to_owned(),
        }
    }
}

/// Called with the new canvas and its revision after every committed fetch.
pub type RefreshListener = Box<dyn Fn(&Canvas, u64)>;

pub struct CanvasAccessor<R, W> {
    config: ProcessConfig,
    reader: R,
    writer: W,
    cache: RefCell<Canvas>,
    revision: Cell<u64>,
    in_flight: Cell<bool>,
    listener: RefCell<Option<RefreshListener>>,
}

/// Clears the in-flight flag when the fetch completes or its future is dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<R: ProcessReader, W: ProcessWriter> CanvasAccessor<R, W> {
    /// Build an accessor with a blank cache of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] if `config` does not validate.
    pub fn new(config: ProcessConfig, reader: R, writer: W) -> Result<Self, CanvasError> {
        config.validate()?;
        let cache = Canvas::blank(config.canvas_width, config.canvas_height);
        Ok(Self {
            config,
            reader,
            writer,
            cache: RefCell::new(cache),
            revision: Cell::new(0),
            in_flight: Cell::new(false),
            listener: RefCell::new(None),
        })
    }

    /// Register the callback invoked after each committed fetch, replacing any previous one.
    pub fn set_listener(&self, listener: impl Fn(&Canvas, u64) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    #[must_use]
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    pub(crate) fn reader(&self) -> &R {
        &self.reader
    }

    /// The write transport, for callers that inspect what was sent.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Copy of the cached canvas.
    #[must_use]
    pub fn snapshot(&self) -> Canvas {
        self.cache.borrow().clone()
    }

    /// Number of committed fetches so far. `0` means the cache is still the blank placeholder.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.in_flight.get()
    }

    /// Refresh the cache from the remote process.
    ///
    /// A call made while another fetch is outstanding returns
    /// [`FetchOutcome::Skipped`] without any I/O. Failures are logged and the
    /// stale cache is kept.
    pub async fn fetch(&self) -> FetchOutcome {
        self.fetch_gated(None).await
    }

    /// [`CanvasAccessor::fetch`], dropping the result if `gate` was cancelled
    /// while the read was in flight.
    pub(crate) async fn fetch_gated(&self, gate: Option<&PollHandle>) -> FetchOutcome {
        if self.in_flight.get() {
            debug!("fetch skipped: another fetch is in flight");
            return FetchOutcome::Skipped;
        }
        self.in_flight.set(true);
        let guard = InFlight(&self.in_flight);

        let url = self.config.state_url();
        let result = self.reader.read_state(&url).await;
        drop(guard);

        let canvas = match result
            .and_then(|state| Canvas::from_state(&state, self.config.canvas_width, self.config.canvas_height))
        {
            Ok(canvas) => canvas,
            Err(e) => {
                warn!("canvas fetch failed, keeping cached state: {e}");
                return FetchOutcome::Failed;
            }
        };

        if gate.is_some_and(|handle| !handle.is_alive()) {
            debug!("fetch result dropped: poller cancelled");
            return FetchOutcome::Discarded;
        }

        let revision = self.revision.get() + 1;
        *self.cache.borrow_mut() = canvas;
        self.revision.set(revision);
        debug!("canvas refreshed to revision {revision}");

        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&self.cache.borrow(), revision);
        }
        FetchOutcome::Updated(revision)
    }

    /// Send one `changePixel` write.
    ///
    /// # Errors
    ///
    /// [`CanvasError::OutOfBounds`] without any remote call, or the writer's error.
    pub async fn place_pixel(&self, x: i32, y: i32, color: Pixel) -> Result<String, CanvasError> {
        check_bounds(x, y, self.config.canvas_width, self.config.canvas_height)?;
        let message = OutboundMessage::change_pixel(&self.config.process_id, PixelWrite { x, y, color })?;
        debug!("sending changePixel at ({x}, {y}) color {}", color.to_hex());
        self.writer.send(&message).await
    }

    /// Center `pattern` on `(origin_x, origin_y)`, crop it to the canvas and
    /// send the survivors as one `changePixels` write.
    ///
    /// Returns the number of pixels sent.
    ///
    /// # Errors
    ///
    /// [`CanvasError::EmptyResult`] without any remote call when nothing
    /// survives the crop, or the writer's error.
    pub async fn place_sticker_pattern(
        &self,
        origin_x: i32,
        origin_y: i32,
        pattern: &[StickerCell],
        half_extent: i32,
    ) -> Result<usize, CanvasError> {
        let writes = place_pattern(
            GridPoint::new(origin_x, origin_y),
            pattern,
            half_extent,
            self.config.canvas_width,
            self.config.canvas_height,
        )?;
        let message = OutboundMessage::change_pixels(&self.config.process_id, &writes)?;
        debug!("sending changePixels with {} of {} sticker pixels", writes.len(), pattern.len());
        self.writer.send(&message).await?;
        Ok(writes.len())
    }

    /// Blend `color` with the cached cell at `(x, y)` and write the result.
    ///
    /// # Errors
    ///
    /// Same as [`CanvasAccessor::place_pixel`].
    pub async fn commit_spray(&self, x: i32, y: i32, color: Pixel) -> Result<String, CanvasError> {
        check_bounds(x, y, self.config.canvas_width, self.config.canvas_height)?;
        let current = self.cache.borrow().get(x, y).unwrap_or(Pixel::BACKGROUND);
        self.place_pixel(x, y, color.blend(current)).await
    }

    /// Apply one click at `at` with the active tool, then run the post-write refresh.
    ///
    /// # Errors
    ///
    /// Whatever the underlying write returns. No refresh runs on failure and
    /// nothing is retried.
    pub async fn commit(
        &self,
        tool: &ToolState,
        at: GridPoint,
        sticker: &StickerComposer,
    ) -> Result<CommitReceipt, CanvasError> {
        let pixels_sent = match tool.mode {
            DrawMode::Pencil => {
                self.place_pixel(at.x, at.y, tool.color).await?;
                1
            }
            DrawMode::Spray => {
                self.commit_spray(at.x, at.y, tool.color).await?;
                1
            }
            DrawMode::Sticker => {
                self.place_sticker_pattern(at.x, at.y, sticker.pattern(), sticker.half_extent())
                    .await?
            }
        };
        self.refresh_after_write().await;
        Ok(CommitReceipt { mode: tool.mode, pixels_sent })
    }

    /// Wait for the process to settle, then fetch once outside the poll cadence.
    pub async fn refresh_after_write(&self) -> FetchOutcome {
        self.reader.sleep(Duration::from_millis(self.config.settle_delay_ms)).await;
        self.fetch().await
    }
}
