//! Last-action line shown between the painter and the canvas grid.
//!
//! DESIGN
//! ======
//! Every user-visible outcome (color picks, tool switches, commit results)
//! funnels through these helpers so the wording lives in one place.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use canvas::accessor::CommitReceipt;
use canvas::error::CanvasError;
use canvas::pixel::Pixel;
use canvas::tool::DrawMode;

use crate::util::color::rgb_label;

/// Visual treatment of the status line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTone {
    #[default]
    Info,
    Success,
    Error,
}

/// Most recent user-facing message, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: Option<String>,
    pub tone: StatusTone,
}

impl StatusState {
    pub fn set(&mut self, message: impl Into<String>, tone: StatusTone) {
        self.message = Some(message.into());
        self.tone = tone;
    }

    /// `Color selected: RGB(r, g, b)`.
    pub fn color_selected(&mut self, color: Pixel) {
        self.set(format!("Color selected: {}", rgb_label(color)), StatusTone::Info);
    }

    /// Message for clicking a tool section while `color` is selected.
    pub fn mode_selected(&mut self, mode: DrawMode, color: Pixel) {
        let message = match mode {
            DrawMode::Pencil => format!("Pencil tool selected with color: {}", rgb_label(color)),
            DrawMode::Spray => format!("Spray brush selected with color: {}", rgb_label(color)),
            DrawMode::Sticker => "Switched to sticker mode".to_owned(),
        };
        self.set(message, StatusTone::Info);
    }

    pub fn sticker_cleared(&mut self) {
        self.set("Sticker cleared", StatusTone::Info);
    }

    /// Report the outcome of a canvas click.
    pub fn commit_finished(&mut self, result: &Result<CommitReceipt, CanvasError>) {
        match result {
            Ok(receipt) => self.set(receipt.status_message(), StatusTone::Success),
            Err(e) => self.set(e.status_message(), StatusTone::Error),
        }
    }

    /// CSS modifier class for the current tone.
    pub fn tone_class(&self) -> &'static str {
        match self.tone {
            StatusTone::Info => "status-line--info",
            StatusTone::Success => "status-line--success",
            StatusTone::Error => "status-line--error",
        }
    }
}
