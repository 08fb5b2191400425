//! Wire format of messages sent to the remote process.
//!
//! A write is a message with an `Action` tag and a JSON `data` body:
//!
//! | Action | Body |
//! |--------|------|
//! | `changePixel` | `{"x": 3, "y": 4, "color": [255, 0, 0]}` |
//! | `changePixels` | `{"pixels": [{"x": 3, "y": 4, "color": [255, 0, 0]}, ...]}` |
//!
//! Coordinates are 0-based on the wire, matching the local grid.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::pixel::Pixel;

/// One absolute pixel assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelWrite {
    pub x: i32,
    pub y: i32,
    pub color: Pixel,
}

/// Value of the `Action` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ChangePixel,
    ChangePixels,
}

impl Action {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChangePixel => "changePixel",
            Self::ChangePixels => "changePixels",
        }
    }
}

/// A message tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// A write ready to be signed and submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub process: String,
    pub tags: Vec<Tag>,
    pub data: String,
}

#[derive(Serialize)]
struct ChangePixelsBody<'a> {
    pixels: &'a [PixelWrite],
}

impl OutboundMessage {
    /// `changePixel` for a single write.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] if the body cannot be serialized.
    pub fn change_pixel(process: &str, write: PixelWrite) -> Result<Self, CanvasError> {
        Self::new(process, Action::ChangePixel, &write)
    }

    /// `changePixels` for a batch.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] if the body cannot be serialized.
    pub fn change_pixels(process: &str, pixels: &[PixelWrite]) -> Result<Self, CanvasError> {
        Self::new(process, Action::ChangePixels, &ChangePixelsBody { pixels })
    }

    fn new(process: &str, action: Action, body: &impl Serialize) -> Result<Self, CanvasError> {
        let data = serde_json::to_string(body).map_err(|e| CanvasError::Parse(e.to_string()))?;
        Ok(Self {
            process: process.to_owned(),
            tags: vec![Tag { name: "Action".to_owned(), value: action.as_str().to_owned() }],
            data,
        })
    }

    /// Value of the `Action` tag, if present.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.tags.iter().find(|t| t.name == "Action").map(|t| t.value.as_str())
    }
}
