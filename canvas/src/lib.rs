//! Core model and remote-state accessor for the collaborative pixel canvas.
//!
//! The canonical canvas lives in a remote process. This crate holds
//! everything the clients share: the pixel grid they cache, the tools and
//! sticker composer that produce writes, the per-frame preview derivation, the
//! wire messages, and the [`accessor::CanvasAccessor`] that polls state and
//! submits writes through pluggable transports. It has no browser or runtime
//! dependency; the `client` crate runs it on the browser event loop and the
//! `cli` crate on a tokio task.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`accessor`] | Cached canvas, fetch with in-flight guard, validated writes |
//! | [`poll`] | Cancellable periodic refresh |
//! | [`grid`] | `Canvas` grid, `GridPoint`, bounds checks, state normalization |
//! | [`pixel`] | `Pixel`, spray blend, hex and HSV conversion, palette |
//! | [`sticker`] | Sticker composer, pattern derivation and placement |
//! | [`tool`] | Drawing mode and selected color |
//! | [`preview`] | What each cell displays under the cursor |
//! | [`wire`] | Outbound message format |
//! | [`config`] | `ProcessConfig` |
//! | [`error`] | `CanvasError` |
//! | [`consts`] | Shared constants (sizes, intervals, preview opacity) |

pub mod accessor;
pub mod config;
pub mod consts;
pub mod error;
pub mod grid;
pub mod pixel;
pub mod poll;
pub mod preview;
pub mod sticker;
pub mod tool;
pub mod wire;
