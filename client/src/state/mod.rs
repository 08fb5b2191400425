//! Reactive state shared through Leptos context.
//!
//! Each struct is wrapped in an `RwSignal` by `App` and read back with
//! `expect_context`. Tool, sticker and cursor state use the `canvas` crate's
//! types directly.

pub mod canvas_view;
pub mod status;
