//! Sticker composer grid.
//!
//! Cells are painted with the selected color; a cell painted background
//! white drops out of the pattern. The grid is inert outside sticker mode:
//! a click there falls through to the enclosing tool section, which enters
//! sticker mode instead of painting a design the mode switch would clear.

#[cfg(test)]
#[path = "sticker_editor_test.rs"]
mod sticker_editor_test;

use leptos::prelude::*;

use canvas::error::CanvasError;
use canvas::sticker::StickerComposer;
use canvas::tool::{DrawMode, ToolState};

use crate::state::status::StatusState;

/// Editable `size × size` grid with a clear button and a usage hint.
#[component]
pub fn StickerEditor() -> impl IntoView {
    let tool = expect_context::<RwSignal<ToolState>>();
    let sticker = expect_context::<RwSignal<StickerComposer>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let paint = move |x: i32, y: i32| {
        let current = tool.get_untracked();
        sticker.maybe_update(|c| match paint_cell(&current, c, x, y) {
            Ok(painted) => painted,
            Err(e) => {
                leptos::logging::warn!("sticker paint rejected: {e}");
                false
            }
        });
    };
    let active = move || tool.with(|t| t.mode == DrawMode::Sticker);

    let on_clear = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        sticker.update(StickerComposer::clear);
        status.update(StatusState::sticker_cleared);
    };

    let rows = move || {
        let composer = sticker.get();
        (0_i32..)
            .zip(composer.cells().to_vec())
            .map(|(y, row)| {
                let cells = (0_i32..)
                    .zip(row)
                    .map(|(x, color)| {
                        view! {
                            <div
                                class="sticker-editor__cell"
                                title="Click to paint with selected color"
                                style=format!("background-color: {}", color.to_css())
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    if tool.with_untracked(|t| t.mode == DrawMode::Sticker) {
                                        ev.stop_propagation();
                                        paint(x, y);
                                    }
                                }
                            ></div>
                        }
                    })
                    .collect_view();
                view! { <div class="sticker-editor__row">{cells}</div> }
            })
            .collect_view()
    };

    let hint = move || {
        if sticker.get().is_empty() {
            "Click pixels above to design your sticker"
        } else {
            "Hover over the canvas below to preview placement"
        }
    };

    view! {
        <div class="sticker-editor" class:sticker-editor--inert=move || !active()>
            <div class="sticker-editor__grid">{rows}</div>
            <button class="sticker-editor__clear" on:click=on_clear>"Clear Sticker"</button>
            <p class="sticker-editor__hint">{hint}</p>
        </div>
    }
}

/// Paint one composer cell with the tool color. Outside sticker mode the
/// composer is left untouched and `Ok(false)` is returned.
fn paint_cell(tool: &ToolState, composer: &mut StickerComposer, x: i32, y: i32) -> Result<bool, CanvasError> {
    if tool.mode != DrawMode::Sticker {
        return Ok(false);
    }
    composer.set_cell(x, y, tool.color)?;
    Ok(true)
}
