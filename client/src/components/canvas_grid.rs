//! The shared canvas, rendered as a grid of cells with the tool preview
//! overlaid under the cursor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Display comes from `canvas::preview::cell_view`; this component only maps
//! pointer events to the cursor signal and forwards clicks to the page,
//! which owns the accessor and performs the commit.
//!
//! Cell elements are built once per canvas size. Cursor, tool, sticker and
//! refresh changes only restyle them, so the element under the pointer stays
//! attached between `mousedown` and `mouseup` and the click is delivered.

#[cfg(test)]
#[path = "canvas_grid_test.rs"]
mod canvas_grid_test;

use leptos::prelude::*;

use canvas::grid::GridPoint;
use canvas::preview::{CellView, cell_view};
use canvas::sticker::StickerComposer;
use canvas::tool::ToolState;

use crate::state::canvas_view::CanvasViewState;

/// Canvas grid. `on_commit` receives the clicked cell.
#[component]
pub fn CanvasGrid(on_commit: Callback<GridPoint>) -> impl IntoView {
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let tool = expect_context::<RwSignal<ToolState>>();
    let sticker = expect_context::<RwSignal<StickerComposer>>();
    let cursor = expect_context::<RwSignal<Option<GridPoint>>>();

    let size = Memo::new(move |_| canvas_view.with(|v| (v.canvas.width(), v.canvas.height())));

    let rows = move || {
        let (width, height) = size.get();
        grid_points(width, height)
            .into_iter()
            .map(|row| {
                let row_view = row
                    .into_iter()
                    .map(|at| {
                        let display = Memo::new(move |_| {
                            canvas_view.with(|v| {
                                tool.with(|t| sticker.with(|s| cell_view(&v.canvas, at.x, at.y, t, cursor.get(), s)))
                            })
                        });
                        view! {
                            <div
                                class="canvas-grid__cell"
                                class:canvas-grid__cell--preview=move || display.get().is_preview()
                                style=move || cell_style(display.get())
                                on:mouseenter=move |_| cursor.maybe_update(|c| move_cursor(c, Some(at)))
                                on:click=move |_| on_commit.run(at)
                            ></div>
                        }
                    })
                    .collect_view();
                view! { <div class="canvas-grid__row">{row_view}</div> }
            })
            .collect_view()
    };

    view! {
        <div
            class="canvas-grid"
            class:canvas-grid--loading=move || canvas_view.with(|v| v.loading)
            on:mouseleave=move |_| cursor.maybe_update(|c| move_cursor(c, None))
        >
            {rows}
        </div>
    }
}

/// Cell coordinates of a `width × height` canvas, `[row][col]`.
fn grid_points(width: usize, height: usize) -> Vec<Vec<GridPoint>> {
    (0_i32..)
        .take(height)
        .map(|y| (0_i32..).take(width).map(|x| GridPoint::new(x, y)).collect())
        .collect()
}

/// Point the cursor at `at`. Returns whether it moved, so hovering the
/// current cell again does not notify subscribers.
fn move_cursor(cursor: &mut Option<GridPoint>, at: Option<GridPoint>) -> bool {
    if *cursor == at {
        return false;
    }
    *cursor = at;
    true
}

fn cell_style(cell: CellView) -> String {
    format!("background-color: {}; opacity: {}", cell.color.to_css(), cell.opacity)
}
