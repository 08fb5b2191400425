//! Home page: painter, status line and the shared canvas.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount it builds the browser accessor, forwards
//! refresh notifications into `CanvasViewState`, and starts the poll loop.
//! Leaving the page cancels the loop; a read already in flight is discarded.

use std::rc::Rc;

use leptos::prelude::*;

use canvas::grid::GridPoint;
use canvas::sticker::StickerComposer;
use canvas::tool::ToolState;

use crate::components::canvas_grid::CanvasGrid;
use crate::components::painter::Painter;
use crate::components::status_bar::StatusBar;
use crate::net::api::BrowserAccessor;
use crate::state::canvas_view::CanvasViewState;
use crate::state::status::{StatusState, StatusTone};

/// Home page with the collaborative canvas.
#[component]
pub fn HomePage() -> impl IntoView {
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let tool = expect_context::<RwSignal<ToolState>>();
    let sticker = expect_context::<RwSignal<StickerComposer>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let accessor = StoredValue::new_local(None::<Rc<BrowserAccessor>>);

    #[cfg(feature = "csr")]
    start_polling(accessor, canvas_view, status);
    #[cfg(not(feature = "csr"))]
    let _ = canvas_view;

    let on_commit = Callback::new(move |at: GridPoint| {
        let Some(acc) = accessor.get_value() else {
            status.update(|s| s.set("Canvas is still connecting", StatusTone::Error));
            return;
        };
        let tool_state = tool.get_untracked();
        let composer = sticker.get_untracked();
        leptos::task::spawn_local(async move {
            let result = acc.commit(&tool_state, at, &composer).await;
            if let Err(e) = &result {
                leptos::logging::warn!("commit at ({}, {}) failed: {e}", at.x, at.y);
            }
            status.update(|s| s.commit_finished(&result));
        });
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Place"</h1>
                <p>"Click a color and then click on the canvas to place pixels"</p>
            </header>
            <Painter/>
            <StatusBar/>
            <CanvasGrid on_commit=on_commit/>
        </div>
    }
}

#[cfg(feature = "csr")]
fn start_polling(
    accessor: StoredValue<Option<Rc<BrowserAccessor>>, LocalStorage>,
    canvas_view: RwSignal<CanvasViewState>,
    status: RwSignal<StatusState>,
) {
    use canvas::poll::{PollHandle, run_polling};

    use crate::net::api::{build_accessor, process_config};

    let acc = match build_accessor(process_config()) {
        Ok(acc) => Rc::new(acc),
        Err(e) => {
            leptos::logging::warn!("canvas accessor unavailable: {e}");
            status.update(|s| s.set("Error: Canvas configuration is invalid", StatusTone::Error));
            return;
        }
    };
    acc.set_listener(move |canvas, revision| {
        canvas_view.update(|v| {
            v.apply_refresh(canvas, revision);
        });
    });
    accessor.set_value(Some(acc.clone()));

    let poll = PollHandle::new();
    let poll_task = poll.clone();
    leptos::task::spawn_local(async move {
        let ticks = run_polling(&acc, &poll_task).await;
        log::debug!("canvas polling stopped after {ticks} ticks");
    });
    on_cleanup(move || poll.cancel());
}
