//! Status line showing the last action and the canvas revision.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;
use crate::state::status::StatusState;

/// One-line status readout between the painter and the grid.
#[component]
pub fn StatusBar() -> impl IntoView {
    let status = expect_context::<RwSignal<StatusState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let message = move || status.get().message.unwrap_or_default();
    let tone_class = move || format!("status-line {}", status.get().tone_class());

    view! {
        <div class=tone_class role="status">
            <span class="status-line__message">{message}</span>
            <span class="status-line__canvas">{move || canvas_view.get().summary()}</span>
        </div>
    }
}
