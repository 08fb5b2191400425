//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use canvas::grid::GridPoint;
use canvas::sticker::StickerComposer;
use canvas::tool::ToolState;

use crate::net::api::process_config;
use crate::pages::home::HomePage;
use crate::state::{canvas_view::CanvasViewState, status::StatusState};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = process_config();

    // Provide reactive state contexts for all child components.
    let canvas_view = RwSignal::new(CanvasViewState::blank(config.canvas_width, config.canvas_height));
    let tool = RwSignal::new(ToolState::default());
    let sticker = RwSignal::new(StickerComposer::new(config.sticker_size));
    let cursor = RwSignal::new(None::<GridPoint>);
    let status = RwSignal::new(StatusState::default());

    provide_context(canvas_view);
    provide_context(tool);
    provide_context(sticker);
    provide_context(cursor);
    provide_context(status);

    view! {
        <Title text="Place"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
