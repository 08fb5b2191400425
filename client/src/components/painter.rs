//! Painter panel: color picker plus one section per drawing tool.
//!
//! Clicking anywhere in a section activates that tool. Entering or leaving
//! sticker mode clears the composer.

use leptos::prelude::*;

use canvas::pixel::Pixel;
use canvas::sticker::StickerComposer;
use canvas::tool::{DrawMode, ToolState};

use crate::components::color_picker::ColorPicker;
use crate::components::sticker_editor::StickerEditor;
use crate::state::status::StatusState;

/// Tool selector with the color picker above it.
#[component]
pub fn Painter() -> impl IntoView {
    let tool = expect_context::<RwSignal<ToolState>>();
    let sticker = expect_context::<RwSignal<StickerComposer>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let select_mode = move |mode: DrawMode| {
        let mut reset = false;
        tool.update(|t| reset = t.set_mode(mode));
        if reset {
            sticker.update(StickerComposer::clear);
        }
        status.update(|s| s.mode_selected(mode, tool.get_untracked().color));
    };

    let sections = DrawMode::ALL
        .into_iter()
        .map(|mode| {
            let is_active = move || tool.get().mode == mode;
            view! {
                <section
                    class="painter__section"
                    class:painter__section--active=is_active
                    on:click=move |_| select_mode(mode)
                >
                    <h3 class="painter__title">{mode.label()}</h3>
                    <div class="painter__content">{tool_content(mode, tool)}</div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="painter">
            <div class="painter__colors">
                <ColorPicker/>
            </div>
            <div class="painter__tools">{sections}</div>
        </div>
    }
}

fn tool_content(mode: DrawMode, tool: RwSignal<ToolState>) -> AnyView {
    match mode {
        DrawMode::Pencil => view! {
            <p class="painter__hint">"Paints one cell with the selected color."</p>
            <ToolSwatch color=Signal::derive(move || tool.get().color)/>
        }
        .into_any(),
        DrawMode::Spray => view! {
            <p class="painter__hint">"Mixes the selected color with the cell underneath."</p>
            <ToolSwatch color=Signal::derive(move || tool.get().color.blend(Pixel::BACKGROUND))/>
        }
        .into_any(),
        DrawMode::Sticker => view! { <StickerEditor/> }.into_any(),
    }
}

#[component]
fn ToolSwatch(color: Signal<Pixel>) -> impl IntoView {
    view! {
        <span class="painter__swatch" style=move || format!("background-color: {}", color.get().to_css())></span>
    }
}
