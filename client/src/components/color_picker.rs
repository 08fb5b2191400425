//! Color picker: predefined swatches plus hue/saturation/value sliders.
//!
//! DESIGN
//! ======
//! The selected color lives in `ToolState`; the picker keeps its own HSV
//! triple so dragging saturation down to zero does not lose the hue. Swatch
//! and hex selections resync the triple from the chosen color.

use leptos::prelude::*;

use canvas::pixel::{PALETTE, Pixel};
use canvas::tool::ToolState;

use crate::state::status::StatusState;
use crate::util::color::{contrast_text, parse_hex_input, parse_slider, rgb_label, saturation_gradient, value_gradient};

/// Collapsible color picker bound to the shared tool color.
#[component]
pub fn ColorPicker() -> impl IntoView {
    let tool = expect_context::<RwSignal<ToolState>>();
    let status = expect_context::<RwSignal<StatusState>>();

    let collapsed = RwSignal::new(false);
    let hsv = RwSignal::new(tool.get_untracked().color.to_hsv());

    let select = move |color: Pixel| {
        tool.update(|t| t.color = color);
        status.update(|s| s.color_selected(color));
    };

    let select_swatch = move |color: Pixel| {
        hsv.set(color.to_hsv());
        select(color);
    };

    let on_hue = move |ev: leptos::ev::Event| {
        if let Some(h) = parse_slider(&event_target_value(&ev), 360.0) {
            hsv.update(|v| v.0 = h);
            let (h, s, v) = hsv.get_untracked();
            select(Pixel::from_hsv(h, s, v));
        }
    };
    let on_saturation = move |ev: leptos::ev::Event| {
        if let Some(s) = parse_slider(&event_target_value(&ev), 100.0) {
            hsv.update(|v| v.1 = s);
            let (h, s, v) = hsv.get_untracked();
            select(Pixel::from_hsv(h, s, v));
        }
    };
    let on_value = move |ev: leptos::ev::Event| {
        if let Some(value) = parse_slider(&event_target_value(&ev), 100.0) {
            hsv.update(|v| v.2 = value);
            let (h, s, v) = hsv.get_untracked();
            select(Pixel::from_hsv(h, s, v));
        }
    };
    let on_hex = move |ev: leptos::ev::Event| {
        if let Some(color) = parse_hex_input(&event_target_value(&ev)) {
            select_swatch(color);
        }
    };

    let current = move || tool.get().color;

    view! {
        <div class="color-picker" class:color-picker--collapsed=move || collapsed.get()>
            <button class="color-picker__toggle" on:click=move |_| collapsed.update(|c| *c = !*c)>
                <span
                    class="color-picker__current"
                    style=move || format!("background-color: {}; color: {}", current().to_css(), contrast_text(current()))
                >
                    {move || current().to_hex()}
                </span>
                <span class="color-picker__label">{move || rgb_label(current())}</span>
                <span class="color-picker__chevron">{move || if collapsed.get() { "▸" } else { "▾" }}</span>
            </button>

            <Show when=move || !collapsed.get()>
                <div class="color-picker__palette">
                    {PALETTE
                        .iter()
                        .map(|(name, color)| {
                            let color = *color;
                            view! {
                                <button
                                    class="color-picker__swatch"
                                    class:color-picker__swatch--selected=move || tool.get().color == color
                                    title=*name
                                    style=format!("background-color: {}", color.to_css())
                                    on:click=move |_| select_swatch(color)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>

                <label class="color-picker__slider">
                    <span>"Hue"</span>
                    <input
                        type="range"
                        min="0"
                        max="360"
                        step="1"
                        class="color-picker__range color-picker__range--hue"
                        prop:value=move || hsv.get().0.to_string()
                        on:input=on_hue
                    />
                </label>
                <label class="color-picker__slider">
                    <span>"Saturation"</span>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        step="1"
                        class="color-picker__range"
                        style=move || {
                            let (h, _, v) = hsv.get();
                            format!("background: {}", saturation_gradient(h, v))
                        }
                        prop:value=move || hsv.get().1.to_string()
                        on:input=on_saturation
                    />
                </label>
                <label class="color-picker__slider">
                    <span>"Brightness"</span>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        step="1"
                        class="color-picker__range"
                        style=move || {
                            let (h, s, _) = hsv.get();
                            format!("background: {}", value_gradient(h, s))
                        }
                        prop:value=move || hsv.get().2.to_string()
                        on:input=on_value
                    />
                </label>
                <label class="color-picker__hex">
                    <span>"Hex"</span>
                    <input type="text" maxlength="7" prop:value=move || current().to_hex() on:change=on_hex/>
                </label>
            </Show>
        </div>
    }
}
