//! Color formatting and input normalization for the picker and status line.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use canvas::pixel::Pixel;

/// `RGB(r, g, b)`, the form used in status messages.
pub fn rgb_label(color: Pixel) -> String {
    format!("RGB({}, {}, {})", color.r(), color.g(), color.b())
}

/// Parse a hex field typed by the user. Accepts `#RGB`/`#RRGGBB` with or
/// without the `#`; anything else yields `None` so the field can be ignored.
pub fn parse_hex_input(raw: &str) -> Option<Pixel> {
    match Pixel::from_hex(raw) {
        Ok(color) => Some(color),
        Err(_) => None,
    }
}

/// Parse a range input's value and clamp it to `[0, max]`.
pub fn parse_slider(raw: &str, max: f64) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v.clamp(0.0, max)),
        _ => None,
    }
}

/// Black or white, whichever reads better on top of `background`.
pub fn contrast_text(background: Pixel) -> &'static str {
    let luma = 299 * u32::from(background.r()) + 587 * u32::from(background.g()) + 114 * u32::from(background.b());
    if luma >= 128_000 { "#000000" } else { "#ffffff" }
}

/// CSS gradient for the saturation slider at the given hue and value.
pub fn saturation_gradient(hue: f64, value: f64) -> String {
    let from = Pixel::from_hsv(hue, 0.0, value);
    let to = Pixel::from_hsv(hue, 100.0, value);
    format!("linear-gradient(to right, {}, {})", from.to_css(), to.to_css())
}

/// CSS gradient for the value slider at the given hue and saturation.
pub fn value_gradient(hue: f64, saturation: f64) -> String {
    let to = Pixel::from_hsv(hue, saturation, 100.0);
    format!("linear-gradient(to right, rgb(0, 0, 0), {})", to.to_css())
}
