use super::*;

#[test]
fn rgb_label_matches_status_format() {
    assert_eq!(rgb_label(Pixel::new(255, 0, 128)), "RGB(255, 0, 128)");
}

#[test]
fn parse_hex_input_supports_short_long_and_bare_forms() {
    assert_eq!(parse_hex_input("#ABC"), Some(Pixel::new(170, 187, 204)));
    assert_eq!(parse_hex_input("  #a1B2c3 "), Some(Pixel::new(161, 178, 195)));
    assert_eq!(parse_hex_input("00ff00"), Some(Pixel::new(0, 255, 0)));
}

#[test]
fn parse_hex_input_rejects_invalid_inputs() {
    assert_eq!(parse_hex_input("blue"), None);
    assert_eq!(parse_hex_input("#12"), None);
    assert_eq!(parse_hex_input("#12GG34"), None);
}

#[test]
fn parse_slider_clamps_and_rejects_garbage() {
    assert_eq!(parse_slider("42.5", 100.0), Some(42.5));
    assert_eq!(parse_slider("400", 360.0), Some(360.0));
    assert_eq!(parse_slider("-3", 100.0), Some(0.0));
    assert_eq!(parse_slider("abc", 100.0), None);
    assert_eq!(parse_slider("NaN", 100.0), None);
}

#[test]
fn contrast_text_picks_readable_color() {
    assert_eq!(contrast_text(Pixel::BACKGROUND), "#000000");
    assert_eq!(contrast_text(Pixel::new(255, 255, 0)), "#000000");
    assert_eq!(contrast_text(Pixel::BLACK), "#ffffff");
    assert_eq!(contrast_text(Pixel::new(0, 0, 128)), "#ffffff");
}

#[test]
fn gradients_span_the_axis() {
    assert_eq!(saturation_gradient(0.0, 100.0), "linear-gradient(to right, rgb(255, 255, 255), rgb(255, 0, 0))");
    assert_eq!(value_gradient(120.0, 100.0), "linear-gradient(to right, rgb(0, 0, 0), rgb(0, 255, 0))");
}
