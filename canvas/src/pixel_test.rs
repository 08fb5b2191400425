use super::*;

// =============================================================
// blend
// =============================================================

#[test]
fn blend_red_and_blue_rounds_half_up() {
    let red = Pixel::new(255, 0, 0);
    let blue = Pixel::new(0, 0, 255);
    assert_eq!(red.blend(blue), Pixel::new(128, 0, 128));
}

#[test]
fn blend_is_commutative() {
    let a = Pixel::new(10, 201, 33);
    let b = Pixel::new(99, 4, 250);
    assert_eq!(a.blend(b), b.blend(a));
}

#[test]
fn blend_with_self_is_identity() {
    let c = Pixel::new(17, 128, 255);
    assert_eq!(c.blend(c), c);
}

#[test]
fn blend_extremes_stay_in_range() {
    assert_eq!(Pixel::BACKGROUND.blend(Pixel::BACKGROUND), Pixel::BACKGROUND);
    assert_eq!(Pixel::BLACK.blend(Pixel::BACKGROUND), Pixel::new(128, 128, 128));
    assert_eq!(Pixel::new(254, 0, 1).blend(Pixel::new(255, 1, 0)), Pixel::new(255, 1, 1));
}

// =============================================================
// background
// =============================================================

#[test]
fn background_is_exact_white() {
    assert!(Pixel::new(255, 255, 255).is_background());
    assert!(!Pixel::new(255, 255, 254).is_background());
    assert!(!Pixel::BLACK.is_background());
}

#[test]
fn default_pixel_is_black() {
    assert_eq!(Pixel::default(), Pixel::BLACK);
}

// =============================================================
// hex
// =============================================================

#[test]
fn to_hex_is_lowercase_and_padded() {
    assert_eq!(Pixel::new(10, 171, 255).to_hex(), "#0aabff");
}

#[test]
fn from_hex_supports_short_and_long_forms() {
    assert_eq!(Pixel::from_hex("#ABC").unwrap(), Pixel::new(170, 187, 204));
    assert_eq!(Pixel::from_hex("  #a1B2c3 ").unwrap(), Pixel::new(161, 178, 195));
    assert_eq!(Pixel::from_hex("ff0000").unwrap(), Pixel::new(255, 0, 0));
}

#[test]
fn from_hex_rejects_invalid_inputs() {
    assert!(Pixel::from_hex("#12").is_err());
    assert!(Pixel::from_hex("#abcd").is_err());
    assert!(Pixel::from_hex("#12GG34").is_err());
    assert!(Pixel::from_hex("#ééé").is_err());
}

// =============================================================
// serde + palette
// =============================================================

#[test]
fn serializes_as_plain_array() {
    let json = serde_json::to_string(&Pixel::new(1, 2, 3)).unwrap();
    assert_eq!(json, "[1,2,3]");
}

#[test]
fn palette_has_sixteen_distinct_colors() {
    for (i, (_, a)) in PALETTE.iter().enumerate() {
        for (j, (_, b)) in PALETTE.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
    assert_eq!(PALETTE[0].1, Pixel::BLACK);
    assert!(PALETTE[1].1.is_background());
}

// =============================================================
// css + hsv
// =============================================================

#[test]
fn to_css_uses_rgb_function() {
    assert_eq!(Pixel::new(255, 0, 128).to_css(), "rgb(255, 0, 128)");
}

#[test]
fn to_hsv_primary_colors() {
    assert_eq!(Pixel::new(255, 0, 0).to_hsv(), (0.0, 100.0, 100.0));
    assert_eq!(Pixel::new(0, 255, 0).to_hsv(), (120.0, 100.0, 100.0));
    assert_eq!(Pixel::new(0, 0, 255).to_hsv(), (240.0, 100.0, 100.0));
}

#[test]
fn to_hsv_greys_have_no_hue_or_saturation() {
    assert_eq!(Pixel::BLACK.to_hsv(), (0.0, 0.0, 0.0));
    assert_eq!(Pixel::BACKGROUND.to_hsv(), (0.0, 0.0, 100.0));
}

#[test]
fn to_hsv_wraps_negative_hue() {
    let (h, _, _) = Pixel::new(255, 0, 128).to_hsv();
    assert!((h - 330.0).abs() < f64::EPSILON);
}

#[test]
fn from_hsv_sector_boundaries() {
    assert_eq!(Pixel::from_hsv(0.0, 100.0, 100.0), Pixel::new(255, 0, 0));
    assert_eq!(Pixel::from_hsv(60.0, 100.0, 100.0), Pixel::new(255, 255, 0));
    assert_eq!(Pixel::from_hsv(180.0, 100.0, 100.0), Pixel::new(0, 255, 255));
    assert_eq!(Pixel::from_hsv(300.0, 100.0, 100.0), Pixel::new(255, 0, 255));
    assert_eq!(Pixel::from_hsv(360.0, 100.0, 100.0), Pixel::new(255, 0, 0));
}

#[test]
fn from_hsv_clamps_out_of_range_inputs() {
    assert_eq!(Pixel::from_hsv(0.0, 250.0, -5.0), Pixel::BLACK);
    assert_eq!(Pixel::from_hsv(0.0, 0.0, 150.0), Pixel::BACKGROUND);
}

#[test]
fn hsv_round_trips_primaries_and_halves() {
    for color in [Pixel::new(255, 0, 0), Pixel::new(0, 128, 128), Pixel::new(128, 0, 128), Pixel::BLACK] {
        let (h, s, v) = color.to_hsv();
        assert_eq!(Pixel::from_hsv(h, s, v), color);
    }
}
