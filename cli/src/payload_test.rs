use super::*;
use serde_json::json;

fn canvas_of(rows: serde_json::Value) -> Canvas {
    Canvas::from_state(&json!({ "pixels": rows }), 3, 3).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_triple_accepts_spaces_and_negative_coordinates() {
    assert_eq!(parse_triple("-1, 2, #ff0000").unwrap(), (-1, 2, Pixel::new(255, 0, 0)));
}

#[test]
fn parse_triple_rejects_wrong_arity_and_bad_parts() {
    assert!(parse_triple("1,2").is_err());
    assert!(parse_triple("1,2,#fff,extra").is_err());
    assert!(parse_triple("a,2,#fff").is_err());
    assert!(parse_triple("1,2,#ggg").is_err());
}

#[test]
fn parse_cell_and_expectation_share_the_format() {
    assert_eq!(parse_cell("0,2,000").unwrap(), StickerCell { x: 0, y: 2, color: Pixel::BLACK });
    assert_eq!(
        parse_expectation("3,4,#0000ff").unwrap(),
        Expectation { at: GridPoint::new(3, 4), color: Pixel::new(0, 0, 255) }
    );
}

#[test]
fn parse_color_reports_error_text() {
    assert_eq!(parse_color("#00ff00").unwrap(), Pixel::new(0, 255, 0));
    assert!(parse_color("green").unwrap_err().contains("green"));
}

// =============================================================
// Write sets
// =============================================================

#[test]
fn test_pattern_checkpoints_agree_with_pattern() {
    let expected = expectations_for(&test_pattern());
    for checkpoint in test_pattern_checkpoints() {
        assert!(expected.contains(&checkpoint), "{checkpoint:?}");
    }
}

#[test]
fn random_writes_are_reproducible_and_in_bounds() {
    let a = random_writes(50, 7, 10, 4);
    let b = random_writes(50, 7, 10, 4);
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
    assert!(a.iter().all(|w| (0..10).contains(&w.x) && (0..4).contains(&w.y)));
    assert_ne!(a, random_writes(50, 8, 10, 4));
}

#[test]
fn random_writes_on_empty_canvas_is_empty() {
    assert!(random_writes(5, 1, 0, 10).is_empty());
}

#[test]
fn expectations_for_keeps_last_write_per_cell() {
    let writes = [
        PixelWrite { x: 0, y: 0, color: Pixel::new(1, 1, 1) },
        PixelWrite { x: 1, y: 0, color: Pixel::new(2, 2, 2) },
        PixelWrite { x: 0, y: 0, color: Pixel::new(3, 3, 3) },
    ];
    let expectations = expectations_for(&writes);
    assert_eq!(expectations.len(), 2);
    assert_eq!(expectations[0], Expectation { at: GridPoint::new(0, 0), color: Pixel::new(3, 3, 3) });
}

// =============================================================
// Checks + rendering
// =============================================================

#[test]
fn mismatches_empty_when_canvas_matches() {
    let canvas = canvas_of(json!([
        [[0, 0, 0], [255, 255, 255], [0, 0, 0]],
        [[255, 255, 255], [255, 0, 0], [255, 255, 255]],
        [[0, 0, 0], [255, 255, 255], [0, 0, 0]]
    ]));
    assert!(mismatches(&canvas, &test_pattern_checkpoints()).is_empty());
}

#[test]
fn mismatches_describe_wrong_and_outside_cells() {
    let canvas = Canvas::blank(3, 3);
    let expectations = [
        Expectation { at: GridPoint::new(1, 1), color: Pixel::new(255, 0, 0) },
        Expectation { at: GridPoint::new(5, 0), color: Pixel::BLACK },
    ];
    let found = mismatches(&canvas, &expectations);
    assert_eq!(found, vec![
        "(1, 1): expected #ff0000, found #ffffff".to_owned(),
        "(5, 0): outside the canvas".to_owned(),
    ]);
}

#[test]
fn render_grid_prints_rows_of_hex() {
    let canvas = Canvas::blank(2, 2);
    assert_eq!(render_grid(&canvas), "#ffffff #ffffff\n#ffffff #ffffff");
}
