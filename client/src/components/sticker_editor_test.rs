use super::*;
use canvas::pixel::Pixel;

fn tool(mode: DrawMode) -> ToolState {
    ToolState { color: Pixel::BLACK, mode }
}

// =============================================================
// Painting
// =============================================================

#[test]
fn paints_in_sticker_mode() {
    let mut composer = StickerComposer::new(3);
    assert!(paint_cell(&tool(DrawMode::Sticker), &mut composer, 1, 1).unwrap());
    assert_eq!(composer.cells()[1][1], Pixel::BLACK);
    assert!(!composer.is_empty());
}

#[test]
fn pencil_and_spray_leave_the_composer_untouched() {
    for mode in [DrawMode::Pencil, DrawMode::Spray] {
        let mut composer = StickerComposer::new(3);
        assert!(!paint_cell(&tool(mode), &mut composer, 1, 1).unwrap());
        assert!(composer.is_empty());
    }
}

#[test]
fn design_survives_the_switch_into_sticker_mode() {
    let mut current = tool(DrawMode::Pencil);
    let mut composer = StickerComposer::new(3);
    paint_cell(&current, &mut composer, 0, 0).unwrap();

    if current.set_mode(DrawMode::Sticker) {
        composer.clear();
    }
    paint_cell(&current, &mut composer, 2, 2).unwrap();

    assert_eq!(composer.pattern().len(), 1);
    assert_eq!(composer.cells()[2][2], Pixel::BLACK);
}

#[test]
fn out_of_range_cell_is_rejected() {
    let mut composer = StickerComposer::new(3);
    let result = paint_cell(&tool(DrawMode::Sticker), &mut composer, 3, 0);
    assert!(matches!(result, Err(CanvasError::OutOfBounds { .. })));
    assert!(composer.is_empty());
}
