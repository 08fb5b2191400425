use super::*;

// =============================================================
// Selection messages
// =============================================================

#[test]
fn default_has_no_message() {
    let state = StatusState::default();
    assert_eq!(state.message, None);
    assert_eq!(state.tone, StatusTone::Info);
}

#[test]
fn color_selected_formats_rgb() {
    let mut state = StatusState::default();
    state.color_selected(Pixel::new(255, 128, 0));
    assert_eq!(state.message.as_deref(), Some("Color selected: RGB(255, 128, 0)"));
}

#[test]
fn mode_selected_names_the_tool() {
    let mut state = StatusState::default();
    state.mode_selected(DrawMode::Pencil, Pixel::BLACK);
    assert_eq!(state.message.as_deref(), Some("Pencil tool selected with color: RGB(0, 0, 0)"));
    state.mode_selected(DrawMode::Spray, Pixel::new(1, 2, 3));
    assert_eq!(state.message.as_deref(), Some("Spray brush selected with color: RGB(1, 2, 3)"));
    state.mode_selected(DrawMode::Sticker, Pixel::BLACK);
    assert_eq!(state.message.as_deref(), Some("Switched to sticker mode"));
}

#[test]
fn sticker_cleared_message() {
    let mut state = StatusState::default();
    state.sticker_cleared();
    assert_eq!(state.message.as_deref(), Some("Sticker cleared"));
}

// =============================================================
// Commit outcomes
// =============================================================

#[test]
fn commit_success_messages() {
    let mut state = StatusState::default();
    state.commit_finished(&Ok(CommitReceipt { mode: DrawMode::Pencil, pixels_sent: 1 }));
    assert_eq!(state.message.as_deref(), Some("Pixel placed successfully"));
    assert_eq!(state.tone, StatusTone::Success);

    state.commit_finished(&Ok(CommitReceipt { mode: DrawMode::Sticker, pixels_sent: 4 }));
    assert_eq!(state.message.as_deref(), Some("Sticker placed successfully (4 pixels)"));
}

#[test]
fn commit_error_messages() {
    let mut state = StatusState::default();
    state.commit_finished(&Err(CanvasError::OutOfBounds { x: 10, y: 0, width: 10, height: 10 }));
    assert_eq!(state.message.as_deref(), Some("Error: Position out of bounds"));
    assert_eq!(state.tone, StatusTone::Error);
    assert_eq!(state.tone_class(), "status-line--error");

    state.commit_finished(&Err(CanvasError::EmptyResult));
    assert_eq!(state.message.as_deref(), Some("Error: Sticker would be completely out of bounds"));

    state.commit_finished(&Err(CanvasError::Transport("wallet rejected".to_owned())));
    assert_eq!(state.message.as_deref(), Some("Error: Failed to place pixel(s)"));
}
