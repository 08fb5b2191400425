use serde_json::{Value, json};

use super::*;

#[test]
fn change_pixel_body_matches_wire_shape() {
    let msg = OutboundMessage::change_pixel("proc-1", PixelWrite { x: 3, y: 4, color: Pixel::new(255, 0, 0) }).unwrap();
    assert_eq!(msg.process, "proc-1");
    assert_eq!(msg.action(), Some("changePixel"));
    let body: Value = serde_json::from_str(&msg.data).unwrap();
    assert_eq!(body, json!({ "x": 3, "y": 4, "color": [255, 0, 0] }));
}

#[test]
fn change_pixels_body_wraps_list() {
    let pixels = [
        PixelWrite { x: 0, y: 0, color: Pixel::BLACK },
        PixelWrite { x: 1, y: 1, color: Pixel::new(255, 0, 0) },
    ];
    let msg = OutboundMessage::change_pixels("proc-1", &pixels).unwrap();
    assert_eq!(msg.action(), Some("changePixels"));
    let body: Value = serde_json::from_str(&msg.data).unwrap();
    assert_eq!(
        body,
        json!({ "pixels": [
            { "x": 0, "y": 0, "color": [0, 0, 0] },
            { "x": 1, "y": 1, "color": [255, 0, 0] }
        ] })
    );
}

#[test]
fn message_has_single_action_tag() {
    let msg = OutboundMessage::change_pixels("p", &[]).unwrap();
    assert_eq!(msg.tags, vec![Tag { name: "Action".to_owned(), value: "changePixels".to_owned() }]);
}

#[test]
fn action_names_are_wire_strings() {
    assert_eq!(Action::ChangePixel.as_str(), "changePixel");
    assert_eq!(Action::ChangePixels.as_str(), "changePixels");
}
