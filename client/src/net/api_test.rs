use super::*;
use canvas::pixel::Pixel;
use canvas::wire::PixelWrite;

// =============================================================
// Config
// =============================================================

#[test]
fn config_without_overrides_is_default() {
    assert_eq!(config_from_overrides(&[("PLACE_NODE_URL", None)]), ProcessConfig::default());
}

#[test]
fn config_applies_overrides() {
    let config = config_from_overrides(&[
        ("PLACE_PROCESS_ID", Some("local-pid")),
        ("PLACE_CANVAS_WIDTH", Some("32")),
    ]);
    assert_eq!(config.process_id, "local-pid");
    assert_eq!(config.canvas_width, 32);
}

#[test]
fn config_with_invalid_override_falls_back_to_default() {
    let config = config_from_overrides(&[("PLACE_CANVAS_WIDTH", Some("0")), ("PLACE_PROCESS_ID", Some("x"))]);
    assert_eq!(config, ProcessConfig::default());
}

// =============================================================
// aoconnect endpoints
// =============================================================

#[test]
fn endpoints_without_overrides_match_the_legacy_network() {
    let endpoints = endpoints_from_overrides(&[("PLACE_MU_URL", None)]);
    assert_eq!(endpoints, AoEndpoints::default());
    assert_eq!(endpoints.cu_url, DEFAULT_CU_URL);
    assert_eq!(endpoints.gateway_url, DEFAULT_GATEWAY_URL);
    assert_eq!(endpoints.mode, "legacy");
}

#[test]
fn endpoints_apply_trimmed_overrides_and_ignore_blanks() {
    let endpoints = endpoints_from_overrides(&[
        ("PLACE_MU_URL", Some(" https://mu.local/ ")),
        ("PLACE_CU_URL", Some("   ")),
        ("PLACE_AO_MODE", Some("mainnet")),
    ]);
    assert_eq!(endpoints.mu_url, "https://mu.local");
    assert_eq!(endpoints.cu_url, DEFAULT_CU_URL);
    assert_eq!(endpoints.gateway_url, DEFAULT_GATEWAY_URL);
    assert_eq!(endpoints.mode, "mainnet");
}

#[test]
fn connect_options_carry_every_endpoint_and_the_mode() {
    let options = AoEndpoints::default().connect_options();
    assert_eq!(options["MU_URL"], DEFAULT_MU_URL);
    assert_eq!(options["CU_URL"], DEFAULT_CU_URL);
    assert_eq!(options["GATEWAY_URL"], DEFAULT_GATEWAY_URL);
    assert_eq!(options["MODE"], "legacy");
}

// =============================================================
// Messages
// =============================================================

#[test]
fn state_request_failed_message_formats_status() {
    assert_eq!(state_request_failed_message(502), "state request failed: 502");
}

#[test]
fn wallet_missing_message_names_the_global() {
    assert!(wallet_missing_message().contains("window.arweaveWallet"));
}

// =============================================================
// Host fallbacks
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn reader_without_browser_reports_transport_error() {
    let result = futures::executor::block_on(BrowserReader.read_state("https://node.example/state"));
    assert!(matches!(result, Err(CanvasError::Transport(_))));
}

#[cfg(not(feature = "csr"))]
#[test]
fn writer_without_browser_reports_transport_error() {
    let writer = BrowserWriter { endpoints: AoEndpoints::default() };
    let message = OutboundMessage::change_pixel("pid", PixelWrite { x: 0, y: 0, color: Pixel::BLACK }).unwrap();
    let result = futures::executor::block_on(writer.send(&message));
    assert!(matches!(result, Err(CanvasError::Transport(_))));
}

#[test]
fn build_accessor_starts_with_blank_cache() {
    let accessor = build_accessor(ProcessConfig::default()).unwrap();
    assert_eq!(accessor.revision(), 0);
    assert_eq!(accessor.snapshot().width(), 10);
}
