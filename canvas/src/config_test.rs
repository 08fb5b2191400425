use super::*;

// =============================================================
// defaults
// =============================================================

#[test]
fn defaults_match_constants() {
    let config = ProcessConfig::default();
    assert_eq!(config.node_url, DEFAULT_NODE_URL);
    assert_eq!(config.process_id, DEFAULT_PROCESS_ID);
    assert_eq!(config.state_key, "state");
    assert_eq!(config.poll_interval_ms, 5_000);
    assert_eq!(config.settle_delay_ms, 1_000);
    assert_eq!((config.canvas_width, config.canvas_height), (10, 10));
    assert_eq!(config.sticker_size, 3);
    assert!(config.validate().is_ok());
}

// =============================================================
// urls
// =============================================================

#[test]
fn state_url_follows_process_serialize_path() {
    let config = ProcessConfig {
        node_url: "https://node.example/".to_owned(),
        process_id: "abc".to_owned(),
        ..ProcessConfig::default()
    };
    assert_eq!(config.state_url(), "https://node.example/abc~process@1.0/now/state/serialize~json@1.0");
    assert_eq!(config.health_url(), "https://node.example/~meta@1.0/info");
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_empty_process() {
    let config = ProcessConfig { process_id: "  ".to_owned(), ..ProcessConfig::default() };
    assert!(matches!(config.validate(), Err(CanvasError::Parse(_))));
}

#[test]
fn validate_rejects_zero_dimensions() {
    let config = ProcessConfig { canvas_width: 0, ..ProcessConfig::default() };
    assert!(config.validate().is_err());
    let config = ProcessConfig { sticker_size: 0, ..ProcessConfig::default() };
    assert!(config.validate().is_err());
}

// =============================================================
// from_lookup
// =============================================================

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn from_lookup_empty_yields_defaults() {
    let config = ProcessConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, ProcessConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let config = ProcessConfig::from_lookup(lookup_from(&[
        ("PLACE_NODE_URL", "http://localhost:8734/"),
        ("PLACE_PROCESS_ID", " pid-1 "),
        ("PLACE_CANVAS_WIDTH", "16"),
        ("PLACE_POLL_INTERVAL_MS", "250"),
    ]))
    .unwrap();
    assert_eq!(config.node_url, "http://localhost:8734");
    assert_eq!(config.process_id, "pid-1");
    assert_eq!(config.canvas_width, 16);
    assert_eq!(config.canvas_height, 10);
    assert_eq!(config.poll_interval_ms, 250);
}

#[test]
fn from_lookup_blank_and_malformed_fall_back() {
    let config = ProcessConfig::from_lookup(lookup_from(&[
        ("PLACE_STATE_KEY", "   "),
        ("PLACE_STICKER_SIZE", "big"),
    ]))
    .unwrap();
    assert_eq!(config.state_key, "state");
    assert_eq!(config.sticker_size, 3);
}

#[test]
fn from_lookup_rejects_zero_dimension() {
    let result = ProcessConfig::from_lookup(lookup_from(&[("PLACE_CANVAS_HEIGHT", "0")]));
    assert!(matches!(result, Err(CanvasError::Parse(_))));
}

// =============================================================
// parse_or
// =============================================================

#[test]
fn parse_or_missing_returns_default() {
    let val: usize = parse_or(None, 42);
    assert_eq!(val, 42);
}

#[test]
fn parse_or_present_valid() {
    let val: usize = parse_or(Some(" 25 ".to_owned()), 0);
    assert_eq!(val, 25);
}

#[test]
fn parse_or_present_invalid_returns_default() {
    let val: u64 = parse_or(Some("wide".to_owned()), 7);
    assert_eq!(val, 7);
}

#[test]
fn from_env_reads_place_variables() {
    unsafe { std::env::set_var("PLACE_SETTLE_DELAY_MS", "5") };
    let config = ProcessConfig::from_env().unwrap();
    unsafe { std::env::remove_var("PLACE_SETTLE_DELAY_MS") };
    assert_eq!(config.settle_delay_ms, 5);
}
