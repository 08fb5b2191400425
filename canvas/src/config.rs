//! Remote process configuration.
//!
//! DESIGN
//! ======
//! Node and process identifiers are passed to the accessor at construction
//! instead of living in module-level constants, so the browser build, the CLI
//! and tests can each point at a different process.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_STICKER_SIZE,
};
use crate::error::CanvasError;

pub const DEFAULT_NODE_URL: &str = "https://hb.randao.net";
pub const DEFAULT_PROCESS_ID: &str = "CHPbivFn3bxhCi4XXjYddhuJlRZNHfh0txB6_WVGlEo";
pub const DEFAULT_STATE_KEY: &str = "state";

/// Where the canvas lives and how the client talks to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    /// Base URL of the node serving state reads, without trailing slash.
    pub node_url: String,
    pub process_id: String,
    /// Key under which the process exposes its serialized state.
    pub state_key: String,
    pub poll_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub sticker_size: usize,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_owned(),
            process_id: DEFAULT_PROCESS_ID.to_owned(),
            state_key: DEFAULT_STATE_KEY.to_owned(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            sticker_size: DEFAULT_STICKER_SIZE,
        }
    }
}

impl ProcessConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// - `PLACE_NODE_URL`, `PLACE_PROCESS_ID`, `PLACE_STATE_KEY`
    /// - `PLACE_POLL_INTERVAL_MS`, `PLACE_SETTLE_DELAY_MS`
    /// - `PLACE_CANVAS_WIDTH`, `PLACE_CANVAS_HEIGHT`, `PLACE_STICKER_SIZE`
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] if the resulting config fails [`ProcessConfig::validate`].
    pub fn from_env() -> Result<Self, CanvasError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup using the same `PLACE_*`
    /// keys and fallback rules as [`ProcessConfig::from_env`]. The browser
    /// build feeds it compile-time `option_env!` values.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] if the resulting config fails [`ProcessConfig::validate`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CanvasError> {
        let defaults = Self::default();
        let string = |key: &str, default: &str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
            _ => default.to_owned(),
        };
        let config = Self {
            node_url: string("PLACE_NODE_URL", &defaults.node_url).trim_end_matches('/').to_owned(),
            process_id: string("PLACE_PROCESS_ID", &defaults.process_id),
            state_key: string("PLACE_STATE_KEY", &defaults.state_key),
            poll_interval_ms: parse_or(lookup("PLACE_POLL_INTERVAL_MS"), defaults.poll_interval_ms),
            settle_delay_ms: parse_or(lookup("PLACE_SETTLE_DELAY_MS"), defaults.settle_delay_ms),
            canvas_width: parse_or(lookup("PLACE_CANVAS_WIDTH"), defaults.canvas_width),
            canvas_height: parse_or(lookup("PLACE_CANVAS_HEIGHT"), defaults.canvas_height),
            sticker_size: parse_or(lookup("PLACE_STICKER_SIZE"), defaults.sticker_size),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot address a canvas.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Parse`] naming the first offending field.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let fail = |field: &str| Err(CanvasError::Parse(format!("invalid config: {field}")));
        if self.node_url.trim().is_empty() {
            return fail("node_url is empty");
        }
        if self.process_id.trim().is_empty() {
            return fail("process_id is empty");
        }
        if self.state_key.trim().is_empty() {
            return fail("state_key is empty");
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return fail("canvas dimensions must be non-zero");
        }
        if i32::try_from(self.canvas_width).is_err() || i32::try_from(self.canvas_height).is_err() {
            return fail("canvas dimensions exceed i32");
        }
        if self.sticker_size == 0 {
            return fail("sticker_size must be non-zero");
        }
        Ok(())
    }

    /// Read endpoint for the serialized process state.
    #[must_use]
    pub fn state_url(&self) -> String {
        format!(
            "{}/{}~process@1.0/now/{}/serialize~json@1.0",
            self.node_url.trim_end_matches('/'),
            self.process_id,
            self.state_key
        )
    }

    /// Node metadata endpoint used as a health check.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/~meta@1.0/info", self.node_url.trim_end_matches('/'))
    }
}

/// Parse a trimmed value, falling back to `default` when absent or malformed.
#[must_use]
pub fn parse_or<T>(raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match raw.map(|v| v.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}
