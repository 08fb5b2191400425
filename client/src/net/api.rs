//! Browser implementations of the accessor's reader and writer.
//!
//! Client-side (csr): state reads via `gloo-net`, timers via `gloo-timers`,
//! and writes signed by the injected wallet through the `js/ao_message.js`
//! bridge. Without `csr` the transports report `Transport` errors so the
//! crate still builds and tests on the host.
//!
//! ERROR HANDLING
//! ==============
//! Read failures surface as `CanvasError` and are absorbed by the accessor
//! (stale cache + warning). Write failures reach the click handler, which
//! maps them to a status message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use canvas::accessor::{CanvasAccessor, ProcessReader, ProcessWriter};
use canvas::config::ProcessConfig;
use canvas::error::CanvasError;
use canvas::wire::OutboundMessage;

/// Message unit that relays signed writes to the process.
pub const DEFAULT_MU_URL: &str = "https://ur-mu.randao.net";

/// Compute unit the message client evaluates results against.
pub const DEFAULT_CU_URL: &str = "https://ur-cu.randao.net";

/// Arweave gateway for wallet and transaction lookups.
pub const DEFAULT_GATEWAY_URL: &str = "https://arweave.net";

/// aoconnect mode the process network expects.
pub const DEFAULT_AO_MODE: &str = "legacy";

/// Accessor type used by the page.
pub type BrowserAccessor = CanvasAccessor<BrowserReader, BrowserWriter>;

/// Build-time overrides, read once via `option_env!`.
const OVERRIDES: [(&str, Option<&str>); 8] = [
    ("PLACE_NODE_URL", option_env!("PLACE_NODE_URL")),
    ("PLACE_PROCESS_ID", option_env!("PLACE_PROCESS_ID")),
    ("PLACE_STATE_KEY", option_env!("PLACE_STATE_KEY")),
    ("PLACE_POLL_INTERVAL_MS", option_env!("PLACE_POLL_INTERVAL_MS")),
    ("PLACE_SETTLE_DELAY_MS", option_env!("PLACE_SETTLE_DELAY_MS")),
    ("PLACE_CANVAS_WIDTH", option_env!("PLACE_CANVAS_WIDTH")),
    ("PLACE_CANVAS_HEIGHT", option_env!("PLACE_CANVAS_HEIGHT")),
    ("PLACE_STICKER_SIZE", option_env!("PLACE_STICKER_SIZE")),
];

/// Process config for this build. An invalid override set falls back to the
/// defaults with a console warning.
pub fn process_config() -> ProcessConfig {
    config_from_overrides(&OVERRIDES)
}

fn config_from_overrides(overrides: &[(&str, Option<&str>)]) -> ProcessConfig {
    let lookup = |key: &str| {
        overrides
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| v.map(str::to_owned))
    };
    match ProcessConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring build-time config overrides: {e}");
            ProcessConfig::default()
        }
    }
}

/// Network endpoints the wallet bridge connects aoconnect with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AoEndpoints {
    pub mu_url: String,
    pub cu_url: String,
    pub gateway_url: String,
    pub mode: String,
}

impl Default for AoEndpoints {
    fn default() -> Self {
        Self {
            mu_url: DEFAULT_MU_URL.to_owned(),
            cu_url: DEFAULT_CU_URL.to_owned(),
            gateway_url: DEFAULT_GATEWAY_URL.to_owned(),
            mode: DEFAULT_AO_MODE.to_owned(),
        }
    }
}

impl AoEndpoints {
    /// Options object passed to aoconnect's `connect`.
    #[must_use]
    pub fn connect_options(&self) -> Value {
        serde_json::json!({
            "MU_URL": self.mu_url,
            "CU_URL": self.cu_url,
            "GATEWAY_URL": self.gateway_url,
            "MODE": self.mode,
        })
    }
}

const AO_OVERRIDES: [(&str, Option<&str>); 4] = [
    ("PLACE_MU_URL", option_env!("PLACE_MU_URL")),
    ("PLACE_CU_URL", option_env!("PLACE_CU_URL")),
    ("PLACE_GATEWAY_URL", option_env!("PLACE_GATEWAY_URL")),
    ("PLACE_AO_MODE", option_env!("PLACE_AO_MODE")),
];

/// aoconnect endpoints for this build (`PLACE_MU_URL`, `PLACE_CU_URL`,
/// `PLACE_GATEWAY_URL` and `PLACE_AO_MODE` overrides).
pub fn ao_endpoints() -> AoEndpoints {
    endpoints_from_overrides(&AO_OVERRIDES)
}

fn endpoints_from_overrides(overrides: &[(&str, Option<&str>)]) -> AoEndpoints {
    let pick = |key: &str, default: String| {
        overrides
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, v)| *v)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(default, |v| v.trim_end_matches('/').to_owned())
    };
    let defaults = AoEndpoints::default();
    AoEndpoints {
        mu_url: pick("PLACE_MU_URL", defaults.mu_url),
        cu_url: pick("PLACE_CU_URL", defaults.cu_url),
        gateway_url: pick("PLACE_GATEWAY_URL", defaults.gateway_url),
        mode: pick("PLACE_AO_MODE", defaults.mode),
    }
}

/// Construct the accessor the home page polls and commits through.
///
/// # Errors
///
/// Returns [`CanvasError::Parse`] if `config` fails validation.
pub fn build_accessor(config: ProcessConfig) -> Result<BrowserAccessor, CanvasError> {
    CanvasAccessor::new(config, BrowserReader, BrowserWriter { endpoints: ao_endpoints() })
}

#[cfg(any(test, feature = "csr"))]
fn state_request_failed_message(status: u16) -> String {
    format!("state request failed: {status}")
}

#[cfg(any(test, feature = "csr"))]
fn wallet_missing_message() -> String {
    "no wallet extension found (window.arweaveWallet)".to_owned()
}

/// `GET`s process state with `gloo-net` and sleeps with `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserReader;

#[async_trait(?Send)]
impl ProcessReader for BrowserReader {
    async fn read_state(&self, url: &str) -> Result<Value, CanvasError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(url)
                .send()
                .await
                .map_err(|e| CanvasError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(CanvasError::Transport(state_request_failed_message(resp.status())));
            }
            resp.json::<Value>().await.map_err(|e| CanvasError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(CanvasError::Transport(format!("no browser transport for {url}")))
        }
    }

    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
        }
    }
}

/// Hands outbound messages to the wallet bridge for signing and delivery.
#[derive(Clone, Debug)]
pub struct BrowserWriter {
    pub endpoints: AoEndpoints,
}

#[async_trait(?Send)]
impl ProcessWriter for BrowserWriter {
    async fn send(&self, message: &OutboundMessage) -> Result<String, CanvasError> {
        let envelope = serde_json::to_string(message).map_err(|e| CanvasError::Parse(e.to_string()))?;
        #[cfg(feature = "csr")]
        {
            if !bridge::wallet_available() {
                return Err(CanvasError::Transport(wallet_missing_message()));
            }
            let options = self.endpoints.connect_options().to_string();
            let id = bridge::send_signed_message(&options, &envelope)
                .await
                .map_err(|e| CanvasError::Transport(bridge::js_error_message(&e)))?;
            Ok(id.as_string().unwrap_or_default())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(CanvasError::Transport(format!("no wallet bridge for {} ({envelope})", self.endpoints.mu_url)))
        }
    }
}

#[cfg(feature = "csr")]
mod bridge {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/ao_message.js")]
    extern "C" {
        #[wasm_bindgen(catch, js_name = sendSignedMessage)]
        pub async fn send_signed_message(connect_options: &str, envelope: &str) -> Result<JsValue, JsValue>;
    }

    pub fn wallet_available() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("arweaveWallet")).unwrap_or(false)
    }

    pub fn js_error_message(value: &JsValue) -> String {
        if let Some(text) = value.as_string() {
            return text;
        }
        match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => "wallet bridge failed".to_owned(),
        }
    }
}
