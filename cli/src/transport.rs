//! Native transports: `reqwest` reads with `tokio` timers, and a writer that
//! captures outbound messages for an external signer instead of sending them.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use canvas::accessor::{ProcessReader, ProcessWriter};
use canvas::error::CanvasError;
use canvas::wire::OutboundMessage;

/// `GET`s process state over HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpReader {
    client: reqwest::Client,
}

impl HttpReader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ProcessReader for HttpReader {
    async fn read_state(&self, url: &str) -> Result<Value, CanvasError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CanvasError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(CanvasError::Transport(format!("state request failed: {}", status.as_u16())));
        }
        response.json::<Value>().await.map_err(|e| CanvasError::Parse(e.to_string()))
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records every message it is asked to send. Nothing leaves the process;
/// the caller keeps a clone and prints the captured envelopes for signing
/// elsewhere. Clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    captured: Rc<RefCell<Vec<OutboundMessage>>>,
}

impl CaptureWriter {
    /// Drain captured messages in send order.
    pub fn take(&self) -> Vec<OutboundMessage> {
        self.captured.take()
    }
}

#[async_trait(?Send)]
impl ProcessWriter for CaptureWriter {
    async fn send(&self, message: &OutboundMessage) -> Result<String, CanvasError> {
        let mut captured = self.captured.borrow_mut();
        captured.push(message.clone());
        Ok(format!("unsigned-{}", captured.len()))
    }
}
