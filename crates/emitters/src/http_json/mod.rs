//! HTTP JSON emitter - POSTs batches as JSON.
//!
//! Serializes the property snapshot and batch into one JSON document and
//! POSTs it to a configured URL:
//!
//! ```json
//! {
//!   "properties": {"env": "prod"},
//!   "metrics": [
//!     {"name": "startup_ms", "value": "42", "kind": "integer",
//!      "recorded_at": "2025-01-15T10:30:45.123Z"}
//!   ]
//! }
//! ```
//!
//! The request is blocking, matching the collector's synchronous
//! delivery model: a flush returns only after the server has answered
//! (or the timeout fired). Non-2xx responses are errors; the collector
//! drops the batch, so an unreachable endpoint loses data rather than
//! backing the process up.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use beacon_metrics::{DataPoint, EmitError, Emitter, Properties};

use crate::common::EmitterError;

/// Configuration for the HTTP JSON emitter.
#[derive(Debug, Clone)]
pub struct HttpJsonConfig {
    /// Destination URL for POST requests.
    pub url: String,

    /// Request timeout (default: 10s).
    pub timeout: Duration,
}

impl HttpJsonConfig {
    /// Config for the given endpoint with default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Config with a custom request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Wire shape of one delivered batch.
#[derive(Serialize)]
struct BatchDocument<'a> {
    properties: &'a Properties,
    metrics: &'a [DataPoint],
}

/// Emitter that POSTs each batch as a JSON document.
#[derive(Debug)]
pub struct HttpJsonEmitter {
    config: HttpJsonConfig,
    client: reqwest::blocking::Client,
}

impl HttpJsonEmitter {
    /// Build the emitter and its HTTP client.
    pub fn new(config: HttpJsonConfig) -> Result<Self, EmitterError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| EmitterError::init(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Destination URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn post_batch(&self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitterError> {
        let body = render_document(properties, batch)?;

        let response = self
            .client
            .post(&self.config.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| EmitterError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmitterError::Http {
                status: status.as_u16(),
            });
        }

        debug!(points = batch.len(), url = %self.config.url, "batch posted");
        Ok(())
    }
}

impl Emitter for HttpJsonEmitter {
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        self.post_batch(properties, batch)?;
        Ok(())
    }
}

/// Serialize one batch to its JSON wire form.
fn render_document(properties: &Properties, batch: &[DataPoint]) -> Result<String, EmitterError> {
    serde_json::to_string(&BatchDocument {
        properties,
        metrics: batch,
    })
    .map_err(|e| EmitterError::Serialization(e.to_string()))
}
