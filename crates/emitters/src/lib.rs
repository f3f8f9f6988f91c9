//! Ready-made emitters for [`beacon_metrics`].
//!
//! The collector core treats delivery as an opaque [`Emitter`] call; this
//! crate supplies the common destinations:
//!
//! | Emitter | Destination | Format |
//! |---|---|---|
//! | [`TextLogEmitter`] | append-only file | CSV, one line per point |
//! | [`HttpJsonEmitter`] | HTTP endpoint | JSON `{properties, metrics}` POST |
//! | [`StdoutEmitter`] | stdout | human-readable, optional color |
//! | [`NullEmitter`] | nowhere | counts and discards |
//!
//! All emitters are synchronous, matching the collector's blocking
//! delivery model. Retry, buffering, and backoff are intentionally not
//! provided here; a failed emit surfaces as a delivery error and the
//! batch is dropped by the collector.
//!
//! [`Emitter`]: beacon_metrics::Emitter

pub mod common;
pub mod http_json;
pub mod null;
pub mod stdout;
pub mod text_log;

pub use common::EmitterError;
pub use http_json::{HttpJsonConfig, HttpJsonEmitter};
pub use null::NullEmitter;
pub use stdout::{StdoutConfig, StdoutEmitter};
pub use text_log::TextLogEmitter;
