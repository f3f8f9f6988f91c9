//! Beacon metrics - client-side metrics collection with batching delivery.
//!
//! Application code records named data points (string/int/float values,
//! counter increments, events) together with ambient key-value
//! properties. The collector batches them and hands completed batches to
//! a pluggable [`Emitter`] for transport. Key guarantees:
//!
//! - **Exactly-once inclusion**: every successfully queued data point is
//!   delivered in exactly one emit call, in recording order.
//! - **Hard batch ceiling**: the emitter never sees more than the
//!   configured batch size in one call.
//! - **One batch, one property snapshot**: mutating a property flushes
//!   any pending batch first, so a delivered batch never mixes points
//!   recorded under different property sets.
//! - **Fail-fast delivery**: an emitter error drops the batch and
//!   surfaces [`MetricsError::Delivery`]; the collector never retries,
//!   buffers, or wedges behind a failing sink.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐  entry/increment/event  ┌────────────┐  full / flush  ┌─────────┐
//! │  caller   │────────────────────────▶│ Collector  │───────────────▶│ Emitter │
//! └───────────┘                         │  + queue   │  one batch +   └─────────┘
//!        set_property / remove_property │  + props   │  one property
//!            (flushes pending first)    └────────────┘  snapshot
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use beacon_metrics::{Collector, Emitter, EmitError, Properties, DataPoint};
//!
//! struct LineEmitter;
//!
//! impl Emitter for LineEmitter {
//!     fn emit(&mut self, props: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
//!         for point in batch {
//!             println!("{} {}={} {:?}", point.kind(), point.name(), point.value(), props);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut metrics = Collector::with_batch_size(LineEmitter, 20)?;
//!
//! metrics.set_property("env", "prod")?;
//! metrics.entry("startup_ms", 42)?;
//! metrics.entry("build", "release")?;
//! metrics.increment("sessions")?;
//! metrics.event("ready")?;
//!
//! // Deliver whatever is still queued below the batch ceiling.
//! metrics.flush()?;
//! # Ok::<(), beacon_metrics::MetricsError>(())
//! ```
//!
//! Delivery is synchronous: `flush` (explicit, capacity-triggered, or
//! property-mutation-triggered) blocks for the duration of the emit call
//! on whichever thread triggered it. For concurrent recorders, wrap the
//! collector in [`SharedCollector`].

pub mod collector;
pub mod config;
pub mod emitter;
pub mod error;
pub mod properties;
pub mod queue;
pub mod record;
pub mod shared;

pub use collector::{Collector, CollectorStats};
pub use config::CollectorConfig;
pub use emitter::{EmitError, Emitter};
pub use error::MetricsError;
pub use properties::{Properties, PropertyContext};
pub use queue::BatchQueue;
pub use record::{DataPoint, Kind, Value};
pub use shared::SharedCollector;
