//! The metrics collector.
//!
//! Single point of entry for recording data points and managing ambient
//! properties. The collector validates input, builds data points, drives
//! the batch queue, and defines the flush protocol:
//!
//! - A batch is delivered synchronously the moment the queue reaches the
//!   configured batch size, via exactly one [`Emitter::emit`] call.
//! - Mutating a property first flushes any partially filled batch, so one
//!   delivered batch always carries exactly one property snapshot.
//! - On delivery failure the batch is dropped, never retried; the queue
//!   is cleared before the emitter is called so a failing sink cannot
//!   wedge the collector.
//!
//! All operations take `&mut self`; one logical caller at a time. Wrap in
//! [`SharedCollector`](crate::SharedCollector) when multiple threads
//! record through the same instance.

use tracing::{debug, trace, warn};

use crate::config::CollectorConfig;
use crate::emitter::Emitter;
use crate::error::MetricsError;
use crate::properties::{Properties, PropertyContext};
use crate::queue::BatchQueue;
use crate::record::{DataPoint, Kind, Value};

/// Counters tracking one collector's activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectorStats {
    /// Data points recorded (queued).
    pub points_recorded: u64,
    /// Batches handed to the emitter that returned success.
    pub batches_delivered: u64,
    /// Batches dropped because the emitter failed.
    pub batches_failed: u64,
    /// Data points lost in failed batches.
    pub points_lost: u64,
}

/// Collects data points into batches and delivers them through an
/// [`Emitter`].
///
/// # Example
///
/// ```no_run
/// use beacon_metrics::{Collector, Emitter, EmitError, Properties, DataPoint};
///
/// struct Stderr;
///
/// impl Emitter for Stderr {
///     fn emit(&mut self, _props: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
///         for point in batch {
///             eprintln!("{} {} {}", point.kind(), point.name(), point.value());
///         }
///         Ok(())
///     }
/// }
///
/// let mut metrics = Collector::with_batch_size(Stderr, 10)?;
/// metrics.set_property("env", "prod")?;
/// metrics.entry("startup_ms", 42)?;
/// metrics.increment("requests")?;
/// metrics.event("ready")?;
/// metrics.flush()?;
/// # Ok::<(), beacon_metrics::MetricsError>(())
/// ```
#[derive(Debug)]
pub struct Collector<E: Emitter> {
    emitter: E,
    properties: PropertyContext,
    queue: BatchQueue,
    stats: CollectorStats,
}

impl<E: Emitter> Collector<E> {
    /// Create a collector that delivers every data point immediately
    /// (batch size 1).
    pub fn new(emitter: E) -> Self {
        Self {
            emitter,
            properties: PropertyContext::new(),
            queue: BatchQueue::new(1),
            stats: CollectorStats::default(),
        }
    }

    /// Create a collector that delivers in groups of `batch_size`.
    ///
    /// Fails with [`MetricsError::InvalidArgument`] if `batch_size` is
    /// zero.
    pub fn with_batch_size(emitter: E, batch_size: usize) -> Result<Self, MetricsError> {
        Self::from_config(emitter, &CollectorConfig { batch_size })
    }

    /// Create a collector from a validated configuration.
    pub fn from_config(emitter: E, config: &CollectorConfig) -> Result<Self, MetricsError> {
        config.validate()?;
        Ok(Self {
            emitter,
            properties: PropertyContext::new(),
            queue: BatchQueue::new(config.batch_size),
            stats: CollectorStats::default(),
        })
    }

    /// Record a named value (text, integer, or float).
    ///
    /// The value is rendered to its canonical text form and queued with
    /// a kind tag matching the variant. Text values must be non-empty.
    pub fn entry(&mut self, name: &str, value: impl Into<Value>) -> Result<(), MetricsError> {
        validate_name(name)?;
        let value = value.into();
        if matches!(&value, Value::Text(s) if s.is_empty()) {
            return Err(MetricsError::invalid("string entry value must not be empty"));
        }

        let kind = value.kind();
        self.queue_point(DataPoint::record(name, value.render(), kind))
    }

    /// Record a counter increment (empty value).
    pub fn increment(&mut self, name: &str) -> Result<(), MetricsError> {
        validate_name(name)?;
        self.queue_point(DataPoint::record(name, String::new(), Kind::Increment))
    }

    /// Record a point-in-time event (empty value).
    pub fn event(&mut self, name: &str) -> Result<(), MetricsError> {
        validate_name(name)?;
        self.queue_point(DataPoint::record(name, String::new(), Kind::Event))
    }

    /// Set a property carried by every subsequently delivered batch.
    /// Overwrites silently if the key exists.
    ///
    /// Any pending batch is flushed first, so no delivered batch mixes
    /// data points recorded under different property sets. The flush
    /// happens before the mutation; a delivery failure is propagated and
    /// the property is not set.
    pub fn set_property(&mut self, name: &str, value: &str) -> Result<(), MetricsError> {
        validate_name(name)?;
        if value.is_empty() {
            return Err(MetricsError::invalid("property value must not be empty"));
        }

        self.flush_queue()?;
        self.properties.set(name, value);
        Ok(())
    }

    /// Stop including a property on subsequent batches.
    ///
    /// Flushes any pending batch first, like [`set_property`]. Fails with
    /// [`MetricsError::PropertyNotFound`] if the property was never set.
    ///
    /// [`set_property`]: Self::set_property
    pub fn remove_property(&mut self, name: &str) -> Result<(), MetricsError> {
        validate_name(name)?;

        self.flush_queue()?;
        if !self.properties.remove(name) {
            return Err(MetricsError::PropertyNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Deliver whatever is currently queued, even below capacity.
    ///
    /// No-op if the queue is empty. On emitter failure the batch is
    /// dropped and [`MetricsError::Delivery`] is returned.
    pub fn flush(&mut self) -> Result<(), MetricsError> {
        self.flush_queue()
    }

    /// Number of data points currently queued. Always below the batch
    /// size between calls.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Configured batch size.
    pub fn batch_size(&self) -> usize {
        self.queue.batch_size()
    }

    /// Properties currently in effect.
    pub fn properties(&self) -> &Properties {
        self.properties.current()
    }

    /// Activity counters for this collector.
    pub fn stats(&self) -> CollectorStats {
        self.stats
    }

    /// Consume the collector, returning the emitter.
    ///
    /// Pending data points are discarded; call [`flush`](Self::flush)
    /// first to deliver them.
    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Common queueing path for all five recording operations.
    fn queue_point(&mut self, point: DataPoint) -> Result<(), MetricsError> {
        trace!(name = point.name(), kind = %point.kind(), "data point queued");
        self.stats.points_recorded += 1;

        if self.queue.push(point) {
            return self.flush_queue();
        }
        Ok(())
    }

    /// Deliver the queued batch, if any, in exactly one emit call.
    ///
    /// The queue is drained before the emitter runs; success or failure,
    /// it is empty when this returns.
    fn flush_queue(&mut self) -> Result<(), MetricsError> {
        if self.queue.is_empty() {
            return Ok(());
        }

        let batch = self.queue.take();
        debug!(points = batch.len(), "delivering batch");

        match self.emitter.emit(self.properties.current(), &batch) {
            Ok(()) => {
                self.stats.batches_delivered += 1;
                Ok(())
            }
            Err(source) => {
                let lost = batch.len();
                self.stats.batches_failed += 1;
                self.stats.points_lost += lost as u64;
                warn!(points = lost, error = %source, "delivery failed, batch dropped");
                Err(MetricsError::Delivery { lost, source })
            }
        }
    }
}

fn validate_name(name: &str) -> Result<(), MetricsError> {
    if name.is_empty() {
        return Err(MetricsError::invalid("name must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod collector_test;
