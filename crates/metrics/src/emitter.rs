//! The emitter contract.
//!
//! An emitter is the sole external interface the collector depends on: it
//! accepts a property snapshot plus an ordered batch and performs actual
//! delivery or storage. Transport, serialization format, retry and
//! persistence are all emitter concerns.

use crate::properties::Properties;
use crate::record::DataPoint;

/// Error type emitters may fail with.
///
/// The collector treats every emitter error uniformly, wrapping it in
/// [`MetricsError::Delivery`](crate::MetricsError::Delivery).
pub type EmitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Destination sink for completed batches.
///
/// `emit` is called with batches of length 1 up to the collector's
/// configured batch size, exactly once per batch. Implementations must
/// not retain references into the arguments beyond the call; the
/// collector discards the batch as soon as `emit` returns.
///
/// Delivery is synchronous: a slow emitter blocks whichever caller
/// triggered the flush.
pub trait Emitter {
    /// Deliver one batch under one property snapshot.
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError>;
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        (**self).emit(properties, batch)
    }
}

impl<E: Emitter + ?Sized> Emitter for Box<E> {
    fn emit(&mut self, properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        (**self).emit(properties, batch)
    }
}
