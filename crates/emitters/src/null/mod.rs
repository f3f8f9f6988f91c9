//! Null emitter - counts and discards.
//!
//! Accepts every batch, updates counters, and drops the data. Useful for
//! measuring collector overhead without I/O and for tests that only care
//! that delivery happened.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use beacon_metrics::{DataPoint, EmitError, Emitter, Properties};

/// Counters shared by a [`NullEmitter`] and anyone holding its handle.
#[derive(Debug, Default)]
pub struct NullCounters {
    batches: AtomicU64,
    points: AtomicU64,
}

impl NullCounters {
    /// Batches accepted so far.
    pub fn batches(&self) -> u64 {
        self.batches.load(Ordering::Relaxed)
    }

    /// Data points accepted so far.
    pub fn points(&self) -> u64 {
        self.points.load(Ordering::Relaxed)
    }
}

/// Emitter that discards all batches.
#[derive(Debug, Default)]
pub struct NullEmitter {
    counters: Arc<NullCounters>,
}

impl NullEmitter {
    /// Create a null emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the counters, valid after the emitter is consumed by a
    /// collector.
    pub fn counters(&self) -> Arc<NullCounters> {
        Arc::clone(&self.counters)
    }
}

impl Emitter for NullEmitter {
    fn emit(&mut self, _properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
        self.counters.batches.fetch_add(1, Ordering::Relaxed);
        self.counters
            .points
            .fetch_add(batch.len() as u64, Ordering::Relaxed);
        Ok(())
    }
}
