//! Thread-safe collector handle.
//!
//! The core [`Collector`] is single-owner: every operation takes
//! `&mut self`, so the borrow checker enforces one logical caller at a
//! time. [`SharedCollector`] is the multi-threaded discipline on top: a
//! cheap-to-clone handle holding the collector behind one mutex, taken
//! around each whole compound operation (validate, build point, append,
//! maybe-flush) so the one-batch-one-snapshot invariant holds under
//! concurrent recorders.
//!
//! Delivery still runs on whichever thread triggered the flush, under the
//! lock: a slow emitter blocks that caller and anyone waiting on the
//! lock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::collector::{Collector, CollectorStats};
use crate::emitter::Emitter;
use crate::error::MetricsError;
use crate::record::Value;

/// Clonable handle to a mutex-guarded [`Collector`].
#[derive(Debug)]
pub struct SharedCollector<E: Emitter> {
    inner: Arc<Mutex<Collector<E>>>,
}

impl<E: Emitter> Clone for SharedCollector<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Emitter> SharedCollector<E> {
    /// Wrap a collector for shared use.
    pub fn new(collector: Collector<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collector)),
        }
    }

    /// Record a named value. See [`Collector::entry`].
    pub fn entry(&self, name: &str, value: impl Into<Value>) -> Result<(), MetricsError> {
        self.inner.lock().entry(name, value)
    }

    /// Record a counter increment. See [`Collector::increment`].
    pub fn increment(&self, name: &str) -> Result<(), MetricsError> {
        self.inner.lock().increment(name)
    }

    /// Record an event. See [`Collector::event`].
    pub fn event(&self, name: &str) -> Result<(), MetricsError> {
        self.inner.lock().event(name)
    }

    /// Set a property. See [`Collector::set_property`].
    pub fn set_property(&self, name: &str, value: &str) -> Result<(), MetricsError> {
        self.inner.lock().set_property(name, value)
    }

    /// Remove a property. See [`Collector::remove_property`].
    pub fn remove_property(&self, name: &str) -> Result<(), MetricsError> {
        self.inner.lock().remove_property(name)
    }

    /// Deliver the pending batch, if any. See [`Collector::flush`].
    pub fn flush(&self) -> Result<(), MetricsError> {
        self.inner.lock().flush()
    }

    /// Number of data points currently queued.
    pub fn pending(&self) -> usize {
        self.inner.lock().pending()
    }

    /// Activity counters.
    pub fn stats(&self) -> CollectorStats {
        self.inner.lock().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::EmitError;
    use crate::properties::Properties;
    use crate::record::DataPoint;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts points across emit calls; safe to move between threads.
    #[derive(Default)]
    struct CountingEmitter {
        points: Arc<AtomicUsize>,
        batches: Arc<AtomicUsize>,
    }

    impl Emitter for CountingEmitter {
        fn emit(&mut self, _properties: &Properties, batch: &[DataPoint]) -> Result<(), EmitError> {
            self.batches.fetch_add(1, Ordering::Relaxed);
            self.points.fetch_add(batch.len(), Ordering::Relaxed);
            Ok(())
        }
    }

    #[test]
    fn handle_is_cloneable_and_shares_state() {
        let points = Arc::new(AtomicUsize::new(0));
        let emitter = CountingEmitter {
            points: Arc::clone(&points),
            batches: Arc::new(AtomicUsize::new(0)),
        };
        let shared = SharedCollector::new(Collector::with_batch_size(emitter, 10).unwrap());

        let other = shared.clone();
        shared.event("from_first").unwrap();
        other.event("from_second").unwrap();

        assert_eq!(shared.pending(), 2);
        shared.flush().unwrap();
        assert_eq!(points.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn concurrent_recorders_never_exceed_batch_size() {
        let points = Arc::new(AtomicUsize::new(0));
        let batches = Arc::new(AtomicUsize::new(0));
        let emitter = CountingEmitter {
            points: Arc::clone(&points),
            batches: Arc::clone(&batches),
        };
        let shared = SharedCollector::new(Collector::with_batch_size(emitter, 5).unwrap());

        let threads: Vec<_> = (0..4)
            .map(|_| {
                let handle = shared.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        handle.increment("tick").unwrap();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        shared.flush().unwrap();

        // 100 points in batches of exactly 5, nothing lost or duplicated.
        assert_eq!(points.load(Ordering::Relaxed), 100);
        assert_eq!(batches.load(Ordering::Relaxed), 20);
        assert_eq!(shared.pending(), 0);
    }
}
