//! Batch accumulation queue.

use crate::record::DataPoint;

/// Ordered accumulator for data points, bounded by the configured batch
/// size.
///
/// The queue never overflows: the collector flushes synchronously the
/// moment [`push`](Self::push) reports that capacity was reached, so the
/// length observed after any recording call is always below capacity.
#[derive(Debug)]
pub struct BatchQueue {
    points: Vec<DataPoint>,
    batch_size: usize,
}

impl BatchQueue {
    /// Create a queue with the given capacity. Callers validate
    /// `batch_size >= 1` before constructing.
    pub(crate) fn new(batch_size: usize) -> Self {
        Self {
            points: Vec::with_capacity(batch_size),
            batch_size,
        }
    }

    /// Append a point; returns `true` once the queue has reached
    /// capacity and must be flushed before the recording call returns.
    pub(crate) fn push(&mut self, point: DataPoint) -> bool {
        self.points.push(point);
        self.points.len() >= self.batch_size
    }

    /// Take the whole batch out, leaving the queue empty.
    ///
    /// Clearing happens here, before delivery is attempted, so a failing
    /// emitter can never wedge the collector behind an ever-growing
    /// backlog.
    pub(crate) fn take(&mut self) -> Vec<DataPoint> {
        std::mem::take(&mut self.points)
    }

    /// Configured capacity.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of points currently queued.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the queue holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Kind;

    fn point(name: &str) -> DataPoint {
        DataPoint::record(name, String::new(), Kind::Event)
    }

    #[test]
    fn push_reports_capacity_reached() {
        let mut queue = BatchQueue::new(3);
        assert!(!queue.push(point("a")));
        assert!(!queue.push(point("b")));
        assert!(queue.push(point("c")));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn take_drains_in_order() {
        let mut queue = BatchQueue::new(8);
        queue.push(point("first"));
        queue.push(point("second"));

        let batch = queue.take();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].name(), "first");
        assert_eq!(batch[1].name(), "second");
        assert!(queue.is_empty());
    }

    #[test]
    fn take_on_empty_yields_empty() {
        let mut queue = BatchQueue::new(1);
        assert!(queue.take().is_empty());
    }

    #[test]
    fn batch_size_one_is_full_immediately() {
        let mut queue = BatchQueue::new(1);
        assert!(queue.push(point("only")));
    }
}
