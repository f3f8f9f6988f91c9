//! Collector error types.

use thiserror::Error;

use crate::emitter::EmitError;

/// Errors surfaced by the collector.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A required argument was empty, or the batch size was zero.
    ///
    /// Raised before any state is mutated or queued; the collector is
    /// unchanged when this is returned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `remove_property` named a property that was never set.
    ///
    /// This is a caller bug worth surfacing, not a validation failure;
    /// the collector is unchanged when this is returned.
    #[error("no such property: {name}")]
    PropertyNotFound {
        /// The property name that was not found.
        name: String,
    },

    /// The emitter failed during a flush.
    ///
    /// The batch is permanently lost: the queue is already cleared when
    /// this is returned, so the next recording call starts fresh. Retry
    /// and buffering policy belong to the caller or the emitter.
    #[error("delivery failed, batch of {lost} data point(s) dropped")]
    Delivery {
        /// Number of data points that were in the dropped batch.
        lost: usize,
        /// The underlying emitter error.
        #[source]
        source: EmitError,
    },
}

impl MetricsError {
    /// Create an invalid-argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
