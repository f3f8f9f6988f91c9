//! Collector configuration.
//!
//! # Example
//!
//! ```toml
//! [metrics]
//! # Deliver in groups of 20 data points
//! batch_size = 20
//! ```

use serde::Deserialize;

use crate::error::MetricsError;

/// Construction-time configuration for a collector.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Number of data points delivered per emitter call.
    ///
    /// Must be at least 1. The default of 1 means every data point is
    /// delivered immediately, equivalent to no batching.
    pub batch_size: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self { batch_size: 1 }
    }
}

impl CollectorConfig {
    /// Config with the given batch size.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.batch_size < 1 {
            return Err(MetricsError::invalid("batch_size must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CollectorConfig::default();
        assert_eq!(config.batch_size, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_batch_size_rejected() {
        let config = CollectorConfig::with_batch_size(0);
        assert!(matches!(
            config.validate(),
            Err(MetricsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: CollectorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.batch_size, 1);

        let config: CollectorConfig = serde_json::from_str(r#"{"batch_size": 50}"#).unwrap();
        assert_eq!(config.batch_size, 50);
    }
}
