//! Record queue configuration

use serde::{Deserialize, Serialize};

use crate::error::{QueueError, Result};

/// Largest accepted capacity, so the 32-bit index counters can represent
/// `used` without aliasing.
pub const MAX_CAPACITY: usize = 1 << 31;

/// Configuration for a record queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Name of the queue (for diagnostics)
    pub name: String,
    /// Requested capacity in bytes; rounded up to the next power of two
    /// at construction time
    pub capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            capacity: crate::defaults::DEFAULT_CAPACITY,
        }
    }
}

impl QueueConfig {
    /// Create a new configuration with a custom name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the requested capacity in bytes
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Capacity after rounding up to the next power of two
    pub fn rounded_capacity(&self) -> usize {
        self.capacity.next_power_of_two()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(QueueError::invalid_parameter(
                "capacity",
                "Capacity cannot be zero",
            ));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(QueueError::invalid_parameter(
                "capacity",
                format!("Capacity cannot exceed {} bytes", MAX_CAPACITY),
            ));
        }

        Ok(())
    }
}

/// Builder pattern for queue configuration
pub struct QueueConfigBuilder {
    config: QueueConfig,
}

impl QueueConfigBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: QueueConfig::new(name),
        }
    }

    /// Set the requested capacity in bytes
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<QueueConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
