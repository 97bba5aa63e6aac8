//! Error types and handling for the record queue

/// Result type alias for record queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

/// Error types for the record queue.
///
/// Zero-progress outcomes ("full" on enqueue, "empty" on dequeue/peek/skip)
/// are deliberately *not* represented here; they are ordinary return values
/// (`0`/`false`) so callers can treat them as retryable backpressure.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Invalid parameters or configuration
    #[error("Invalid parameter: {parameter} - {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Memory allocation failure at construction time
    #[error("Memory error: {message}")]
    Memory { message: String },

    /// Payload length exceeds the representable record-length range
    #[error("Record length overflow: {length} exceeds maximum of {max}")]
    LengthOverflow { length: usize, max: usize },

    /// Gate acquisition was cancelled before the operation began
    #[error("Operation cancelled while waiting for queue access")]
    Cancelled,
}

impl QueueError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a memory error
    pub fn memory(message: impl Into<String>) -> Self {
        Self::Memory {
            message: message.into(),
        }
    }

    /// Create a length overflow error
    pub fn length_overflow(length: usize, max: usize) -> Self {
        Self::LengthOverflow { length, max }
    }
}
