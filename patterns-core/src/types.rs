//! Core types shared by every pattern in the library
//!
//! Errors are deliberately few: the peripheral patterns work on trusted,
//! literal inputs, so only the broadcaster and the factory can fail.

use std::fmt;

/// Result type for library operations
pub type Result<T> = std::result::Result<T, PatternError>;

/// Boxed error returned by fallible subscribers
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while running the patterns
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid subscriber: {0}")]
    InvalidSubscriber(String),

    #[error("Subscriber at position {position} failed: {source}")]
    SubscriberFailure {
        /// Index of the subscriber in the broadcaster at delivery time
        position: usize,
        /// Error raised by the subscriber
        source: BoxError,
    },

    #[error("{} subscriber(s) failed during broadcast", .0.len())]
    SubscriberFailures(Vec<SubscriberFault>),

    #[error("Unknown gadget type: {0}")]
    UnknownGadget(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PatternError {
    /// Short stable label for logs
    pub fn as_label(&self) -> &'static str {
        match self {
            PatternError::InvalidSubscriber(_) => "invalid_subscriber",
            PatternError::SubscriberFailure { .. } => "subscriber_failure",
            PatternError::SubscriberFailures(_) => "subscriber_failures",
            PatternError::UnknownGadget(_) => "unknown_gadget",
            PatternError::Serialization(_) => "serialization",
        }
    }
}

/// A single subscriber failure collected under [`DeliveryPolicy::Isolate`]
///
/// [`DeliveryPolicy::Isolate`]: crate::DeliveryPolicy::Isolate
#[derive(Debug)]
pub struct SubscriberFault {
    /// Index of the subscriber in the broadcaster at delivery time
    pub position: usize,
    /// Error raised by the subscriber
    pub source: BoxError,
}

impl fmt::Display for SubscriberFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber {}: {}", self.position, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PatternError::SubscriberFailure {
            position: 2,
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "Subscriber at position 2 failed: boom");
        assert_eq!(err.as_label(), "subscriber_failure");

        let err = PatternError::SubscriberFailures(vec![
            SubscriberFault { position: 0, source: "a".into() },
            SubscriberFault { position: 3, source: "b".into() },
        ]);
        assert_eq!(err.to_string(), "2 subscriber(s) failed during broadcast");

        let err = PatternError::UnknownGadget("Phone".to_string());
        assert_eq!(err.to_string(), "Unknown gadget type: Phone");
    }

    #[test]
    fn test_fault_display() {
        let fault = SubscriberFault { position: 1, source: "refused".into() };
        assert_eq!(fault.to_string(), "subscriber 1: refused");
    }
}
