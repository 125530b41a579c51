use thiserror::Error;

/// Errors that can occur while publishing task events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Event sink connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Publish failed: {0}")]
    PublishFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for event sink operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_failed_display() {
        let error = NotifyError::PublishFailed("channel closed".to_string());
        assert_eq!(error.to_string(), "Publish failed: channel closed");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = NotifyError::ConnectionFailed("refused".to_string());
        assert_eq!(error.to_string(), "Event sink connection failed: refused");
    }
}
