//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from runtime
//! error types to the unified Error type.

use super::types::Error;

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            Error::Decode("decode task was cancelled".to_string())
        } else {
            Error::Decode(format!("decode task panicked: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancelled_task_maps_to_decode() {
        let handle = tokio::spawn(std::future::pending::<()>());
        handle.abort();
        let err = Error::from(handle.await.unwrap_err());
        assert!(matches!(err, Error::Decode(ref msg) if msg.contains("cancelled")));
    }

    #[test]
    fn test_range_message_names_axis() {
        let err = Error::inverted("row", 4, 2);
        assert!(err.is_invalid_range());
        assert_eq!(err.to_string(), "Invalid range: rowEnd: 2, rowStart: 4");
    }
}
