//! Shared error types for the library.
//!
//! Two error styles coexist deliberately. The container surfaces
//! structural failures as returned errors ([`EmptyContainerError`]),
//! while the boundary validators report failures as plain values (see
//! [`crate::validation::Checked`]). Service collaborators use
//! [`ServiceError`], which flows map to user-facing outcomes 1:1.

use thiserror::Error;

/// Error returned when an element-consuming operation is invoked on an
/// empty container.
///
/// The message always names the container as empty, so callers (and
/// tests) can match on it without depending on the exact wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot {operation} from an empty container")]
pub struct EmptyContainerError {
    operation: &'static str,
}

impl EmptyContainerError {
    pub(crate) fn new(operation: &'static str) -> Self {
        Self { operation }
    }

    /// The operation that required a non-empty container.
    pub fn operation(&self) -> &str {
        self.operation
    }
}

/// Failure raised by an asynchronous number feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed: {reason}")]
pub struct FeedError {
    reason: String,
}

impl FeedError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Why the fetch failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors reported by external service collaborators.
///
/// Flows never retry these; they either propagate the error or map it
/// to a domain outcome (e.g. a declined order).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service could not be reached or did not respond.
    #[error("{service} unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    /// The service answered but refused the request.
    #[error("{service} rejected the request: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },
}

impl ServiceError {
    /// Create an unavailability error for the named service.
    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            message: message.into(),
        }
    }

    /// Create a rejection error for the named service.
    pub fn rejected(service: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            service,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_container_error_mentions_empty() {
        let err = EmptyContainerError::new("pop");
        assert!(err.to_string().contains("empty"));
        assert_eq!(err.operation(), "pop");
    }

    #[test]
    fn feed_error_carries_reason() {
        let err = FeedError::new("upstream timed out");
        assert_eq!(err.reason(), "upstream timed out");
        assert!(err.to_string().to_lowercase().contains("fail"));
    }

    #[test]
    fn service_error_names_the_service() {
        let err = ServiceError::unavailable("mailer", "connection refused");
        assert!(err.to_string().contains("mailer"));

        let err = ServiceError::rejected("payment gateway", "card expired");
        assert!(err.to_string().contains("card expired"));
    }
}
