//! Error types for the feature service client.

use thiserror::Error;

/// Errors produced by the feature service client.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered 200 OK but the body carried an error object.
    #[error("service error {code}: {message}")]
    Service { code: i64, message: String },

    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("network error: {0}")]
    Network(String),
}

/// Result alias for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    // The GUI shows these Display strings verbatim in its error dialog.
    #[test]
    fn display_carries_the_message() {
        let e = ServiceError::Service {
            code: 400,
            message: "Invalid or missing input parameters.".into(),
        };
        assert_eq!(
            e.to_string(),
            "service error 400: Invalid or missing input parameters."
        );

        let e = ServiceError::InvalidResponse {
            reason: "expected JSON object".into(),
        };
        assert_eq!(e.to_string(), "invalid response: expected JSON object");

        let e = ServiceError::Network("HTTP 503 querying layer".into());
        assert_eq!(e.to_string(), "network error: HTTP 503 querying layer");
    }
}
