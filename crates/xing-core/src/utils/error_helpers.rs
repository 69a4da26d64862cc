//! Conversions from reqwest failures into [`TransportError`]

use crate::error::TransportError;

/// Convert reqwest errors to TransportError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout_secs: u64) -> TransportError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_secs);
    }

    TransportError::Http {
        status: error.status().map(|s| s.as_u16()).unwrap_or(0),
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to TransportError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> TransportError {
    TransportError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert failures while reading a response body
pub fn convert_body_error(error: reqwest::Error, endpoint: &str, status: u16) -> TransportError {
    TransportError::Http {
        status,
        endpoint: endpoint.to_string(),
        message: format!("Failed to read response body: {}", error),
    }
}
