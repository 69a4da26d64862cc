//! Mapping of XING error payloads onto [`RequestError`]

use crate::error::{ErrorDetails, RequestError};
use serde_json::Value;

/// Field of an error payload that names the provider error
pub const ERROR_INDICATOR: &str = "error_name";

type ErrorConstructor = fn(ErrorDetails) -> RequestError;

/// Provider error names and the error each one maps to.
pub const ERROR_CODE_TABLE: &[(&str, ErrorConstructor)] = &[
    ("INVALID_PARAMETERS", RequestError::InvalidParameters),
    ("RATE_LIMIT_EXCEEDED", RequestError::RateLimitExceeded),
    ("INVALID_OAUTH_SIGNATURE", RequestError::InvalidOauthSignature),
    ("INVALID_OAUTH_VERSION", RequestError::InvalidOauthVersion),
    ("INVALID_OAUTH_TOKEN", RequestError::InvalidOauthToken),
    (
        "UNSUPPORTED_SIGNATURE_METHOD",
        RequestError::UnsupportedSignatureMethod,
    ),
    ("INVALID_OAUTH_CONSUMER", RequestError::InvalidOauthConsumer),
    ("TIME_EXPIRED", RequestError::TimeExpired),
    ("ACCESS_DENIED", RequestError::AccessDenied),
    ("INSUFFICIENT_PRIVILEGES", RequestError::InsufficientPrivileges),
    ("USER_NOT_FOUND", RequestError::UserNotFound),
    ("CALL_NOT_FOUND", RequestError::CallNotFound),
];

/// Build the error for a provider error name, falling back to
/// [`RequestError::Generic`] for names not in the table.
pub fn classify(error_name: &str, details: ErrorDetails) -> RequestError {
    match ERROR_CODE_TABLE.iter().find(|(name, _)| *name == error_name) {
        Some((_, build)) => build(details),
        None => RequestError::Generic(details),
    }
}

/// Fail if `payload` carries a provider error indicator.
///
/// Only the payload decides: a missing indicator is success whatever
/// `api_error_code` or `http_status` say.
pub fn check(api_error_code: &str, payload: &Value, http_status: u16) -> Result<(), RequestError> {
    let Some(indicator) = payload.get(ERROR_INDICATOR).filter(|v| !v.is_null()) else {
        return Ok(());
    };

    let error_name = match indicator {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    log::warn!(
        "XING API reported {} (code {}, HTTP {})",
        error_name,
        api_error_code,
        http_status
    );

    Err(classify(
        &error_name,
        ErrorDetails::new(api_error_code, payload.clone(), http_status),
    ))
}
