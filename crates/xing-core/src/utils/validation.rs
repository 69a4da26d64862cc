//! Input validation and sanitization utilities

use crate::error::CliError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Validate an endpoint path such as `v1/users/me`
pub fn validate_endpoint(endpoint: &str) -> crate::Result<()> {
    if endpoint.trim().is_empty() {
        return Err(CliError::InvalidArguments("Endpoint cannot be empty".to_string()).into());
    }

    if endpoint.chars().any(char::is_whitespace) {
        return Err(CliError::InvalidArguments(format!(
            "Invalid endpoint '{}': endpoint must not contain whitespace",
            endpoint
        ))
        .into());
    }

    if endpoint.contains('?') {
        return Err(CliError::InvalidArguments(format!(
            "Invalid endpoint '{}': pass query parameters separately",
            endpoint
        ))
        .into());
    }

    Ok(())
}

/// Validate a XING user id (`me` or `<number>_<hash>`)
pub fn validate_user_id(user_id: &str) -> crate::Result<()> {
    if user_id == "me" {
        return Ok(());
    }

    let valid = user_id
        .split_once('_')
        .is_some_and(|(num, hash)| {
            !num.is_empty()
                && num.chars().all(|c| c.is_ascii_digit())
                && !hash.is_empty()
                && hash.chars().all(|c| c.is_ascii_alphanumeric())
        });

    if !valid {
        return Err(CliError::InvalidArguments(format!(
            "Invalid user id '{}': expected 'me' or '<number>_<hash>'",
            user_id
        ))
        .into());
    }

    Ok(())
}

/// Split a `key=value` argument
pub fn parse_key_value(arg: &str) -> crate::Result<(String, String)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidArguments(format!(
            "Invalid parameter '{}': expected key=value",
            arg
        ))
        .into()),
    }
}
