use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("RequestError: {0}")]
    Request(#[from] RequestError),
    #[error("TransportError: {0}")]
    Transport(#[from] TransportError),
    #[error("DecodeError: {0}")]
    Decode(#[from] DecodeError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
}

/// Diagnostics carried by every provider-reported error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetails {
    /// Error code reported alongside the payload (usually the HTTP status as text)
    pub code: String,
    /// Decoded error payload as returned by the provider
    pub payload: Value,
    /// Original HTTP status of the response
    pub http_status: u16,
}

impl ErrorDetails {
    pub fn new(code: impl Into<String>, payload: Value, http_status: u16) -> Self {
        Self {
            code: code.into(),
            payload,
            http_status,
        }
    }

    /// The provider's `error_name` token, if the payload carries one
    pub fn error_name(&self) -> Option<&str> {
        self.payload.get("error_name").and_then(Value::as_str)
    }

    /// Human readable message from the payload, if any
    pub fn message(&self) -> Option<&str> {
        self.payload.get("message").and_then(Value::as_str)
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (code {}, HTTP {})",
            self.message().or(self.error_name()).unwrap_or("no message"),
            self.code,
            self.http_status
        )
    }
}

/// Provider-reported errors. One variant per entry of the error code table,
/// plus `Generic` for error names the table does not know.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(ErrorDetails),
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(ErrorDetails),
    #[error("Invalid OAuth signature: {0}")]
    InvalidOauthSignature(ErrorDetails),
    #[error("Invalid OAuth version: {0}")]
    InvalidOauthVersion(ErrorDetails),
    #[error("Invalid OAuth token: {0}")]
    InvalidOauthToken(ErrorDetails),
    #[error("Unsupported signature method: {0}")]
    UnsupportedSignatureMethod(ErrorDetails),
    #[error("Invalid OAuth consumer: {0}")]
    InvalidOauthConsumer(ErrorDetails),
    #[error("OAuth request expired: {0}")]
    TimeExpired(ErrorDetails),
    #[error("Access denied: {0}")]
    AccessDenied(ErrorDetails),
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(ErrorDetails),
    #[error("User not found: {0}")]
    UserNotFound(ErrorDetails),
    #[error("Call not found: {0}")]
    CallNotFound(ErrorDetails),
    #[error("API error: {0}")]
    Generic(ErrorDetails),
}

impl RequestError {
    pub fn details(&self) -> &ErrorDetails {
        match self {
            RequestError::InvalidParameters(d)
            | RequestError::RateLimitExceeded(d)
            | RequestError::InvalidOauthSignature(d)
            | RequestError::InvalidOauthVersion(d)
            | RequestError::InvalidOauthToken(d)
            | RequestError::UnsupportedSignatureMethod(d)
            | RequestError::InvalidOauthConsumer(d)
            | RequestError::TimeExpired(d)
            | RequestError::AccessDenied(d)
            | RequestError::InsufficientPrivileges(d)
            | RequestError::UserNotFound(d)
            | RequestError::CallNotFound(d)
            | RequestError::Generic(d) => d,
        }
    }

    pub fn code(&self) -> &str {
        &self.details().code
    }

    pub fn payload(&self) -> &Value {
        &self.details().payload
    }

    pub fn http_status(&self) -> u16 {
        self.details().http_status
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration field '{field}' is missing")]
    MissingField { field: String, hint: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "critical",
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "info",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Request(request_error) => match request_error {
                RequestError::InvalidOauthSignature(_)
                | RequestError::InvalidOauthVersion(_)
                | RequestError::InvalidOauthToken(_)
                | RequestError::InvalidOauthConsumer(_)
                | RequestError::UnsupportedSignatureMethod(_)
                | RequestError::AccessDenied(_) => ErrorSeverity::High,
                RequestError::Generic(d) if d.http_status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Transport(transport_error) => match transport_error {
                TransportError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Decode(_) => ErrorSeverity::High,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Cli(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Request(RequestError::RateLimitExceeded(_)) => {
                "XING rate limit exceeded".to_string()
            }
            AppError::Request(RequestError::InvalidOauthToken(_)) => {
                "OAuth token invalid or revoked".to_string()
            }
            AppError::Request(RequestError::UserNotFound(_)) => "User not found".to_string(),
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Request(
                RequestError::InvalidOauthToken(_) | RequestError::InvalidOauthSignature(_),
            ) => Some(
                "Check XING_OAUTH_TOKEN and XING_OAUTH_TOKEN_SECRET, then try again".to_string(),
            ),
            AppError::Request(RequestError::InvalidOauthConsumer(_)) => Some(
                "Check XING_CONSUMER_KEY and XING_CONSUMER_SECRET, then try again".to_string(),
            ),
            AppError::Request(RequestError::TimeExpired(_)) => {
                Some("Check that the system clock is correct".to_string())
            }
            AppError::Request(RequestError::RateLimitExceeded(_)) => {
                Some("Wait a moment before sending more requests".to_string())
            }
            AppError::Transport(TransportError::Timeout { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            _ => None,
        }
    }
}
