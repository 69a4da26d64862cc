//! OAuth 1.0a request signing (PLAINTEXT method)

use crate::storage::credentials::OAuthCredentials;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

const SIGNATURE_METHOD: &str = "PLAINTEXT";
const OAUTH_VERSION: &str = "1.0";

static NONCE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// PLAINTEXT signature: `consumer_secret&token_secret`, each percent-encoded
pub fn plaintext_signature(credentials: &OAuthCredentials) -> String {
    format!(
        "{}&{}",
        urlencoding::encode(&credentials.consumer_secret),
        urlencoding::encode(&credentials.token_secret)
    )
}

/// Build the `Authorization` header value for one request
pub fn authorization_header(credentials: &OAuthCredentials, nonce: &str, timestamp: i64) -> String {
    let timestamp = timestamp.to_string();
    let signature = plaintext_signature(credentials);
    let fields = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_token", credentials.token.as_str()),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_signature", signature.as_str()),
        ("oauth_timestamp", timestamp.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_version", OAUTH_VERSION),
    ];

    let params = fields
        .iter()
        .map(|(k, v)| format!("{k}=\"{}\"", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {}", params)
}

/// Header for a request sent now, with a fresh nonce
pub fn sign_now(credentials: &OAuthCredentials) -> String {
    let now = Utc::now();
    let nonce = format!(
        "{:x}{:x}",
        now.timestamp_nanos_opt().unwrap_or_default(),
        NONCE_COUNTER.fetch_add(1, Ordering::Relaxed)
    );
    authorization_header(credentials, &nonce, now.timestamp())
}
