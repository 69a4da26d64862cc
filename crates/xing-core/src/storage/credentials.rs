//! OAuth credential management
//!
//! Credentials come from the environment. Obtaining them (the OAuth
//! handshake) happens elsewhere; this module only reads what it produced.

use crate::error::ConfigError;
use std::env;

pub const CONSUMER_KEY_VAR: &str = "XING_CONSUMER_KEY";
pub const CONSUMER_SECRET_VAR: &str = "XING_CONSUMER_SECRET";
pub const OAUTH_TOKEN_VAR: &str = "XING_OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET_VAR: &str = "XING_OAUTH_TOKEN_SECRET";

/// Consumer and access token pair used to sign requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl OAuthCredentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Read all four values from the environment.
    ///
    /// `consumer_key` overrides `XING_CONSUMER_KEY` when given.
    pub fn from_env(consumer_key: Option<&str>) -> Result<Self, ConfigError> {
        let consumer_key = match consumer_key.filter(|k| !k.is_empty()) {
            Some(key) => key.to_string(),
            None => require_var(CONSUMER_KEY_VAR)?,
        };

        Ok(Self {
            consumer_key,
            consumer_secret: require_var(CONSUMER_SECRET_VAR)?,
            token: require_var(OAUTH_TOKEN_VAR)?,
            token_secret: require_var(OAUTH_TOKEN_SECRET_VAR)?,
        })
    }
}

/// Get a non-empty environment variable
pub fn get_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Check if a full set of credentials is configured
pub fn has_credentials() -> bool {
    [
        CONSUMER_KEY_VAR,
        CONSUMER_SECRET_VAR,
        OAUTH_TOKEN_VAR,
        OAUTH_TOKEN_SECRET_VAR,
    ]
    .iter()
    .all(|name| get_var(name).is_some())
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    get_var(name).ok_or_else(|| ConfigError::MissingField {
        field: name.to_string(),
        hint: format!("export {}=<value> and try again", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below touch process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 4] = [
        CONSUMER_KEY_VAR,
        CONSUMER_SECRET_VAR,
        OAUTH_TOKEN_VAR,
        OAUTH_TOKEN_SECRET_VAR,
    ];

    fn with_env<F: FnOnce()>(values: &[(&str, &str)], test: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        // Save original state
        let original: Vec<_> = ALL_VARS.iter().map(|n| (*n, env::var(n).ok())).collect();

        unsafe {
            for name in ALL_VARS {
                env::remove_var(name);
            }
            for (name, value) in values {
                env::set_var(name, value);
            }
        }

        test();

        // Restore original state
        unsafe {
            for (name, value) in original {
                match value {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn test_from_env_when_set() {
        with_env(
            &[
                (CONSUMER_KEY_VAR, "ck"),
                (CONSUMER_SECRET_VAR, "cs"),
                (OAUTH_TOKEN_VAR, "tk"),
                (OAUTH_TOKEN_SECRET_VAR, "ts"),
            ],
            || {
                assert!(has_credentials());
                assert_eq!(
                    OAuthCredentials::from_env(None).unwrap(),
                    OAuthCredentials::new("ck", "cs", "tk", "ts")
                );
            },
        );
    }

    #[test]
    fn test_consumer_key_override() {
        with_env(
            &[
                (CONSUMER_SECRET_VAR, "cs"),
                (OAUTH_TOKEN_VAR, "tk"),
                (OAUTH_TOKEN_SECRET_VAR, "ts"),
            ],
            || {
                assert!(!has_credentials());
                let creds = OAuthCredentials::from_env(Some("from_config")).unwrap();
                assert_eq!(creds.consumer_key, "from_config");
            },
        );
    }

    #[test]
    fn test_from_env_when_empty_or_missing() {
        with_env(&[(CONSUMER_KEY_VAR, ""), (CONSUMER_SECRET_VAR, "cs")], || {
            assert_eq!(get_var(CONSUMER_KEY_VAR), None);
            match OAuthCredentials::from_env(None) {
                Err(ConfigError::MissingField { field, .. }) => {
                    assert_eq!(field, CONSUMER_KEY_VAR)
                }
                other => panic!("expected MissingField, got {:?}", other),
            }
        });
    }
}
