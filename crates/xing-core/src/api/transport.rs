use super::params::ParameterSet;
use super::response::Response;
use crate::error::TransportError;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// HTTP verbs supported by the XING API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Read verbs carry their parameters in the query string, all others in the body.
    pub fn is_read(&self) -> bool {
        matches!(self, Verb::Get)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Verb::Get),
            "post" => Ok(Verb::Post),
            "put" => Ok(Verb::Put),
            "delete" => Ok(Verb::Delete),
            other => Err(format!("unsupported verb '{}'", other)),
        }
    }
}

/// Sends signed requests to the provider.
///
/// Implementations own authentication, connection handling and timeouts.
/// A transport returns a [`Response`] for every HTTP status it receives and
/// only fails when no response could be obtained.
#[async_trait]
pub trait AuthenticatedTransport: Send + Sync {
    async fn transmit(
        &self,
        verb: Verb,
        url: &str,
        body: Option<&ParameterSet>,
    ) -> Result<Response, TransportError>;
}

#[async_trait]
impl<T: AuthenticatedTransport + ?Sized> AuthenticatedTransport for std::sync::Arc<T> {
    async fn transmit(
        &self,
        verb: Verb,
        url: &str,
        body: Option<&ParameterSet>,
    ) -> Result<Response, TransportError> {
        (**self).transmit(verb, url, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_get_is_read() {
        assert!(Verb::Get.is_read());
        assert!(!Verb::Post.is_read());
        assert!(!Verb::Put.is_read());
        assert!(!Verb::Delete.is_read());
    }

    #[test]
    fn test_verb_parse() {
        assert_eq!("get".parse::<Verb>(), Ok(Verb::Get));
        assert_eq!("POST".parse::<Verb>(), Ok(Verb::Post));
        assert_eq!("Delete".parse::<Verb>(), Ok(Verb::Delete));
        assert!("patch".parse::<Verb>().is_err());
        assert_eq!(Verb::Put.to_string(), "PUT");
    }
}
