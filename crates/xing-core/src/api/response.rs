//! Raw responses and content-aware decoding

use crate::error::DecodeError;
use serde_json::Value;

/// Response as handed back by a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    body: Option<String>,
}

impl Response {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    fn has_body(&self) -> bool {
        self.body().is_some_and(|b| !b.trim().is_empty())
    }

    /// The body parsed as JSON, or `None` when there is no body to parse.
    pub fn json(&self) -> Option<Result<Value, serde_json::Error>> {
        self.body()
            .filter(|_| self.has_body())
            .map(serde_json::from_str)
    }
}

/// How the caller wants the body interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    #[default]
    Json,
    Text,
}

impl ContentType {
    /// `"text"` selects raw text; any other declaration, or none, means JSON.
    pub fn from_declared(declared: Option<&str>) -> Self {
        match declared {
            Some("text") => ContentType::Text,
            _ => ContentType::Json,
        }
    }
}

/// Decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Empty,
    Text(String),
    Structured(Value),
}

impl Decoded {
    pub fn is_empty(&self) -> bool {
        matches!(self, Decoded::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Decoded::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Decoded::Structured(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            Decoded::Structured(v) => Some(v),
            _ => None,
        }
    }
}

/// Decode `response` according to `content_type`.
///
/// An empty body short-circuits to [`Decoded::Empty`] before the content
/// type is looked at. Malformed JSON is an error, never a partial value.
pub fn decode(response: &Response, content_type: ContentType) -> Result<Decoded, DecodeError> {
    let Some(body) = response.body().filter(|_| response.has_body()) else {
        return Ok(Decoded::Empty);
    };

    match content_type {
        ContentType::Text => Ok(Decoded::Text(body.to_string())),
        ContentType::Json => Ok(Decoded::Structured(serde_json::from_str(body)?)),
    }
}
