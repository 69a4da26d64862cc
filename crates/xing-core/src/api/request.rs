//! Request dispatch
//!
//! [`Request`] turns a logical call (verb, endpoint, parameters) into a single
//! transmission over an [`AuthenticatedTransport`] and hands back the decoded
//! body, or the typed error the provider reported.

use super::defaults::resolve_defaults;
use super::error_mapper;
use super::params::{ParameterSet, encode_query};
use super::response::{ContentType, Decoded, Response, decode};
use super::transport::{AuthenticatedTransport, Verb};
use crate::Result;
use crate::error::DecodeError;

#[derive(Debug, Clone)]
pub struct Request<T> {
    transport: T,
}

impl<T: AuthenticatedTransport> Request<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute one call against the API.
    ///
    /// GET parameters are encoded into the URL; every other verb sends them
    /// as the body with the URL left as given.
    pub async fn execute(
        &self,
        verb: Verb,
        endpoint: &str,
        params: Option<&ParameterSet>,
        content_type: ContentType,
    ) -> Result<Decoded> {
        let params = resolve_defaults(params);
        let response = self.dispatch(verb, endpoint, &params).await?;

        log::debug!("{} {} -> HTTP {}", verb, endpoint, response.status);

        // Error payloads are JSON whatever the caller asked for, so the body
        // is parsed once and shared between error mapping and decoding.
        let parsed = response.json();
        if let Some(Ok(payload)) = &parsed {
            let status = response.status;
            error_mapper::check(&status.to_string(), payload, status)?;
        }

        let decoded = match (content_type, parsed) {
            (ContentType::Json, Some(parsed)) => {
                Decoded::Structured(parsed.map_err(DecodeError::from)?)
            }
            _ => decode(&response, content_type)?,
        };

        Ok(decoded)
    }

    async fn dispatch(&self, verb: Verb, endpoint: &str, params: &ParameterSet) -> Result<Response> {
        let response = if verb.is_read() {
            let url = format!("{}{}", endpoint, encode_query(params));
            self.transport.transmit(verb, &url, None).await?
        } else {
            self.transport.transmit(verb, endpoint, Some(params)).await?
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use crate::api::params::ParamValue;
    use crate::error::{RequestError, TransportError};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    struct Transmission {
        verb: Verb,
        url: String,
        body: Option<ParameterSet>,
    }

    struct RecordingTransport {
        response: Response,
        sent: Mutex<Vec<Transmission>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: Option<&str>) -> Self {
            Self {
                response: Response::new(status, body.map(str::to_string)),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<Transmission> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AuthenticatedTransport for RecordingTransport {
        async fn transmit(
            &self,
            verb: Verb,
            url: &str,
            body: Option<&ParameterSet>,
        ) -> std::result::Result<Response, TransportError> {
            self.sent.lock().unwrap().push(Transmission {
                verb,
                url: url.to_string(),
                body: body.cloned(),
            });
            Ok(self.response.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl AuthenticatedTransport for FailingTransport {
        async fn transmit(
            &self,
            _verb: Verb,
            url: &str,
            _body: Option<&ParameterSet>,
        ) -> std::result::Result<Response, TransportError> {
            Err(TransportError::Timeout {
                timeout_secs: 30,
                endpoint: url.to_string(),
            })
        }
    }

    fn params() -> ParameterSet {
        ParameterSet::new().with("param1", "1").with("param2", "2")
    }

    #[tokio::test]
    async fn test_get_adds_params_to_url() {
        let request = Request::new(RecordingTransport::replying(200, None));
        request
            .execute(Verb::Get, "www.test.com", Some(&params()), ContentType::Json)
            .await
            .unwrap();

        assert_eq!(
            request.transport().sent(),
            vec![Transmission {
                verb: Verb::Get,
                url: "www.test.com?param1=1&param2=2".to_string(),
                body: None,
            }]
        );
    }

    #[tokio::test]
    async fn test_post_adds_params_to_body() {
        let request = Request::new(RecordingTransport::replying(201, None));
        request
            .execute(Verb::Post, "www.test.com", Some(&params()), ContentType::Json)
            .await
            .unwrap();

        assert_eq!(
            request.transport().sent(),
            vec![Transmission {
                verb: Verb::Post,
                url: "www.test.com".to_string(),
                body: Some(params()),
            }]
        );
    }

    #[tokio::test]
    async fn test_write_body_is_not_url_encoded() {
        let request = Request::new(RecordingTransport::replying(204, None));
        let body = ParameterSet::new().with("message", "a#b/c d");
        request
            .execute(Verb::Put, "v1/users/1/status_message", Some(&body), ContentType::Json)
            .await
            .unwrap();

        let sent = request.transport().sent();
        assert_eq!(sent[0].url, "v1/users/1/status_message");
        assert_eq!(
            sent[0].body.as_ref().and_then(|b| b.get("message")),
            Some(&ParamValue::Text("a#b/c d".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_without_params_sends_bare_question_mark() {
        let request = Request::new(RecordingTransport::replying(200, None));
        request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap();

        assert_eq!(request.transport().sent()[0].url, "v1/users/me?");
    }

    #[tokio::test]
    async fn test_defaults_are_resolved_before_transmission() {
        let request = Request::new(RecordingTransport::replying(200, None));
        let raw = ParameterSet::new().with("offset", ParamValue::Null);
        request
            .execute(Verb::Post, "v1/anything", Some(&raw), ContentType::Json)
            .await
            .unwrap();

        assert_eq!(
            request.transport().sent()[0].body,
            Some(ParameterSet::new().with("offset", 0i64))
        );
    }

    #[tokio::test]
    async fn test_decodes_json_body() {
        let request = Request::new(RecordingTransport::replying(200, Some(r#"{ "male": true }"#)));
        let decoded = request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap();

        assert_eq!(decoded, Decoded::Structured(json!({"male": true})));
    }

    #[tokio::test]
    async fn test_returns_text_body_untouched() {
        let request = Request::new(RecordingTransport::replying(200, Some("plain text")));
        let decoded = request
            .execute(Verb::Get, "v1/users/me/vcard", None, ContentType::Text)
            .await
            .unwrap();

        assert_eq!(decoded, Decoded::Text("plain text".to_string()));
    }

    #[tokio::test]
    async fn test_maps_provider_error() {
        let request = Request::new(RecordingTransport::replying(
            403,
            Some(r#"{"error_name": "INVALID_OAUTH_TOKEN", "message": "Invalid OAuth token"}"#),
        ));
        let err = request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap_err();

        match err {
            AppError::Request(RequestError::InvalidOauthToken(details)) => {
                assert_eq!(details.code, "403");
                assert_eq!(details.http_status, 403);
                assert_eq!(details.message(), Some("Invalid OAuth token"));
            }
            other => panic!("expected InvalidOauthToken, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_maps_provider_error_for_text_requests() {
        let request = Request::new(RecordingTransport::replying(
            404,
            Some(r#"{"error_name": "SOMETHING_NEW"}"#),
        ));
        let err = request
            .execute(Verb::Get, "v1/users/me/vcard", None, ContentType::Text)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Request(RequestError::Generic(_))));
    }

    #[tokio::test]
    async fn test_error_status_without_indicator_is_not_mapped() {
        let request = Request::new(RecordingTransport::replying(500, Some(r#"{"message": "oops"}"#)));
        let decoded = request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap();

        assert_eq!(decoded, Decoded::Structured(json!({"message": "oops"})));
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_decode_error() {
        let request = Request::new(RecordingTransport::replying(200, Some("<html>")));
        let err = request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Decode(_)));
    }

    #[tokio::test]
    async fn test_blank_body_with_error_status_is_empty() {
        let request = Request::new(RecordingTransport::replying(500, Some("  ")));
        let decoded = request
            .execute(Verb::Delete, "v1/users/me/status_message", None, ContentType::Json)
            .await
            .unwrap();

        assert!(decoded.is_empty());
    }

    #[tokio::test]
    async fn test_requests_share_one_transport() {
        let transport = Arc::new(RecordingTransport::replying(200, Some(r#"{"ok": true}"#)));
        let profile = Request::new(Arc::clone(&transport));
        let contacts = Request::new(Arc::clone(&transport));

        profile
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap();
        let decoded = contacts
            .execute(Verb::Get, "v1/users/me/contacts", None, ContentType::Json)
            .await
            .unwrap();

        assert_eq!(decoded.into_structured(), Some(json!({"ok": true})));
        let urls: Vec<_> = transport.sent().into_iter().map(|t| t.url).collect();
        assert_eq!(urls, vec!["v1/users/me?", "v1/users/me/contacts?"]);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let request = Request::new(FailingTransport);
        let err = request
            .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Transport(TransportError::Timeout { .. })
        ));
    }

    #[tokio::test]
    async fn test_shared_across_tasks() {
        let request = Arc::new(Request::new(RecordingTransport::replying(
            200,
            Some(r#"{"ok": true}"#),
        )));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let request = Arc::clone(&request);
                tokio::spawn(async move {
                    request
                        .execute(Verb::Get, "v1/users/me", None, ContentType::Json)
                        .await
                        .map(|d| d.is_empty())
                })
            })
            .collect();

        for handle in handles {
            assert!(!handle.await.unwrap().unwrap());
        }
        assert_eq!(request.transport().sent().len(), 4);
    }
}
