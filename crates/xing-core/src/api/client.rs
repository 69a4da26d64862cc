use super::oauth::sign_now;
use super::params::ParameterSet;
use super::response::Response;
use super::transport::{AuthenticatedTransport, Verb};
use crate::error::TransportError;
use crate::storage::credentials::OAuthCredentials;
use crate::utils::error_helpers::*;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.xing.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("xing-cli/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed transport that signs every request with OAuth 1.0a
#[derive(Debug, Clone)]
pub struct XingClient {
    client: Client,
    pub base_url: String,
    pub credentials: Option<OAuthCredentials>,
    timeout_secs: u64,
}

impl XingClient {
    // Create baseClient with default settings
    pub fn new(base_url: String) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_secs))?;

        Ok(XingClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            timeout_secs,
        })
    }

    pub fn with_credentials(
        base_url: String,
        credentials: OAuthCredentials,
    ) -> Result<Self, TransportError> {
        let mut client = XingClient::new(base_url)?;
        client.credentials = Some(credentials);
        Ok(client)
    }

    pub fn set_credentials(&mut self, credentials: OAuthCredentials) {
        self.credentials = Some(credentials);
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Absolute URLs are used as given, anything else is taken relative to `base_url`.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    pub fn build_request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self.client.request(method, self.resolve_url(path));

        if let Some(credentials) = &self.credentials {
            request = request.header(AUTHORIZATION, sign_now(credentials));
        }

        request
    }
}

fn method_for(verb: Verb) -> Method {
    match verb {
        Verb::Get => Method::GET,
        Verb::Post => Method::POST,
        Verb::Put => Method::PUT,
        Verb::Delete => Method::DELETE,
    }
}

#[async_trait]
impl AuthenticatedTransport for XingClient {
    async fn transmit(
        &self,
        verb: Verb,
        url: &str,
        body: Option<&ParameterSet>,
    ) -> Result<Response, TransportError> {
        let mut request = self.build_request(method_for(verb), url);

        if let Some(params) = body {
            request = request.form(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| convert_request_error(e, url, self.timeout_secs))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| convert_body_error(e, url, status))?;

        Ok(Response::new(status, Some(text).filter(|t| !t.is_empty())))
    }
}
