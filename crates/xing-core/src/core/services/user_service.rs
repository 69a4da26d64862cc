//! User calls on top of [`Request`]

use crate::Result;
use crate::api::params::ParameterSet;
use crate::api::request::Request;
use crate::api::response::{ContentType, Decoded};
use crate::api::transport::{AuthenticatedTransport, Verb};
use crate::utils::validation::validate_user_id;
use serde_json::Value;

/// User service for profile, contact and status calls
pub struct UserService<T> {
    request: Request<T>,
}

impl<T: AuthenticatedTransport> UserService<T> {
    pub fn new(request: Request<T>) -> Self {
        Self { request }
    }

    /// Profile of the authorizing user
    pub async fn me(&self, user_fields: Option<&str>) -> Result<Value> {
        self.user("me", user_fields).await
    }

    /// Profile of one user; `user_fields` of `None` asks for every field
    pub async fn user(&self, user_id: &str, user_fields: Option<&str>) -> Result<Value> {
        validate_user_id(user_id)?;
        let params = ParameterSet::new().with("user_fields", user_fields);
        self.get(&format!("v1/users/{}", user_id), &params).await
    }

    /// One page of a user's contacts
    pub async fn contacts(
        &self,
        user_id: &str,
        limit: Option<u32>,
        offset: Option<u32>,
        user_fields: Option<&str>,
    ) -> Result<Value> {
        validate_user_id(user_id)?;
        let mut params = ParameterSet::new();
        if let Some(limit) = limit {
            params.insert("limit", limit);
        }
        params.insert("offset", offset);
        params.insert("user_fields", user_fields);

        self.get(&format!("v1/users/{}/contacts", user_id), &params)
            .await
    }

    /// Replace the user's status message
    pub async fn update_status_message(&self, user_id: &str, message: &str) -> Result<()> {
        validate_user_id(user_id)?;
        let params = ParameterSet::new().with("message", message);
        self.request
            .execute(
                Verb::Post,
                &format!("v1/users/{}/status_message", user_id),
                Some(&params),
                ContentType::Text,
            )
            .await?;
        Ok(())
    }

    async fn get(&self, endpoint: &str, params: &ParameterSet) -> Result<Value> {
        let decoded = self
            .request
            .execute(Verb::Get, endpoint, Some(params), ContentType::Json)
            .await?;

        Ok(match decoded {
            Decoded::Structured(value) => value,
            Decoded::Text(text) => Value::String(text),
            Decoded::Empty => Value::Null,
        })
    }
}
