//! # xing-core
//!
//! Request-execution core for the XING REST API.
//!
//! Every call goes through one pipeline: provider defaults are filled in,
//! parameters are encoded per verb, the call is sent through an
//! [`AuthenticatedTransport`](api::transport::AuthenticatedTransport), and the
//! body is decoded or turned into a typed [`RequestError`](error::RequestError).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use xing_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> xing_core::Result<()> {
//!     let config = Config::load(None)?;
//!     let client = ConfigService::new(config).build_client()?;
//!     let request = Request::new(client);
//!
//!     let params = ParameterSet::new().with("user_fields", "id,display_name");
//!     let me = request
//!         .execute(Verb::Get, "v1/users/me", Some(&params), ContentType::Json)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           API Layer                 │  params, defaults, dispatch, decoding, errors
//! ├─────────────────────────────────────┤
//! │          Core Layer                 │  services wrapping API calls
//! ├─────────────────────────────────────┤
//! │        Storage Layer                │  configuration, OAuth credentials
//! ├─────────────────────────────────────┤
//! │         Utils Layer                 │  validation, logging, error helpers
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{AppError, RequestError};

    pub use crate::api::client::XingClient;
    pub use crate::api::params::{ParamValue, ParameterSet};
    pub use crate::api::request::Request;
    pub use crate::api::response::{ContentType, Decoded};
    pub use crate::api::transport::{AuthenticatedTransport, Verb};

    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::user_service::UserService;

    pub use crate::storage::config::Config;
    pub use crate::storage::credentials::OAuthCredentials;
}

/// API layer - the request pipeline and the reqwest transport.
///
/// - [`api::params`]: parameter sets and query encoding
/// - [`api::defaults`]: provider-mandated defaults
/// - [`api::request`]: verb-aware dispatch
/// - [`api::response`]: content-aware decoding
/// - [`api::error_mapper`]: error payload classification
pub mod api;

/// Business logic layer - services built on [`api::request::Request`].
pub mod core;

/// Storage layer - configuration and credentials.
pub mod storage;

/// Utilities layer - validation, logging and error helpers.
pub mod utils;

/// Error handling - hierarchical error system.
///
/// - Provider errors as one [`error::RequestError`] variant per known error name
/// - Severity levels and troubleshooting hints
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
