//! API layer - request pipeline and the HTTP transport

pub mod client;
pub mod defaults;
pub mod error_mapper;
pub mod models;
pub mod oauth;
pub mod params;
pub mod request;
pub mod response;
pub mod transport;
