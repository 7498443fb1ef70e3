//! # SoundCloud Integration Module
//!
//! Outbound calls against the SoundCloud API. The module is deliberately thin:
//! every function performs exactly one HTTP request, checks the status code and
//! decodes the JSON body. Nothing is retried; failures surface as
//! [`crate::Error::Authorization`] or [`crate::Error::Search`] and are turned
//! into a `502` response by the HTTP layer.
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 client-credentials exchange
//! - [`tracks`] - Track search with limit/offset pagination
//!
//! ## Endpoints
//!
//! - `POST {token_url}` - Basic auth with `client_id:client_secret`, form body
//!   `grant_type=client_credentials`
//! - `GET {api_url}/tracks?q=..&limit=..&offset=..` - Bearer token
//!
//! Both base URLs come from [`crate::config::Config`], which lets tests point
//! the proxy at a local fake.

pub mod auth;
pub mod tracks;
