//! # API Module
//!
//! HTTP handlers of the search proxy, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`search`] - `/search?q=..&limit=..&offset=..|&page=..&pageSize=..`
//!   (any method; only the query string is read)
//!   resolves a SoundCloud token, forwards the search and answers with the
//!   normalized track list, the resolved pagination and token metadata.
//! - [`not_found`] - fallback for every other path, `404 "Not Found"`.
//!
//! ## Errors
//!
//! Client input errors are answered with `400` and `{"code":400,"message":"missing q"}`.
//! [`crate::Error`] implements [`axum::response::IntoResponse`]; upstream
//! failures map to `502`, local ones to `500`, both with a `{code, message}`
//! JSON body.

mod error;
mod search;

use axum::http::StatusCode;

pub use search::{MISSING_QUERY, run_search, search};

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
