use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    http::{Method, header},
    routing::any,
};
use reqwest::Client;
use tower_http::cors::{Any, CorsLayer};

use crate::{Error, Result, api, config::Config, info, management::TokenManager};

/// Shared state of the Axum application.
#[derive(Clone)]
pub struct AppState {
    pub token_manager: Arc<TokenManager>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            token_manager: Arc::new(TokenManager::new(config, Client::new())),
        }
    }
}

/// Permissive CORS so browser clients can call the proxy directly.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", any(api::search))
        .fallback(api::not_found)
        .layer(cors_layer())
        .with_state(state)
}

/// Binds `config.server_address` and serves the proxy until the process stops.
pub async fn start_api_server(config: Config) -> Result<()> {
    let addr = SocketAddr::from_str(&config.server_address).map_err(|e| {
        Error::Config(format!(
            "invalid server address {:?}: {}",
            config.server_address, e
        ))
    })?;

    let app = router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Search proxy listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
