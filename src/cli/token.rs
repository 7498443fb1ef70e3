use reqwest::Client;

use crate::{config::Config, error, management::TokenManager, success, utils};

/// Exchanges the configured credentials once. Useful to verify secrets
/// before deploying; the token itself is never printed.
pub async fn token(config: Config) {
    let manager = TokenManager::new(&config, Client::new());

    match manager.get().await {
        Ok(token) => success!(
            "Token fetched at {} ({} characters)",
            utils::format_time(token.fetched_at),
            token.access_token.len()
        ),
        Err(e) => error!("Cannot fetch token. Err: {}", e),
    }
}
