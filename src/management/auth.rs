use reqwest::Client;
use tokio::sync::RwLock;

use crate::{Result, config::Config, info, soundcloud, types::TokenInfo, utils};

/// Seconds subtracted from the provider TTL so a token never expires while a
/// search using it is in flight.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    fetched_at: i64,
    expires_at: i64,
}

impl CachedToken {
    fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

/// `fetched_at + (ttl - margin)` in milliseconds. A TTL at or below the margin
/// yields a token that is stale right away.
fn expiry(fetched_at: i64, expires_in_secs: i64) -> i64 {
    let usable_secs = expires_in_secs.saturating_sub(EXPIRY_MARGIN_SECS);
    fetched_at.saturating_add(usable_secs.saturating_mul(1000))
}

/// In-memory cache of the client-credentials token.
///
/// One instance lives for the whole process and is shared by every request.
/// The lock only guards the read and the write of the cached value and is
/// never held across the token exchange, so two requests that both see a
/// stale token each fetch a new one and the last writer wins. That costs at
/// most a redundant exchange; a reader never observes a half-written token.
pub struct TokenManager {
    client: Client,
    config: Config,
    token: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(config: &Config, client: Client) -> Self {
        TokenManager {
            client,
            config: config.clone(),
            token: RwLock::new(None),
        }
    }

    /// Returns the cached token while it is valid, otherwise fetches a new one.
    pub async fn get(&self) -> Result<TokenInfo> {
        let now = utils::now_millis();
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_valid_at(now) {
                return Ok(TokenInfo {
                    access_token: token.access_token.clone(),
                    cached: true,
                    fetched_at: token.fetched_at,
                });
            }
        }

        self.refresh().await
    }

    /// Unconditionally exchanges the credentials for a new token and caches it.
    pub async fn refresh(&self) -> Result<TokenInfo> {
        let now = utils::now_millis();
        let response =
            soundcloud::auth::exchange_client_credentials(&self.client, &self.config).await?;

        let token = CachedToken {
            access_token: response.access_token,
            fetched_at: now,
            expires_at: expiry(now, response.expires_in),
        };
        info!(
            "Fetched new SoundCloud token (valid for {}s)",
            response.expires_in
        );

        let info = TokenInfo {
            access_token: token.access_token.clone(),
            cached: false,
            fetched_at: token.fetched_at,
        };
        *self.token.write().await = Some(token);

        Ok(info)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
