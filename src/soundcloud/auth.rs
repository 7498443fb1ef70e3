use reqwest::Client;

use crate::{Error, Result, config::Config, types::TokenResponse};

/// Exchanges the configured client credentials for an access token.
///
/// Sends `grant_type=client_credentials` as a form body to the token endpoint,
/// authenticating with HTTP Basic auth of `client_id:client_secret`.
///
/// # Errors
///
/// Returns [`Error::Authorization`] when the request cannot be sent, the
/// endpoint answers with a non-success status or the body lacks a string
/// `access_token` or an integer `expires_in`.
///
/// # Example
///
/// ```
/// let token = exchange_client_credentials(&Client::new(), &config).await?;
/// println!("token valid for {} seconds", token.expires_in);
/// ```
pub async fn exchange_client_credentials(
    client: &Client,
    config: &Config,
) -> Result<TokenResponse> {
    let response = client
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(Error::Authorization)?;

    response
        .json::<TokenResponse>()
        .await
        .map_err(Error::Authorization)
}
