use reqwest::Client;

use crate::{
    Error, Result,
    config::Config,
    types::{Pagination, SoundCloudTrack},
};

/// Searches SoundCloud tracks matching `query`.
///
/// The query, `limit` and `offset` are sent as URL-encoded query parameters and
/// the token as a bearer credential. Tracks are returned in upstream order.
///
/// # Errors
///
/// Returns [`Error::Search`] on network failures, non-success statuses and
/// bodies that are not a JSON array of track objects.
pub async fn search_tracks(
    client: &Client,
    config: &Config,
    token: &str,
    query: &str,
    pagination: &Pagination,
) -> Result<Vec<SoundCloudTrack>> {
    let api_url = format!("{uri}/tracks", uri = config.api_url);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("q", query.to_string()),
            ("limit", pagination.limit.to_string()),
            ("offset", pagination.offset.to_string()),
        ])
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(Error::Search)?;

    response
        .json::<Vec<SoundCloudTrack>>()
        .await
        .map_err(Error::Search)
}
