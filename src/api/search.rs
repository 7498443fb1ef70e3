use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    Result,
    management::TokenManager,
    server::AppState,
    soundcloud,
    types::{ErrorResponse, Pagination, SearchResponse, TokenMeta},
    utils, warning,
};

pub const MISSING_QUERY: &str = "missing q";

/// `/search` handler, served for every method.
///
/// Requires a non-empty `q`; pagination is resolved by
/// [`utils::pagination_from_query`]. A repeated key resolves to its first
/// value. Upstream failures become a `502` with a `{code, message}` body.
pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = utils::first_values(pairs);
    let Some(query) = params.get("q").filter(|q| !q.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                code: StatusCode::BAD_REQUEST.as_u16(),
                message: MISSING_QUERY.to_string(),
            }),
        )
            .into_response();
    };

    let pagination = utils::pagination_from_query(&params);

    match run_search(&state.token_manager, query, pagination).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warning!("Search for {:?} failed: {}", query, e);
            e.into_response()
        }
    }
}

/// Resolves a token, queries SoundCloud and assembles the response payload.
///
/// The token is awaited first since the search depends on it.
pub async fn run_search(
    tokens: &TokenManager,
    query: &str,
    pagination: Pagination,
) -> Result<SearchResponse> {
    let token = tokens.get().await?;

    let tracks = soundcloud::tracks::search_tracks(
        tokens.client(),
        tokens.config(),
        &token.access_token,
        query,
        &pagination,
    )
    .await?;

    Ok(SearchResponse {
        code: StatusCode::OK.as_u16(),
        query: query.to_string(),
        pagination,
        token: TokenMeta {
            cached: token.cached,
            fetched_time: utils::format_time(token.fetched_at),
            fetched_timestamp: token.fetched_at,
        },
        list: utils::normalize_tracks(&tracks),
    })
}
