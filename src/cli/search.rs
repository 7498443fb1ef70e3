use reqwest::Client;
use tabled::Table;

use crate::{api, config::Config, error, info, management::TokenManager, utils, warning};

pub async fn search(
    config: Config,
    query: String,
    limit: Option<i64>,
    page: Option<i64>,
    offset: Option<i64>,
) {
    if query.is_empty() {
        error!("Search query must not be empty");
    }

    let manager = TokenManager::new(&config, Client::new());
    let pagination = utils::build_pagination(limit, offset, page);

    let response = match api::run_search(&manager, &query, pagination).await {
        Ok(response) => response,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    if response.list.is_empty() {
        warning!("No tracks found for {:?}", response.query);
        return;
    }

    let rows = utils::track_table_rows(&response.list);
    println!("{}", Table::new(rows));
    info!(
        "Showing {} tracks (offset {}). Next page: --offset {}",
        response.list.len(),
        response.pagination.offset,
        response.pagination.next_offset
    );
}
