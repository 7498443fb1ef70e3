use crate::{config::Config, error, server};

pub async fn serve(config: Config, addr: Option<String>) {
    let config = match addr {
        Some(addr) => config.with_server_address(addr),
        None => config,
    };

    if let Err(e) = server::start_api_server(config).await {
        error!("Search proxy stopped. Err: {}", e);
    }
}
