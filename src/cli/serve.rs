use crate::{config, error, info, server, success};

pub async fn serve(addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    info!("Mock wire API listening on http://{}", addr);

    match server::start_api_server(&addr).await {
        Ok(()) => success!("Mock wire API shut down"),
        Err(e) => error!("Mock wire API stopped. Err: {}", e),
    }
}
