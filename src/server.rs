use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tokio::net::TcpListener;

use crate::{Res, api};

/// Routes of the mock wire API: `GET /health` and `POST /echo`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/echo", post(api::echo))
}

/// Binds `addr` and serves the mock API until ctrl-c.
pub async fn start_api_server(addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

/// Serves the mock API on an already bound listener.
pub async fn serve(listener: TcpListener) -> Res<()> {
    axum::serve(listener, router()).await?;
    Ok(())
}
