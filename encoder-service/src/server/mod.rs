// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use self::state::AppState;
use crate::sidecar::SidecarRunner;

/// Create the Axum application router with all routes and middleware
///
/// `/encode` only accepts `POST`; other methods get 405.
pub fn create_app(sidecar: SidecarRunner) -> Router {
    let state = AppState { sidecar };

    Router::new()
        .route("/encode", post(handlers::encode_handler))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server on the specified address
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app).await
}

/// Serve the app on an already bound listener
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Server listening on {}", addr);
    info!("- Encode endpoint: http://{}/encode", addr);
    info!("- Health endpoint: http://{}/health", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
