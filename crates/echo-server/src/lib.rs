//! Fixed-response HTTP server used as a load-generation target.
//!
//! Every request, whatever its method, path, headers or body, is answered
//! with `200 OK`, `Content-Type: application/json` and `{"Test":true}`.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use error::ServerError;

/// Creates the router. The responder is the fallback, so it sees every request.
pub fn create_app() -> Router {
    Router::new()
        .fallback(routes::echo::respond)
        .layer(TraceLayer::new_for_http())
}

/// Binds a listener on the configured address.
pub async fn bind(config: &config::Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves `app` on an already-bound listener until the process is stopped.
///
/// Each accepted connection is handled on its own task.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
