use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, tts};
use crate::controllers::tts::TtsController;
use crate::infrastructure::config::Config;

mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router.
///
/// When no TTS controller is supplied (missing provider credentials or the
/// feature flag is off), the synthesis routes are replaced by a status
/// endpoint describing how to enable the service.
pub fn build_router(tts_controller: Option<Arc<TtsController>>) -> Router {
    let tts_routes = match tts_controller {
        Some(controller) => Router::new()
            .route("/capi/tts/tts", get(TtsController::synthesize))
            .route("/capi/tts/tts/files", get(TtsController::list_files))
            .with_state(controller),
        None => Router::new().route("/capi/tts/status", get(tts::status)),
    };

    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(tts_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Option<Arc<TtsController>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
