use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_gateway::controllers::tts::TtsController;
use tts_gateway::domain::tts::TtsService;
use tts_gateway::infrastructure::config::{Config, LogFormat};
use tts_gateway::infrastructure::http::start_http_server;
use tts_gateway::infrastructure::providers::VolcanoTtsProvider;
use tts_gateway::infrastructure::store::AudioStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting TTS gateway on {}:{}", config.host, config.port);

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // Provider client → audio store → synthesis service → controller;
    // the synthesis routes only exist when credentials are configured
    let tts_controller = if config.synthesis_enabled() {
        let provider = Arc::new(VolcanoTtsProvider::new(
            config.app_id.clone(),
            config.access_key.clone(),
            config.cluster.clone(),
            config.provider_url.clone(),
        ));
        let store = Arc::new(AudioStore::new(&config.audio_dir));
        let tts_service = Arc::new(TtsService::new(provider, store));

        tracing::info!(
            audio_dir = %config.audio_dir,
            cluster = %config.cluster,
            "TTS service enabled"
        );

        Some(Arc::new(TtsController::new(tts_service)))
    } else {
        tracing::warn!("TTS service disabled - missing configuration");
        None
    };

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
