use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wiremock::MockServer;

use tts_gateway::controllers::tts::TtsController;
use tts_gateway::domain::tts::TtsService;
use tts_gateway::infrastructure::http::build_router;
use tts_gateway::infrastructure::providers::VolcanoTtsProvider;
use tts_gateway::infrastructure::store::AudioStore;

pub mod api_client;

use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    pub provider: MockServer,
    pub audio_dir: TempDir,
}

impl TestContext {
    /// Spin up the gateway with a mock provider and a fresh audio directory
    pub async fn new() -> Result<Self> {
        let provider = MockServer::start().await;
        let audio_dir = tempfile::tempdir()?;

        let tts_provider = Arc::new(VolcanoTtsProvider::new(
            "test_app".to_string(),
            "test_key".to_string(),
            "volcano_tts".to_string(),
            provider.uri(),
        ));
        let store = Arc::new(AudioStore::new(audio_dir.path()));
        let tts_service = Arc::new(TtsService::new(tts_provider, store));
        let tts_controller = Arc::new(TtsController::new(tts_service));

        let client = serve(build_router(Some(tts_controller))).await?;

        Ok(Self {
            client,
            provider,
            audio_dir,
        })
    }

    /// Spin up the gateway as it runs without provider credentials
    pub async fn new_disabled() -> Result<Self> {
        let provider = MockServer::start().await;
        let audio_dir = tempfile::tempdir()?;

        let client = serve(build_router(None)).await?;

        Ok(Self {
            client,
            provider,
            audio_dir,
        })
    }
}

async fn serve(app: axum::Router) -> Result<TestClient> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(TestClient::new(&format!("http://{addr}")))
}
