use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::{
    domain::tts::{TtsService, TtsServiceApi},
    error::{AppError, AppResult},
    infrastructure::store::AudioFileEntry,
};

/// Query parameters for GET /capi/tts/tts
#[derive(Debug, Deserialize)]
pub struct SynthesizeParams {
    #[serde(default)]
    pub text: String,
}

/// Response for GET /capi/tts/tts/files
#[derive(Debug, Serialize)]
pub struct FileListResponse {
    pub files: Vec<AudioFileEntry>,
    pub count: usize,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// GET /capi/tts/tts - synthesize text and serve the cached audio
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Query(params): Query<SynthesizeParams>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let outcome = controller
            .tts_service
            .synthesize(&params.text)
            .await
            .map_err(AppError::from)?;

        // Headers for inline playback with client-side seeking
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("inline"),
        );
        headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));

        Ok((StatusCode::OK, headers, Body::from(outcome.audio)))
    }

    /// GET /capi/tts/tts/files - list cached audio artifacts
    pub async fn list_files(
        State(controller): State<Arc<TtsController>>,
    ) -> AppResult<Json<FileListResponse>> {
        let files = controller
            .tts_service
            .list_files()
            .await
            .map_err(|e| AppError::Listing(e.to_string()))?;

        let count = files.len();

        Ok(Json(FileListResponse { files, count }))
    }
}

/// GET /capi/tts/status - mounted instead of the synthesis routes when
/// provider credentials are missing
pub async fn status() -> impl IntoResponse {
    Json(json!({
        "status": "disabled",
        "message": "TTS service is disabled. Please configure environment variables.",
        "required_env": [
            "VOLCENGINE_TTS_APP_ID",
            "VOLCENGINE_TTS_ACCESS_KEY",
            "TTS_ENABLED=true",
        ],
    }))
}
