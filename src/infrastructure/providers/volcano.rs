use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use super::{ProviderError, TtsProvider};

/// The provider signals domain-level success with this embedded code,
/// independent of the HTTP transport status.
const SUCCESS_CODE: i64 = 3000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_VOICE: &str = "en_female_sarah_new_conversation_wvae_bigtts";
const DEFAULT_ENCODING: &str = "mp3";
const DEFAULT_SPEED_RATIO: f64 = 1.0;
const DEFAULT_UID: &str = "default_user";
const OPERATION_QUERY: &str = "query";

/// Volcengine-style synthesis client
pub struct VolcanoTtsProvider {
    client: reqwest::Client,
    app_id: String,
    access_key: String,
    cluster: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    app: AppIdentity<'a>,
    user: UserIdentity<'a>,
    audio: AudioParams<'a>,
    request: RequestParams<'a>,
}

#[derive(Debug, Serialize)]
struct AppIdentity<'a> {
    appid: &'a str,
    token: &'a str,
    cluster: &'a str,
}

#[derive(Debug, Serialize)]
struct UserIdentity<'a> {
    uid: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioParams<'a> {
    voice_type: &'a str,
    encoding: &'a str,
    speed_ratio: f64,
}

#[derive(Debug, Serialize)]
struct RequestParams<'a> {
    reqid: &'a str,
    text: &'a str,
    operation: &'a str,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<String>,
}

impl VolcanoTtsProvider {
    pub fn new(app_id: String, access_key: String, cluster: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            app_id,
            access_key,
            cluster,
            base_url,
        }
    }
}

#[async_trait]
impl TtsProvider for VolcanoTtsProvider {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError> {
        let reqid = format!("tts_{}", Uuid::new_v4().simple());

        let payload = SynthesisRequest {
            app: AppIdentity {
                appid: &self.app_id,
                token: &self.access_key,
                cluster: &self.cluster,
            },
            user: UserIdentity { uid: DEFAULT_UID },
            audio: AudioParams {
                voice_type: DEFAULT_VOICE,
                encoding: DEFAULT_ENCODING,
                speed_ratio: DEFAULT_SPEED_RATIO,
            },
            request: RequestParams {
                reqid: &reqid,
                text,
                operation: OPERATION_QUERY,
            },
        };

        tracing::info!(
            reqid = %reqid,
            text_length = text.len(),
            "Requesting speech synthesis"
        );

        let response = self
            .client
            .post(&self.base_url)
            .timeout(REQUEST_TIMEOUT)
            .header(header::CONTENT_TYPE, "application/json")
            // The provider's bearer-style token format uses a semicolon
            .header(header::AUTHORIZATION, format!("Bearer;{}", self.access_key))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ProviderError::Upstream {
                code: status.as_u16() as i64,
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        // A 200 can still carry a domain-level error inside the envelope
        let parsed: SynthesisResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::Decode(format!("unexpected response body: {e}")))?;

        if parsed.code != SUCCESS_CODE {
            return Err(ProviderError::Upstream {
                code: parsed.code,
                message: parsed.message,
            });
        }

        let encoded = parsed
            .data
            .ok_or_else(|| ProviderError::Decode("response carries no audio data".to_string()))?;

        let audio = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        tracing::debug!(reqid = %reqid, audio_bytes = audio.len(), "Synthesis completed");

        Ok(audio)
    }
}
