use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Synthesis provider credentials
    pub app_id: String,
    pub access_key: String,
    pub cluster: String,
    pub provider_url: String,
    // Audio cache
    pub audio_dir: String,
    pub tts_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            app_id: env::var("VOLCENGINE_TTS_APP_ID").unwrap_or_default(),
            access_key: env::var("VOLCENGINE_TTS_ACCESS_KEY").unwrap_or_default(),
            cluster: env::var("VOLCENGINE_TTS_CLUSTER")
                .unwrap_or_else(|_| "volcano_tts".to_string()),
            provider_url: env::var("TTS_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            audio_dir: env::var("TTS_AUDIO_DIR").unwrap_or_else(|_| "./audio".to_string()),
            tts_enabled: env::var("TTS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<String>()
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(true),
        };

        Ok(config)
    }

    /// Synthesis routes are only mounted when the feature flag is on and
    /// provider credentials are present.
    pub fn synthesis_enabled(&self) -> bool {
        self.tts_enabled && !self.app_id.is_empty() && !self.access_key.is_empty()
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
