use async_trait::async_trait;

mod volcano;

pub use volcano::VolcanoTtsProvider;

/// Client for an external text-to-speech synthesis provider.
///
/// Implementations are responsible for:
/// - Building the provider-specific request payload
/// - Distinguishing provider errors from audio payloads
/// - Decoding the audio into raw bytes ready for storage
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech, returning raw audio bytes (MP3)
    ///
    /// A single failed attempt is surfaced directly; no retries.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network failure or timeout reaching the provider
    #[error("request to TTS provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider reachable but reported non-success, either via HTTP status
    /// or via the embedded status code inside a 200 response
    #[error("TTS API error: {message} (code: {code})")]
    Upstream { code: i64, message: String },

    /// Malformed response body or audio payload
    #[error("failed to decode audio data: {0}")]
    Decode(String),
}
