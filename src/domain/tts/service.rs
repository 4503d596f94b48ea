use super::cache_key;
use super::error::TtsServiceError;
use crate::infrastructure::providers::TtsProvider;
use crate::infrastructure::store::{AudioFileEntry, AudioStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

const MAX_TEXT_CHARS: usize = 2000;

#[derive(Debug, Clone)]
pub struct SynthesisOutcome {
    pub audio: Vec<u8>,
    pub cache_hit: bool,
    pub key: String,
}

pub struct TtsService {
    provider: Arc<dyn TtsProvider>,
    store: Arc<AudioStore>,
    // Per-key locks so concurrent identical requests collapse into one
    // provider call and one writer
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TtsService {
    pub fn new(provider: Arc<dyn TtsProvider>, store: Arc<AudioStore>) -> Self {
        Self {
            provider,
            store,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    pub async fn list_files(&self) -> Result<Vec<AudioFileEntry>, StoreError> {
        self.store.list().await
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech, serving from the disk cache when possible
    ///
    /// This operation:
    /// - Validates text length before any provider contact
    /// - Derives the cache key and checks the store
    /// - On a miss, calls the provider under a per-key lock and persists
    ///
    /// Returns the audio bytes along with the key and hit/miss outcome
    async fn synthesize(&self, text: &str) -> Result<SynthesisOutcome, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(&self, text: &str) -> Result<SynthesisOutcome, TtsServiceError> {
        // 1. Validate
        validate_text(text)?;

        // 2. Derive key
        let key = cache_key::derive(text);

        // 3. Cache lookup, skipping the provider entirely on a hit
        if let Some(audio) = self.store.get(&key).await? {
            tracing::info!(key = %key, audio_bytes = audio.len(), "Cache hit");
            return Ok(SynthesisOutcome {
                audio,
                cache_hit: true,
                key,
            });
        }

        // 4. Miss: serialize per key so identical concurrent requests
        //    share one synthesis
        let lock = self.lock_for(&key).await;
        let result = async {
            let _guard = lock.lock().await;

            // A concurrent request may have populated the cache while we
            // waited on the lock
            if let Some(audio) = self.store.get(&key).await? {
                tracing::info!(key = %key, audio_bytes = audio.len(), "Cache hit after wait");
                return Ok(SynthesisOutcome {
                    audio,
                    cache_hit: true,
                    key: key.clone(),
                });
            }

            tracing::info!(key = %key, text_length = text.len(), "Cache miss, synthesizing");

            // 5. Invoke the provider
            let audio = self.provider.synthesize(text).await?;

            // 6. Persist
            let path = self.store.put(&key, &audio).await?;
            tracing::info!(
                key = %key,
                path = %path.display(),
                audio_bytes = audio.len(),
                "Audio cached"
            );

            Ok(SynthesisOutcome {
                audio,
                cache_hit: false,
                key: key.clone(),
            })
        }
        .await;
        drop(lock);

        self.release(&key).await;

        result
    }
}

impl TtsService {
    async fn lock_for(&self, key: &str) -> Arc<Mutex<()>> {
        let mut inflight = self.inflight.lock().await;
        inflight.entry(key.to_owned()).or_default().clone()
    }

    async fn release(&self, key: &str) {
        let mut inflight = self.inflight.lock().await;
        // The map itself holds one reference; more means another request
        // is still using the lock
        if let Some(lock) = inflight.get(key) {
            if Arc::strong_count(lock) == 1 {
                inflight.remove(key);
            }
        }
    }
}

fn validate_text(text: &str) -> Result<(), TtsServiceError> {
    if text.is_empty() {
        return Err(TtsServiceError::Validation("Text is required".to_string()));
    }

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(TtsServiceError::Validation(
            "Text too long (max 2000 characters)".to_string(),
        ));
    }

    Ok(())
}
