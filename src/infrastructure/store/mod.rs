use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;
use uuid::Uuid;

/// Extensions considered audio artifacts by the listing
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A cached audio artifact as reported by the listing
#[derive(Debug, Clone, Serialize)]
pub struct AudioFileEntry {
    pub name: String,
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

/// Disk-backed audio cache.
///
/// Files are named `tts_<key>.mp3` under the audio directory; the presence
/// of a file at the resolved path IS the cache entry; there is no index
/// or metadata sidecar.
pub struct AudioStore {
    audio_dir: PathBuf,
}

impl AudioStore {
    /// Create a store rooted at `audio_dir`, creating the directory if
    /// missing. Creation failure is downgraded to a warning; subsequent
    /// writes will fail individually instead.
    pub fn new(audio_dir: impl Into<PathBuf>) -> Self {
        let audio_dir = audio_dir.into();

        if let Err(e) = std::fs::create_dir_all(&audio_dir) {
            tracing::warn!(
                dir = %audio_dir.display(),
                error = %e,
                "Failed to create audio directory"
            );
        }

        Self { audio_dir }
    }

    pub fn resolve_path(&self, key: &str) -> PathBuf {
        self.audio_dir.join(format!("tts_{key}.mp3"))
    }

    /// Read a cached entry. A file at the resolved path is treated as a
    /// valid hit unconditionally; no content or staleness validation.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.resolve_path(key);

        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist audio bytes under `key`.
    ///
    /// Writes go to a unique temporary file in the same directory followed
    /// by an atomic rename, so a crash mid-write cannot leave a truncated
    /// file that would later be served as a valid hit.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.resolve_path(key);
        let tmp = self
            .audio_dir
            .join(format!("tts_{key}.{}.tmp", Uuid::new_v4().simple()));

        fs::write(&tmp, bytes).await?;

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(path)
    }

    /// Enumerate cached audio artifacts with metadata.
    ///
    /// Subdirectories and non-audio files are excluded; an entry that
    /// fails to stat is skipped rather than aborting the whole listing.
    pub async fn list(&self) -> Result<Vec<AudioFileEntry>, StoreError> {
        let mut entries = Vec::new();
        let mut dir = fs::read_dir(&self.audio_dir).await?;

        while let Some(entry) = dir.next_entry().await? {
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };
            if !file_type.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            let is_audio = name
                .rsplit_once('.')
                .map(|(_, ext)| AUDIO_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if !is_audio {
                continue;
            }

            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(_) => continue,
            };
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(_) => continue,
            };

            entries.push(AudioFileEntry {
                name,
                size: metadata.len(),
                modified_at: modified.into(),
            });
        }

        Ok(entries)
    }
}
