use crate::error::AppError;
use crate::infrastructure::providers::ProviderError;
use crate::infrastructure::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Validation(msg) => AppError::BadRequest(msg),
            TtsServiceError::Provider(e) => AppError::Synthesis(e.to_string()),
            TtsServiceError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}
