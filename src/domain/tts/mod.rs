pub mod cache_key;
pub mod error;
pub mod service;

pub use error::TtsServiceError;
pub use service::{SynthesisOutcome, TtsService, TtsServiceApi};
