use sha2::{Digest, Sha256};

/// Keys are a fixed-width 128-bit prefix of the content digest, rendered
/// as lowercase hex. Stable across restarts and filesystem-safe.
const KEY_LENGTH: usize = 32;

/// Derive the cache key for a piece of input text.
///
/// Equal text always yields the same key; distinct texts collide only with
/// cryptographic-hash probability.
pub fn derive(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let hex = format!("{:x}", digest);
    hex[..KEY_LENGTH].to_string()
}
