/**
 * Password Hashing
 *
 * Passwords are hashed with bcrypt, a deliberately slow adaptive hash with a
 * per-hash random salt. Both hashing and verification are CPU-bound, so they
 * run on tokio's blocking pool and never stall the async workers serving
 * other requests.
 *
 * A `PasswordHash` can only be produced by `hash_password` or by reading a
 * stored hash back from the store, so plaintext cannot reach persistence.
 */
use std::fmt;

use thiserror::Error;
use tokio::task;

/// A bcrypt hash string (`$2b$<cost>$<salt+digest>`)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Rehydrate a hash previously written by this crate
    pub(crate) fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// The encoded hash, for persistence
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Task(#[from] task::JoinError),
}

/// Hash `plaintext` with a fresh salt at the given cost
pub async fn hash_password(plaintext: String, cost: u32) -> Result<PasswordHash, PasswordError> {
    let hash = task::spawn_blocking(move || bcrypt::hash(plaintext, cost)).await??;
    Ok(PasswordHash(hash))
}

/// Check `plaintext` against a stored hash
///
/// Returns `Ok(false)` on mismatch; `Err` only when the hash is malformed or
/// the blocking task dies.
pub async fn verify_password(plaintext: String, hash: PasswordHash) -> Result<bool, PasswordError> {
    let matches = task::spawn_blocking(move || bcrypt::verify(plaintext, hash.as_str())).await??;
    Ok(matches)
}
