use anyhow::{Context, Result};

/// bcrypt work factor for stored password hashes.
pub const BCRYPT_COST: u32 = 10;

/// Hashes a password on the blocking pool.
pub async fn hash_password(password: &str) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .context("password hashing task panicked")?
        .context("failed to hash password")
}

/// Checks a password against a stored hash. A malformed hash is an error,
/// a mismatch is `Ok(false)`.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("password verification task panicked")?
        .context("failed to verify password")
}
