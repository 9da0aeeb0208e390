//! Password hashing.
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool and only suspend the calling task.

use bcrypt::{hash, verify};
use tokio::task::{JoinError, spawn_blocking};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("password task did not complete: {0}")]
    Task(#[from] JoinError),
}

pub fn hash_password_blocking(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password_blocking(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(verify(password, hash)?)
}

pub async fn hash_password(password: impl Into<String>, cost: u32) -> Result<String, PasswordError> {
    let password = password.into();
    spawn_blocking(move || hash_password_blocking(&password, cost)).await?
}

/// Returns `Ok(false)` on a mismatch and `Err` when the stored hash cannot
/// be checked at all.
pub async fn verify_password(
    password: impl Into<String>,
    hash: impl Into<String>,
) -> Result<bool, PasswordError> {
    let password = password.into();
    let hash = hash.into();
    spawn_blocking(move || verify_password_blocking(&password, &hash)).await?
}
