use anyhow::{bail, Context, Result};
use tracing::info;

use crate::db::repositories::users::UserRepository;

/// bcrypt hash in the `$2b$` format the CVKing backend verifies against.
pub fn hash_password(plain: &str, cost: u32) -> Result<String> {
    if plain.is_empty() {
        bail!("Refusing to set an empty password");
    }
    bcrypt::hash(plain, cost).context("Failed to hash password")
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(plain, hash).context("Stored password is not a valid bcrypt hash")
}

/// Hashes `new_password` and writes it to the user with `email`. Fails if no
/// such user exists. Returns the hash that was stored.
pub fn reset_password(repo: &UserRepository, email: &str, new_password: &str, cost: u32) -> Result<String> {
    let hash = hash_password(new_password, cost)?;
    let updated = repo.update_password_hash(email, &hash)?;
    if updated == 0 {
        bail!("No user with email {}", email);
    }
    info!("Password reset for {}", email);
    Ok(hash)
}
