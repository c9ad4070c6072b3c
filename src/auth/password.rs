use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// Produce the Argon2id PHC string stored in `PORTFOLIO_ADMIN_PASSWORD_HASH`.
pub fn hash(password: &str) -> Result<String, String> {
    if password.is_empty() {
        return Err("Password must not be empty".to_string());
    }

    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(19 * 1024, 2, 1, None).map_err(|e| format!("Invalid params: {e}"))?;
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| format!("Hashing failed: {e}"))
}

/// Check a login attempt against the configured admin hash.
pub fn verify_admin(password: &str, admin_hash: &str) -> Result<bool, String> {
    let parsed =
        PasswordHash::new(admin_hash).map_err(|e| format!("Invalid admin password hash: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
