//! Password hashing and activation token generation.
//!
//! Author records only ever store hashed material; these helpers produce it.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, Salt, SaltString, rand_core::OsRng,
    },
};

use super::error::{AuthorError, AuthorResult};
use crate::config::SecurityConfig;

fn argon2_params(config: &SecurityConfig) -> AuthorResult<Params> {
    Params::new(
        config.argon2_memory_cost_kib,
        config.argon2_time_cost,
        config.argon2_parallelism,
        None,
    )
    .map_err(|e| AuthorError::Hashing(format!("Invalid Argon2 params: {e}")))
}

/// Unpadded base64 width of `bytes` raw bytes.
const fn b64_len(bytes: usize) -> usize {
    (bytes * 4).div_ceil(3)
}

/// Hash a password using Argon2id with the configured cost parameters.
///
/// With the default [`SecurityConfig`] the PHC string is 97 characters, the
/// width of the `authorHash` column. See [`encoded_hash_len`] for other
/// settings.
pub fn hash_password(password: &str, config: &SecurityConfig) -> AuthorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params(config)?)
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthorError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Length of the PHC string [`hash_password`] produces under `config`.
///
/// The cost parameters are written out in decimal, so their digit count
/// decides whether the hash fits the `authorHash` column.
pub fn encoded_hash_len(config: &SecurityConfig) -> AuthorResult<usize> {
    let params = argon2_params(config)?;
    let header = format!(
        "${}$v={}$m={},t={},p={}$",
        Algorithm::Argon2id,
        Version::V0x13 as u32,
        params.m_cost(),
        params.t_cost(),
        params.p_cost()
    );

    Ok(header.len() + b64_len(Salt::RECOMMENDED_LENGTH) + 1 + b64_len(Params::DEFAULT_OUTPUT_LEN))
}

/// Checks `password` against a stored Argon2 PHC string.
///
/// Hex digests carry no salt or parameters and can't be verified here.
pub fn verify_password(password: &str, hash: &str) -> AuthorResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AuthorError::Hashing(format!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Fresh 128-bit activation token in lowercase hex.
#[must_use]
pub fn generate_activation_token() -> String {
    format!("{:032x}", rand::random::<u128>())
}
