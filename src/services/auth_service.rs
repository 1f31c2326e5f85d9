//! Authentication service
//!
//! Owns the two cryptographic primitives the rest of the crate relies on:
//! password hashing (argon2id) and bearer token signing (HS256).

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, HashingConfig},
    error::AppResult,
    models::{Role, User},
};

/// Token claim set.
///
/// Only `id` and `role` are required. There is deliberately no `exp`: a
/// token stays valid for as long as the signing secret does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    argon2: Argon2<'static>,
}

impl AuthService {
    /// Build the service from the signing secret and hash cost parameters
    pub fn new(secret: &str, hashing: HashingConfig) -> Result<Self, ConfigError> {
        let params = Params::new(
            hashing.memory_kib,
            hashing.iterations,
            hashing.parallelism,
            None,
        )
        .map_err(|e| ConfigError::InvalidValue(format!("PASSWORD_HASH_* ({})", e)))?;

        let mut validation = Validation::default();
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Sign a token for `user`
    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        let claims = Claims {
            id: user.id.to_string(),
            role: user.role,
            iat: Some(Utc::now().timestamp()),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| anyhow::anyhow!("Token generation failed: {}", e))?;

        Ok(token)
    }

    /// Verify a token's signature and decode its claims
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Hash a password on the blocking pool
    pub async fn hash_password(&self, password: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();

        let hash = tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))
        })
        .await
        .map_err(|e| anyhow::anyhow!("Password hashing task failed: {}", e))??;

        Ok(hash)
    }

    /// Check `password` against a stored hash on the blocking pool.
    ///
    /// Cost parameters are read from the hash itself.
    pub async fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let argon2 = self.argon2.clone();
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| anyhow::anyhow!("Invalid password hash: {}", e))?;
            Ok::<_, anyhow::Error>(argon2.verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| anyhow::anyhow!("Password verification task failed: {}", e))??;

        Ok(matches)
    }
}

#[cfg(test)]
pub(crate) fn test_auth_service(secret: &str) -> AuthService {
    // Minimum argon2 cost keeps the suite fast
    let hashing = HashingConfig {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    };
    AuthService::new(secret, hashing).expect("valid test hashing params")
}
