//! JWT service for bearer token issuance and verification
//!
//! Tokens are signed with HS256 using a shared secret and carry the user
//! id as `sub`. There is no refresh flow and no revocation list: a token
//! stays valid until it expires or its user is deleted.

use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::models::User;

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Token lifetime in seconds (default: 7 days)
    #[serde(default = "default_expiry")]
    pub expiry: u64,
}

fn default_expiry() -> u64 {
    604800
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Username at issuance time
    pub username: String,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Result<Self> {
        if config.secret.is_empty() {
            anyhow::bail!("JWT secret must not be empty");
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Ok(JwtService {
            encoding_key,
            decoding_key,
            validation,
            config,
        })
    }

    /// Generate a bearer token for a user
    pub fn generate_token(&self, user: &User) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs();

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + self.config.expiry,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Get the token expiry time
    pub fn expiry(&self) -> u64 {
        self.config.expiry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtService {
        JwtService::new(JwtConfig {
            secret: secret.to_string(),
            expiry: 3600,
        })
        .unwrap()
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "abcde".to_string(),
            password_hash: String::new(),
            email: "a@b.com".to_string(),
            birthday: None,
            favorite_movies: vec![],
        }
    }

    #[test]
    fn test_generate_and_validate() {
        let jwt = service("test-secret");
        let user = user();

        let token = jwt.generate_token(&user).unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "abcde");
        assert_eq!(claims.exp - claims.iat, jwt.expiry());
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let token = service("one-secret").generate_token(&user()).unwrap();
        assert!(service("another-secret").validate_token(&token).is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let jwt = service("test-secret");
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "abcde".to_string(),
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(jwt.validate_token(&token).is_err());
    }

    #[test]
    fn test_rejects_garbage_and_empty_secret() {
        assert!(service("test-secret").validate_token("not.a.token").is_err());
        assert!(
            JwtService::new(JwtConfig {
                secret: String::new(),
                expiry: 60
            })
            .is_err()
        );
    }
}
