use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Lifetime of tokens issued by `/api/login`.
pub const TOKEN_TTL: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (operator username)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
    pub jti: String, // Token id
}

/// Stateless HS256 token issuer and verifier.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        tracing::info!("JWT auth initialized");
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret)),
            decoding: Arc::new(DecodingKey::from_secret(secret)),
        }
    }

    /// Issue a token valid for [`TOKEN_TTL`] seconds.
    pub fn create_token(&self, subject: &str) -> eyre::Result<String> {
        self.create_token_with_ttl(subject, TOKEN_TTL)
    }

    pub fn create_token_with_ttl(&self, subject: &str, ttl_seconds: i64) -> eyre::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> eyre::Result<JwtClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding, &Validation::new(Algorithm::HS256))?;
        Ok(data.claims)
    }
}
