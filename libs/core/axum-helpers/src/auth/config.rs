//! Auth settings loaded through `core_config::FromEnv`.

use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_required};
use std::str::FromStr;
use strum::{Display, EnumString};

pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Which gate protects the resource routes (`AUTH_MODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuthMode {
    /// `X-API-KEY` header compared against `X_API_KEY`
    #[default]
    ApiKey,
    /// `Authorization: Bearer <jwt>` signed with `JWT_SECRET`
    Jwt,
    /// No gate; refused in production
    None,
}

#[derive(Clone, Debug)]
pub struct ApiKeyConfig {
    pub key: String,
}

impl FromEnv for ApiKeyConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let key = env_required("X_API_KEY")?;
        if key.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "X_API_KEY".to_string(),
                details: "must not be empty".to_string(),
            });
        }
        Ok(Self { key })
    }
}

/// JWT signing secret, at least [`MIN_JWT_SECRET_LEN`] bytes.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {MIN_JWT_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }
        Ok(Self { secret })
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(env_required("JWT_SECRET")?)
    }
}

/// The single operator account allowed to obtain tokens via `/api/login`.
#[derive(Clone, Debug)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl FromEnv for AdminCredentials {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: env_required("ADMIN_USERNAME")?,
            password: env_required("ADMIN_PASSWORD")?,
        })
    }
}

/// Fully resolved auth settings for the selected mode.
#[derive(Clone, Debug)]
pub enum AuthConfig {
    ApiKey(ApiKeyConfig),
    Jwt {
        jwt: JwtConfig,
        admin: AdminCredentials,
    },
    Disabled,
}

impl AuthConfig {
    pub fn mode(&self) -> AuthMode {
        match self {
            AuthConfig::ApiKey(_) => AuthMode::ApiKey,
            AuthConfig::Jwt { .. } => AuthMode::Jwt,
            AuthConfig::Disabled => AuthMode::None,
        }
    }
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("AUTH_MODE", "api_key");
        let mode = AuthMode::from_str(raw.trim()).map_err(|_| ConfigError::ParseError {
            key: "AUTH_MODE".to_string(),
            details: format!("unknown mode '{raw}', expected api_key, jwt or none"),
        })?;

        match mode {
            AuthMode::ApiKey => Ok(AuthConfig::ApiKey(ApiKeyConfig::from_env()?)),
            AuthMode::Jwt => Ok(AuthConfig::Jwt {
                jwt: JwtConfig::from_env()?,
                admin: AdminCredentials::from_env()?,
            }),
            AuthMode::None if Environment::from_env().is_production() => {
                Err(ConfigError::ParseError {
                    key: "AUTH_MODE".to_string(),
                    details: "'none' is not allowed in production".to_string(),
                })
            }
            AuthMode::None => Ok(AuthConfig::Disabled),
        }
    }
}
