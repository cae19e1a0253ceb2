use axum_helpers::AuthConfig;
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_characters::mongodb::DEFAULT_COLLECTION as DEFAULT_CHARACTER_COLLECTION;
use domain_tailed_beasts::mongodb::DEFAULT_COLLECTION as DEFAULT_TAILED_BEAST_COLLECTION;

pub use core_config::Environment;

/// Collection names, overridable per deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collections {
    pub characters: String,
    pub tailed_beasts: String,
}

impl FromEnv for Collections {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            characters: env_or_default("CHARACTER_COLLECTION", DEFAULT_CHARACTER_COLLECTION),
            tailed_beasts: env_or_default(
                "TAILED_BEAST_COLLECTION",
                DEFAULT_TAILED_BEAST_COLLECTION,
            ),
        })
    }
}

/// Application configuration, composed from the shared config pieces.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub collections: Collections,
    pub auth: AuthConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let mut mongodb = MongoConfig::from_env()?;
        if mongodb.app_name.is_none() {
            mongodb = mongodb.with_app_name(app.name);
        }

        Ok(Self {
            app,
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb,
            collections: Collections::from_env()?,
            auth: AuthConfig::from_env()?,
        })
    }
}
