//! MongoDB connectivity shared by the API binary and the domain crates.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, config and health checks
//! - `config` - `core_config::FromEnv` support for [`mongodb::MongoConfig`]
//! - `all` - everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
