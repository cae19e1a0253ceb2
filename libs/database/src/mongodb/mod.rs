//! MongoDB connection management.

mod config;
mod connector;
mod errors;
mod health;

pub use config::MongoConfig;
pub use connector::{client_options, connect, connect_with_retry};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key_error};
pub use health::{HealthStatus, check_health_detailed};

pub use mongodb::{Client, Collection, Database};
