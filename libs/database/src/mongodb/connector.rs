use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::{MongoConfig, health};
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry, retry_with_backoff};

/// Parse the connection string and apply pool and timeout settings.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    if let Some(app_name) = &config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Build a client and verify the server answers a ping.
///
/// The driver connects lazily, so without the ping a wrong URL would only
/// surface on the first request.
pub async fn connect(config: &MongoConfig) -> DatabaseResult<Client> {
    info!(database = %config.database, "Connecting to MongoDB");

    let client = Client::with_options(client_options(config).await?)?;

    health::ping(&client.database(&config.database))
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Successfully connected to MongoDB");
    Ok(client)
}

/// [`connect`] with exponential backoff; `None` uses [`RetryConfig::default`].
pub async fn connect_with_retry(
    config: &MongoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    match retry_config {
        Some(policy) => retry_with_backoff(|| connect(config), policy).await,
        None => retry(|| connect(config)).await,
    }
}
