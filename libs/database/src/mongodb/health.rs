use mongodb::{Database, bson::doc};
use std::time::Instant;

/// Outcome of a readiness probe.
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Driver error text when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

pub(crate) async fn ping(db: &Database) -> mongodb::error::Result<()> {
    db.run_command(doc! { "ping": 1 }).await.map(|_| ())
}

/// Ping the database and time the round trip.
pub async fn check_health_detailed(db: &Database) -> HealthStatus {
    let start = Instant::now();
    let result = ping(db).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    HealthStatus {
        healthy: result.is_ok(),
        message: result.err().map(|e| e.to_string()),
        response_time_ms,
    }
}
