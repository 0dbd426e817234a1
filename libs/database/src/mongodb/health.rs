use mongodb::Client;
use std::time::Instant;
use tracing::debug;

use super::connector::ping;
use crate::common::{DatabaseError, DatabaseResult};

/// Check MongoDB health with a `ping` command
pub async fn check_health(client: &Client) -> DatabaseResult<()> {
    let start = Instant::now();
    let result = ping(client)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()));

    debug!(
        healthy = result.is_ok(),
        response_time_ms = start.elapsed().as_millis() as u64,
        "MongoDB health check"
    );
    result
}
