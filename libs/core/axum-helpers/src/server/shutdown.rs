use tokio::signal;
use tracing::{error, info};

/// Completes when the process receives SIGINT (Ctrl+C) or SIGTERM.
///
/// If a handler cannot be installed the failure is logged and that signal is
/// never observed; the other one still triggers shutdown.
///
/// Pass to `axum::serve(..).with_graceful_shutdown()`.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}

/// Run `cleanup`, giving up after `timeout`.
///
/// Returns `true` when cleanup finished in time.
pub async fn run_cleanup<F>(cleanup: F, timeout: std::time::Duration) -> bool
where
    F: std::future::Future<Output = ()>,
{
    info!("Starting cleanup tasks (timeout: {:?})", timeout);
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(()) => {
            info!("Cleanup completed successfully");
            true
        }
        Err(_) => {
            tracing::warn!("Cleanup exceeded timeout of {:?}, forcing shutdown", timeout);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_cleanup_completes() {
        assert!(run_cleanup(async {}, Duration::from_secs(1)).await);
    }

    #[tokio::test]
    async fn test_run_cleanup_times_out() {
        let slow = tokio::time::sleep(Duration::from_secs(5));
        assert!(!run_cleanup(slow, Duration::from_millis(10)).await);
    }
}
