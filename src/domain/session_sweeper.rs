//! Background task that deletes expired dashboard sessions.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::AuthRepository;

/// Periodically removes expired sessions until the process exits.
///
/// Expired sessions are already rejected on lookup; sweeping only keeps the
/// table small. Failures are logged and retried on the next tick.
pub async fn run_session_sweeper<R: AuthRepository>(repository: Arc<R>, every: Duration) {
    let mut interval = tokio::time::interval(every);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        match repository.delete_expired_sessions().await {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Expired sessions removed"),
            Err(e) => tracing::warn!(error = %e, "Failed to remove expired sessions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAuthRepository;

    #[tokio::test]
    async fn test_sweeper_runs_immediately() {
        let mut mock_repo = MockAuthRepository::new();
        mock_repo
            .expect_delete_expired_sessions()
            .times(1..)
            .returning(|| Ok(3));

        let handle = tokio::spawn(run_session_sweeper(
            Arc::new(mock_repo),
            Duration::from_secs(3600),
        ));

        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();
        let _ = handle.await;
    }
}
