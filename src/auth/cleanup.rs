//! Background cleanup worker for expired sessions.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::session::SessionStore;

fn cleanup_once(store: &SessionStore) {
    let count = store.purge_expired();
    if count > 0 {
        tracing::info!(expired_sessions = count, "Cleaned up expired sessions");
    }
}

/// Run the cleanup worker.
/// Purges immediately on start, then every `interval`, until `shutdown` is cancelled.
pub async fn run_cleanup_worker(
    store: SessionStore,
    interval: Duration,
    shutdown: CancellationToken,
) {
    tracing::info!(interval_secs = interval.as_secs(), "Starting session cleanup worker");

    cleanup_once(&store);

    let mut interval = tokio::time::interval(interval);
    interval.tick().await; // Skip the first immediate tick (we already ran cleanup)

    loop {
        tokio::select! {
            _ = interval.tick() => {
                cleanup_once(&store);
            }
            () = shutdown.cancelled() => {
                tracing::info!("Session cleanup worker shutting down");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::SessionUser;

    #[tokio::test]
    async fn test_worker_purges_and_stops_on_cancel() {
        let store = SessionStore::new(Duration::ZERO);
        store.create(
            SessionUser {
                id: 1,
                name: "a".to_string(),
                slug: "a".to_string(),
                roles: vec![],
            },
            "jwt".to_string(),
        );

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(run_cleanup_worker(
            store.clone(),
            Duration::from_secs(3600),
            shutdown.clone(),
        ));

        shutdown.cancel();
        handle.await.unwrap();
        assert!(store.is_empty());
    }
}
