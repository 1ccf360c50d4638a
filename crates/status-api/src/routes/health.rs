//! Health check endpoint.

use axum::extract::State;

use crate::AppState;

pub const HEALTH_PREFIX: &str = "Service de test actif - ";

/// GET /api/test/health — liveness message stamped with the current epoch milliseconds.
#[tracing::instrument(skip(state))]
pub async fn check(State(state): State<AppState>) -> String {
    let now = state.clock.now_millis();
    metrics::counter!("status_requests_total", "endpoint" => "health").increment(1);
    tracing::debug!(now, "health check");
    health_message(now)
}

/// Formats the liveness message for the given epoch milliseconds.
pub fn health_message(epoch_millis: u64) -> String {
    format!("{HEALTH_PREFIX}{epoch_millis}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clock::FixedClock;

    #[test]
    fn test_health_message_format() {
        assert_eq!(
            health_message(1_700_000_000_123),
            "Service de test actif - 1700000000123"
        );
    }

    #[tokio::test]
    async fn test_check_uses_state_clock() {
        let state = AppState {
            clock: Arc::new(FixedClock(7)),
        };
        assert_eq!(check(State(state)).await, "Service de test actif - 7");
    }
}
