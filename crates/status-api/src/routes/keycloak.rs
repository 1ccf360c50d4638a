//! Keycloak sync status placeholder.
//!
//! Reports a fixed availability string; no Keycloak instance is contacted.

pub const KEYCLOAK_SYNC_STATUS: &str = "Service de synchronisation Keycloak disponible";

/// GET /api/test/keycloak-sync — static availability message.
pub async fn status() -> &'static str {
    metrics::counter!("status_requests_total", "endpoint" => "keycloak_sync").increment(1);
    KEYCLOAK_SYNC_STATUS
}
