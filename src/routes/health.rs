//! Liveness endpoints.
//!
//! `/` answers with a human-readable status line for whoever opens the service
//! in a browser; `/health` is the probe used by container orchestration.

use crate::config::LIVENESS_MESSAGE;

/// Root handler returning a static liveness string.
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// Health check handler.
///
/// A liveness probe only: the service has no dependencies to check.
pub async fn health() -> &'static str {
    "ok"
}
