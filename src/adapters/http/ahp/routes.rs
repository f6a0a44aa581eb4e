//! Route configuration for the AHP endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{calculate_ahp, AhpAppState};

/// Creates the AHP router.
///
/// Routes:
/// - `POST /calculate_ahp` - Derive weights from a pairwise matrix
pub fn ahp_router() -> Router<AhpAppState> {
    Router::new().route("/calculate_ahp", post(calculate_ahp))
}
