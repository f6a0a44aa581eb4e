//! Top-level router composition.
//!
//! Merges the endpoint routers and wraps them in the shared middleware stack:
//! request IDs, request tracing, a request timeout and CORS.

use axum::Router;
use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::ahp::{ahp_router, AhpAppState};
use super::health::health_router;
use super::saw::{saw_router, SawAppState};
use crate::application::handlers::{CalculateAhpHandler, CalculateSawHandler};
use crate::config::{AppConfig, ServerConfig};

/// Builds the application router from configuration.
pub fn app_router(config: &AppConfig) -> Router {
    let ahp_state = AhpAppState::new(CalculateAhpHandler::new(config.engine.ahp_settings()));
    let saw_state = SawAppState {
        handler: CalculateSawHandler::new(),
    };

    Router::new()
        .merge(ahp_router().with_state(ahp_state))
        .merge(saw_router().with_state(saw_state))
        .merge(health_router())
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TimeoutLayer::new(config.server.request_timeout()))
                .layer(cors_layer(&config.server)),
        )
}

/// Any origin when none are configured; otherwise only the listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
