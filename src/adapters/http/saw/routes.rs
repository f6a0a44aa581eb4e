//! Route configuration for the SAW endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{calculate_saw, SawAppState};

/// Creates the SAW router.
///
/// Routes:
/// - `POST /calculate_saw` - Rank alternatives by weighted score
pub fn saw_router() -> Router<SawAppState> {
    Router::new().route("/calculate_saw", post(calculate_saw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn post_json(body: Value) -> (StatusCode, Value) {
        let app = saw_router().with_state(SawAppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate_saw")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn ranks_alternatives() {
        let (status, json) = post_json(json!({
            "alternatives": ["Alpha", "Beta", "Gamma"],
            "criteria": ["fps", "price"],
            "weights": [0.6, 0.4],
            "decision_matrix": [[60, 40], [120, 60], [30, 20]],
            "criteria_types": ["benefit", "cost"]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["ranking"][0]["alternative"], "Beta");
        assert_eq!(json["ranking"][0]["rank"], 1);
        assert_eq!(json["best_alternative"]["alternative"], "Beta");
        assert_eq!(json["worst_alternative"]["alternative"], "Alpha");
    }

    #[tokio::test]
    async fn unnormalized_weights_are_rejected_in_band() {
        let (status, json) = post_json(json!({
            "alternatives": ["A", "B"],
            "criteria": ["x"],
            "weights": [0.5],
            "decision_matrix": [[1], [2]],
            "criteria_types": ["benefit"]
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "VALIDATION_FAILED");
        assert_eq!(json["error"], "Weights must sum to 1.0 (current sum: 0.5000)");
    }

    #[tokio::test]
    async fn unknown_criterion_kind_is_rejected() {
        let (_, json) = post_json(json!({
            "alternatives": ["A"],
            "criteria": ["x"],
            "weights": [1.0],
            "decision_matrix": [[1]],
            "criteria_types": ["neutral"]
        }))
        .await;

        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn wrong_field_type_is_rejected_in_band() {
        let (status, json) = post_json(json!({ "weights": "heavy" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }
}
