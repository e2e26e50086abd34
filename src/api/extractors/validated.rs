//! `Validated<T>`: JSON body extraction followed by the registered rule set.
//!
//! Runs after the body is parsed and before the handler. A failing rule set
//! short-circuits with a 400 problem body listing every failure; the handler
//! (and therefore the database) is never reached. Types without a registered
//! validator pass through unchanged.

use std::any::{Any, type_name};

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

pub struct Validated<T>(pub T);

impl<T> FromRequest<AppState> for Validated<T>
where
    T: DeserializeOwned + Any + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, payload = type_name::<T>(), "unreadable request body");
            AppError::bad_request(rejection.body_text())
        })?;

        if let Some(Err(errors)) = state.validators.validate(&value) {
            tracing::info!(
                payload = type_name::<T>(),
                failures = errors.failures().len(),
                "request payload rejected by validator"
            );
            return Err(AppError::Validation(errors));
        }

        Ok(Validated(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    use crate::services::validation::{RuleSet, ValidatorRegistry};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Seating {
        seats: i32,
    }

    #[derive(Debug, Deserialize)]
    struct Unchecked {
        seats: i32,
    }

    fn router() -> Router {
        let registry = ValidatorRegistry::new().register(RuleSet::<Seating>::new().rule(
            "seats",
            |s| s.seats > 0,
            "Seats must be greater than 0.",
        ));
        let state = AppState::for_tests(registry);

        Router::new()
            .route(
                "/checked",
                post(|Validated(s): Validated<Seating>| async move { s.seats.to_string() }),
            )
            .route(
                "/unchecked",
                post(|Validated(s): Validated<Unchecked>| async move { s.seats.to_string() }),
            )
            .with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> http::Request<Body> {
        http::Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn passing_payload_reaches_handler() {
        let res = router().oneshot(post_json("/checked", r#"{"seats":3}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn failing_payload_short_circuits_with_field_errors() {
        let res = router().oneshot(post_json("/checked", r#"{"seats":0}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = body_json(res).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["title"], "One or more validation errors occurred.");
        assert_eq!(body["errors"]["seats"][0], "Seats must be greater than 0.");
    }

    #[tokio::test]
    async fn unregistered_type_is_forwarded() {
        let res = router().oneshot(post_json("/unchecked", r#"{"seats":0}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"0");
    }

    #[tokio::test]
    async fn malformed_json_is_a_problem_400() {
        let res = router().oneshot(post_json("/checked", r#"{"seats":"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = body_json(res).await;
        assert!(body["errors"]["$"][0].is_string());
    }
}
