use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::controller::SignupController;
use super::domain::SignupForm;
use super::relay::RelayClient;
use super::state::Phase;

/// Path of the JSON sign-up endpoint the landing page script posts to.
pub const SIGNUP_API_PATH: &str = "/api/v1/signup";

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// JSON endpoint for scripted sign-ups; each request is its own form instance.
pub fn signup_router<C>(relay: Arc<C>) -> Router
where
    C: RelayClient + 'static,
{
    Router::new()
        .route(SIGNUP_API_PATH, post(signup_handler::<C>))
        .with_state(relay)
}

pub(crate) async fn signup_handler<C>(
    State(relay): State<Arc<C>>,
    axum::Json(mut form): axum::Json<SignupForm>,
) -> Response
where
    C: RelayClient + 'static,
{
    let controller = SignupController::new(relay);
    match controller.submit(&mut form).await {
        Ok(phase) => {
            let status = match phase {
                Phase::Failed => StatusCode::BAD_GATEWAY,
                _ => StatusCode::OK,
            };
            let body = SignupResponse {
                phase,
                message: phase.status_message(),
            };
            (status, axum::Json(body)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
