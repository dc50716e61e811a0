use std::sync::Arc;

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::render::{render_landing_page, FormView};
use crate::catalog::ListingCatalog;
use crate::signup::{Phase, RelayClient, SignupController, SignupForm};

pub struct LandingState<C: ?Sized> {
    pub catalog: Arc<ListingCatalog>,
    pub relay: Arc<C>,
}

impl<C: ?Sized> Clone for LandingState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            relay: Arc::clone(&self.relay),
        }
    }
}

/// Server-rendered page plus the plain HTML form post it submits to.
pub fn landing_router<C>(catalog: Arc<ListingCatalog>, relay: Arc<C>) -> Router
where
    C: RelayClient + 'static,
{
    Router::new()
        .route("/", get(page_handler::<C>))
        .route("/signup", post(form_handler::<C>))
        .with_state(LandingState { catalog, relay })
}

pub(crate) async fn page_handler<C>(State(state): State<LandingState<C>>) -> Html<String>
where
    C: RelayClient + 'static,
{
    Html(render_landing_page(&state.catalog, &FormView::default()))
}

pub(crate) async fn form_handler<C>(
    State(state): State<LandingState<C>>,
    Form(mut form): Form<SignupForm>,
) -> Response
where
    C: RelayClient + 'static,
{
    let controller = SignupController::new(Arc::clone(&state.relay));
    let (status, view) = match controller.submit(&mut form).await {
        Ok(phase) => {
            let status = match phase {
                Phase::Failed => StatusCode::BAD_GATEWAY,
                _ => StatusCode::OK,
            };
            (status, FormView::after_submit(form, phase))
        }
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            FormView::rejected(form, error),
        ),
    };

    (status, Html(render_landing_page(&state.catalog, &view))).into_response()
}
