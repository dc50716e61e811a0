use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::card::ListingCard;
use super::loader::ListingCatalog;

/// Read-only JSON view of the catalog.
pub fn catalog_router(catalog: Arc<ListingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/listings", get(listings_handler))
        .with_state(catalog)
}

pub(crate) async fn listings_handler(
    State(catalog): State<Arc<ListingCatalog>>,
) -> Json<Vec<ListingCard>> {
    Json(catalog.cards())
}
