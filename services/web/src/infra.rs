use metrics_exporter_prometheus::PrometheusHandle;
use shiftcare::catalog::{CatalogLoadError, ListingCatalog};
use shiftcare::config::RelayConfig;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use url::Url;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the catalog once; any bad record aborts startup.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ListingCatalog, CatalogLoadError> {
    let catalog = ListingCatalog::load(path)?;
    match path {
        Some(path) => info!(path = %path.display(), listings = catalog.len(), "listing catalog loaded"),
        None => info!(listings = catalog.len(), "using built-in listing catalog"),
    }
    Ok(catalog)
}

pub(crate) fn parse_relay_url(raw: &str) -> Result<Url, String> {
    RelayConfig::parse(raw)
        .map(|config| config.endpoint)
        .map_err(|err| err.to_string())
}
