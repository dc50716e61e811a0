pub mod card;
pub mod domain;
pub mod loader;
pub mod router;

pub use card::{ListingCard, LINK_REL, LINK_TARGET};
pub use domain::{ListingId, ListingRecord, DEFAULT_BUTTON_LABEL};
pub use loader::{CatalogLoadError, ListingCatalog};
pub use router::catalog_router;
