pub mod render;
pub mod router;

pub use render::{render_landing_page, FormView, BRAND};
pub use router::{landing_router, LandingState};
