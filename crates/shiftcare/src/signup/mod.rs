pub mod controller;
pub mod domain;
pub mod relay;
pub mod router;
pub mod state;

pub use controller::SignupController;
pub use domain::{Role, SignupFields, SignupForm, ValidationError};
pub use relay::{BoxError, HttpRelayClient, RelayAck, RelayClient, RelayError};
pub use router::{signup_router, SignupResponse, SIGNUP_API_PATH};
pub use state::{Phase, SubmissionState};
