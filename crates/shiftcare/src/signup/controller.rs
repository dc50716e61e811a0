use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::domain::{SignupForm, ValidationError};
use super::relay::RelayClient;
use super::state::{Phase, SubmissionState};

/// Drives one sign-up form: validation gate, a single relay call per
/// attempt, and the resulting [`Phase`].
///
/// One controller corresponds to one rendered form. Attempts made while a
/// submission is in flight are ignored, mirroring a disabled submit control.
pub struct SignupController<C: ?Sized> {
    relay: Arc<C>,
    state: SubmissionState,
}

impl<C> SignupController<C>
where
    C: RelayClient + ?Sized,
{
    pub fn new(relay: Arc<C>) -> Self {
        Self {
            relay,
            state: SubmissionState::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase().submit_disabled()
    }

    /// Receiver notified on every phase transition.
    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.state.subscribe()
    }

    /// Submit the form once.
    ///
    /// Returns `Err` only when the form fails validation, in which case no
    /// state changes and nothing is sent. Relay outcomes are folded into the
    /// returned phase: on success the form is cleared, on failure it is left
    /// as the visitor typed it.
    pub async fn submit(&self, form: &mut SignupForm) -> Result<Phase, ValidationError> {
        let fields = form.validate()?;

        let Some(in_flight) = self.state.begin() else {
            debug!("sign-up already in flight; ignoring submit");
            return Ok(Phase::Submitting);
        };

        let outcome = match self.relay.deliver(&fields).await {
            Ok(ack) => {
                info!(role = %fields.role, status = ack.status, "sign-up relayed");
                form.reset();
                Phase::Succeeded
            }
            Err(err) => {
                warn!(role = %fields.role, error = %err, "sign-up submission failed");
                Phase::Failed
            }
        };

        in_flight.settle(outcome);
        Ok(outcome)
    }
}

impl<C: ?Sized> std::fmt::Debug for SignupController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
