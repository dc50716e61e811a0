use serde::Serialize;
use tokio::sync::watch;

/// Status of the sign-up form for one page instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Submitting => "submitting",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        }
    }

    /// Static text shown next to the form; never carries failure detail.
    pub fn status_message(self) -> Option<&'static str> {
        match self {
            Phase::Idle => None,
            Phase::Submitting => Some("Submitting..."),
            Phase::Succeeded => Some("Thank you for signing up! We'll be in touch."),
            Phase::Failed => Some("Something went wrong. Please try again later."),
        }
    }

    /// Whether the submit control is disabled in this phase.
    pub fn submit_disabled(self) -> bool {
        matches!(self, Phase::Submitting)
    }
}

/// Phase holder owned by a single controller; observers subscribe to changes.
#[derive(Debug)]
pub struct SubmissionState {
    phase: watch::Sender<Phase>,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionState {
    pub fn new() -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self { phase }
    }

    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Phase> {
        self.phase.subscribe()
    }

    /// Move to `Submitting` unless a submission is already in flight.
    pub(crate) fn begin(&self) -> Option<InFlight<'_>> {
        let started = self.phase.send_if_modified(|phase| {
            if *phase == Phase::Submitting {
                false
            } else {
                *phase = Phase::Submitting;
                true
            }
        });

        started.then(|| InFlight {
            state: self,
            settled: false,
        })
    }

    fn settle(&self, outcome: Phase) {
        self.phase.send_replace(outcome);
    }
}

/// Held for the span of one submission. Dropping it unsettled records
/// `Failed`, so the state never stays `Submitting` once the attempt is gone.
#[derive(Debug)]
pub(crate) struct InFlight<'a> {
    state: &'a SubmissionState,
    settled: bool,
}

impl InFlight<'_> {
    pub(crate) fn settle(mut self, outcome: Phase) {
        self.settled = true;
        self.state.settle(outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.settle(Phase::Failed);
        }
    }
}
