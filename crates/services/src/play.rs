//! Session lifecycle around the shared clock.

use std::sync::Arc;

use chainlab_core::Clock;
use chainlab_core::model::{Pack, RunSummary, Session, SummaryError};

/// Starts, restarts, and summarizes runs, stamping them with the service
/// clock so views never reach for wall time themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayService {
    clock: Clock,
}

impl PlayService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Begins a fresh run of the given pack.
    #[must_use]
    pub fn start(&self, pack: Arc<Pack>) -> Session {
        Session::new(pack, self.clock.now())
    }

    /// Resets a run in place, restamping its start time.
    pub fn restart(&self, session: &mut Session) {
        session.restart(self.clock.now());
    }

    /// Builds the results-screen summary for a finished run.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NotFinished` while items remain.
    pub fn summarize(&self, session: &Session) -> Result<RunSummary, SummaryError> {
        RunSummary::from_session(session, self.clock.now())
    }
}
