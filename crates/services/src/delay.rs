//! Cosmetic reveal delays for the UI.

use std::time::Duration;

/// How long the UI pretends to work before revealing an already-computed
/// result. Purely presentation policy: the engine settles everything
/// synchronously, and a delay never changes an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealDelays {
    /// Pause between picking a quiz option and showing the verdict.
    pub answer: Duration,
    /// Fake "running" time for a code-challenge submission.
    pub code_run: Duration,
    /// Fake compile time on the workbench.
    pub compile: Duration,
    /// Fake deployment time on the workbench.
    pub deploy: Duration,
    /// Fake transaction time for one vote.
    pub vote: Duration,
}

impl RevealDelays {
    /// The pacing the pages ship with.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            answer: Duration::from_millis(500),
            code_run: Duration::from_millis(1000),
            compile: Duration::from_millis(2000),
            deploy: Duration::from_millis(3000),
            vote: Duration::from_millis(1500),
        }
    }

    /// Zero everywhere, for tests and headless checks.
    #[must_use]
    pub fn none() -> Self {
        Self {
            answer: Duration::ZERO,
            code_run: Duration::ZERO,
            compile: Duration::ZERO,
            deploy: Duration::ZERO,
            vote: Duration::ZERO,
        }
    }
}

impl Default for RevealDelays {
    fn default() -> Self {
        Self::standard()
    }
}
