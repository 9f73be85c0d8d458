use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::session::{Outcome, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("the run is not finished yet")]
    NotFinished,

    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many items for a single run: {len}")]
    TooManyItems { len: usize },
}

/// Performance band for a finished run, keyed off accuracy percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Starting,
    Developing,
    Strong,
    Expert,
}

impl Tier {
    #[must_use]
    pub fn for_accuracy(percent: u32) -> Self {
        if percent >= 90 {
            Tier::Expert
        } else if percent >= 70 {
            Tier::Strong
        } else if percent >= 50 {
            Tier::Developing
        } else {
            Tier::Starting
        }
    }
}

/// Aggregate summary for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pack_title: String,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
    incorrect: u32,
    skipped: u32,
    score: u32,
    max_score: u32,
    accuracy_percent: u32,
}

impl RunSummary {
    /// Builds a summary from a session that has reached the terminal state.
    ///
    /// Accuracy is the score as a rounded percentage of the maximum score,
    /// so skipped and incorrect items weigh the same.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::NotFinished` while items remain, and
    /// `SummaryError::InvalidTimeRange` if `completed_at` is before the
    /// session start.
    pub fn from_session(
        session: &Session,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if !session.is_finished() {
            return Err(SummaryError::NotFinished);
        }
        if completed_at < session.started_at() {
            return Err(SummaryError::InvalidTimeRange);
        }

        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut skipped = 0_u32;
        for result in session.history() {
            match result.outcome() {
                Outcome::Correct => correct = correct.saturating_add(1),
                Outcome::Incorrect => incorrect = incorrect.saturating_add(1),
                Outcome::Skipped => skipped = skipped.saturating_add(1),
            }
        }

        let total = u32::try_from(session.history().len()).map_err(|_| {
            SummaryError::TooManyItems {
                len: session.history().len(),
            }
        })?;

        let score = session.score();
        let max_score = session.pack().max_score();

        Ok(Self {
            pack_title: session.pack().title().to_owned(),
            started_at: session.started_at(),
            completed_at,
            total,
            correct,
            incorrect,
            skipped,
            score,
            max_score,
            accuracy_percent: accuracy_percent(score, max_score),
        })
    }

    #[must_use]
    pub fn pack_title(&self) -> &str {
        &self.pack_title
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::for_accuracy(self.accuracy_percent)
    }
}

/// Score over maximum score as a percentage, rounded half up.
fn accuracy_percent(score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    let scaled = u64::from(score) * 100 + u64::from(max_score) / 2;
    (scaled / u64::from(max_score)) as u32
}
