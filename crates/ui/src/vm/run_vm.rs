use std::sync::Arc;

use chainlab_core::model::{AidEffect, AidKind, Pack, Session, SessionError, Verdict};
use services::PlayService;

/// Everything a play view can ask the run to do. Views dispatch intents
/// through one callback so the reveal delay sits in a single place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunIntent {
    Submit(String),
    UseAid(AidKind),
    Advance,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    /// Waiting for an answer on the current item.
    Answering,
    /// The verdict is on screen; only advancing moves on.
    Revealed,
}

/// View model for a quiz or code run: the engine session plus the bits of
/// presentation state that do not belong in the engine.
pub struct RunVm {
    session: Session,
    phase: RunPhase,
    verdict: Option<Verdict>,
    removed_option: Option<String>,
    notice: Option<String>,
}

impl RunVm {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            phase: RunPhase::Answering,
            verdict: None,
            removed_option: None,
            notice: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// The option label the eliminate aid removed on this item, if any.
    #[must_use]
    pub fn removed_option(&self) -> Option<&str> {
        self.removed_option.as_deref()
    }

    /// A short message about a rejected or empty action, for the notice row.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies one intent to the run. Rejections never change the session;
    /// they land in `notice` so the view can show what happened.
    pub fn apply(&mut self, play: &PlayService, intent: RunIntent) {
        match intent {
            RunIntent::Submit(candidate) => match self.session.submit_answer(&candidate) {
                Ok(verdict) => {
                    self.verdict = Some(verdict);
                    self.phase = RunPhase::Revealed;
                    self.notice = None;
                }
                Err(err) => self.reject(&err),
            },
            RunIntent::UseAid(kind) => match self.session.use_aid(kind) {
                Ok(AidEffect::Eliminated { removed: Some(label) }) => {
                    self.removed_option = Some(label);
                    self.notice = None;
                }
                Ok(AidEffect::Eliminated { removed: None }) => {
                    self.notice = Some("Nothing could be eliminated here.".to_string());
                }
                Ok(AidEffect::Skipped) => self.clear_item_state(),
                Err(err) => self.reject(&err),
            },
            RunIntent::Advance => match self.session.advance() {
                Ok(()) => self.clear_item_state(),
                Err(err) => self.reject(&err),
            },
            RunIntent::Restart => {
                play.restart(&mut self.session);
                self.clear_item_state();
            }
        }
    }

    fn reject(&mut self, err: &SessionError) {
        self.notice = Some(err.to_string());
    }

    fn clear_item_state(&mut self) {
        self.phase = RunPhase::Answering;
        self.verdict = None;
        self.removed_option = None;
        self.notice = None;
    }
}

/// Starts a fresh run over the given pack.
#[must_use]
pub fn start_run(play: &PlayService, pack: Arc<Pack>) -> RunVm {
    RunVm::new(play.start(pack))
}
