use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::model::aid::{AidInventory, AidKind};
use crate::model::ids::ItemId;
use crate::model::item::{AnswerKey, Item};
use crate::model::pack::Pack;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("the run is finished; restart to play again")]
    Finished,

    #[error("an answer was already submitted for this item")]
    AlreadyAnswered,

    #[error("no {kind} charges left")]
    AidExhausted { kind: AidKind },

    #[error("{kind} was already used on this item")]
    AidAlreadyUsed { kind: AidKind },

    #[error("nothing to advance past; submit an answer or skip first")]
    NothingToAdvance,
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Judgement of a single submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == Verdict::Correct
    }
}

/// How an item left the session, recorded once per item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Outcome::Correct,
            Verdict::Incorrect => Outcome::Incorrect,
        }
    }
}

/// The answer held against the current item until the session advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    candidate: String,
    verdict: Verdict,
}

impl Submission {
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

/// One settled item in the order it was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemResult {
    item_id: ItemId,
    outcome: Outcome,
}

impl ItemResult {
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough of a pack.
///
/// The session owns all mutable progression state: the cursor into the
/// pack's item sequence, the score, the aid inventory, and the per-item
/// transients (offered options, the pending submission, the used-aid
/// latches). Every operation is a synchronous transition; a rejected call
/// leaves the session exactly as it was.
///
/// The cursor runs from 0 to the pack length inclusive. Cursor == length
/// is the terminal state, where only `restart` is accepted.
#[derive(Debug, Clone)]
pub struct Session {
    pack: Arc<Pack>,
    index: usize,
    score: u32,
    inventory: AidInventory,
    used_aids: [bool; AidKind::ALL.len()],
    /// Option indices still offered for the current choice item. Empty for
    /// pattern items and in the terminal state.
    offered: Vec<usize>,
    submitted: Option<Submission>,
    history: Vec<ItemResult>,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Starts a fresh run at the first item of the pack.
    #[must_use]
    pub fn new(pack: Arc<Pack>, started_at: DateTime<Utc>) -> Self {
        let offered = Self::full_offer(&pack, 0);
        Self {
            inventory: pack.initial_aids(),
            offered,
            pack,
            index: 0,
            score: 0,
            used_aids: [false; AidKind::ALL.len()],
            submitted: None,
            history: Vec::new(),
            started_at,
        }
    }

    // ─── operations ───

    /// Judges a candidate answer against the current item.
    ///
    /// The first submission per item settles it: a correct answer adds the
    /// pack's fixed reward to the score, an incorrect one changes nothing
    /// but the recorded verdict. Either way, the item is locked until
    /// `advance` moves past it.
    ///
    /// # Errors
    ///
    /// `Finished` in the terminal state; `AlreadyAnswered` when this item
    /// already holds a submission.
    pub fn submit_answer(&mut self, candidate: &str) -> Result<Verdict, SessionError> {
        let item = self.current_item().ok_or(SessionError::Finished)?;
        if self.submitted.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        let verdict = if item.key().accepts(candidate) {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };
        if verdict.is_correct() {
            self.score += self.pack.reward();
        }
        self.submitted = Some(Submission {
            candidate: candidate.to_owned(),
            verdict,
        });
        Ok(verdict)
    }

    /// Spends one charge of the given aid on the current item.
    ///
    /// `Eliminate` drops one wrong option from the offered set, keeping the
    /// correct option and at least one wrong one in play. When no wrong
    /// option can be spared (or the item has no option set at all) the call
    /// removes nothing but the charge is still consumed; callers that want
    /// different behavior can guard on `offered_options` first.
    /// `Skip` settles the item as skipped and moves on immediately, which
    /// may land the session in the terminal state.
    ///
    /// # Errors
    ///
    /// `Finished` in the terminal state, `AlreadyAnswered` once the item
    /// holds a submission, `AidAlreadyUsed` on the second use within one
    /// item, and `AidExhausted` when no charge remains.
    pub fn use_aid(&mut self, kind: AidKind) -> Result<AidEffect, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        if self.submitted.is_some() {
            return Err(SessionError::AlreadyAnswered);
        }
        if self.used_aids[kind.slot()] {
            return Err(SessionError::AidAlreadyUsed { kind });
        }
        if !self.inventory.spend(kind) {
            return Err(SessionError::AidExhausted { kind });
        }
        self.used_aids[kind.slot()] = true;
        match kind {
            AidKind::Eliminate => Ok(AidEffect::Eliminated {
                removed: self.eliminate_wrong_option(),
            }),
            AidKind::Skip => {
                self.settle(Outcome::Skipped);
                Ok(AidEffect::Skipped)
            }
        }
    }

    /// Moves past a settled item.
    ///
    /// Clears the per-item transients and restores the full option set for
    /// the next item. Advancing past the last item enters the terminal
    /// state.
    ///
    /// # Errors
    ///
    /// `NothingToAdvance` when the current item has no submission yet,
    /// including in the terminal state.
    pub fn advance(&mut self) -> Result<(), SessionError> {
        let Some(submission) = self.submitted.take() else {
            return Err(SessionError::NothingToAdvance);
        };
        self.settle(Outcome::from(submission.verdict));
        Ok(())
    }

    /// Resets the run to its starting state. Accepted at any point.
    pub fn restart(&mut self, restarted_at: DateTime<Utc>) {
        self.index = 0;
        self.score = 0;
        self.inventory = self.pack.initial_aids();
        self.history.clear();
        self.started_at = restarted_at;
        self.reset_item_state();
    }

    // ─── accessors ───

    #[must_use]
    pub fn pack(&self) -> &Pack {
        &self.pack
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn inventory(&self) -> AidInventory {
        self.inventory
    }

    /// Whether the given aid was already spent on the current item.
    #[must_use]
    pub fn aid_used(&self, kind: AidKind) -> bool {
        self.used_aids[kind.slot()]
    }

    /// The item under the cursor, or `None` in the terminal state.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.pack.item(self.index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.pack.len()
    }

    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submitted.as_ref()
    }

    /// Option texts still offered for the current item, in pack order.
    /// Empty for pattern items and in the terminal state.
    #[must_use]
    pub fn offered_options(&self) -> Vec<&str> {
        let Some(AnswerKey::Choice { options, .. }) = self.current_item().map(Item::key) else {
            return Vec::new();
        };
        self.offered
            .iter()
            .filter_map(|&i| options.get(i))
            .map(String::as_str)
            .collect()
    }

    /// Settled items in play order.
    #[must_use]
    pub fn history(&self) -> &[ItemResult] {
        &self.history
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            total: self.pack.len(),
            completed: self.history.len(),
            finished: self.is_finished(),
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // ─── internals ───

    /// Records the current item's outcome and moves the cursor forward.
    fn settle(&mut self, outcome: Outcome) {
        if let Some(item) = self.pack.item(self.index) {
            self.history.push(ItemResult {
                item_id: item.id(),
                outcome,
            });
        }
        self.index += 1;
        self.reset_item_state();
    }

    fn reset_item_state(&mut self) {
        self.submitted = None;
        self.used_aids = [false; AidKind::ALL.len()];
        self.offered = Self::full_offer(&self.pack, self.index);
    }

    fn full_offer(pack: &Pack, index: usize) -> Vec<usize> {
        match pack.item(index).map(Item::key) {
            Some(AnswerKey::Choice { options, .. }) => (0..options.len()).collect(),
            _ => Vec::new(),
        }
    }

    /// Removes one randomly chosen wrong option from the offered set.
    ///
    /// Leaves the set untouched unless at least two wrong options are
    /// offered, so the survivor set always keeps the correct option and one
    /// wrong one.
    fn eliminate_wrong_option(&mut self) -> Option<String> {
        let AnswerKey::Choice { options, correct } = self.current_item().map(Item::key)? else {
            return None;
        };
        let wrong: Vec<usize> = self
            .offered
            .iter()
            .copied()
            .filter(|&i| i != *correct)
            .collect();
        if wrong.len() < 2 {
            return None;
        }
        let doomed = *wrong.choose(&mut rng())?;
        let label = options.get(doomed).cloned();
        self.offered.retain(|&i| i != doomed);
        label
    }
}

/// What an accepted aid call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AidEffect {
    /// A wrong option was removed, or `None` when nothing could be spared.
    Eliminated { removed: Option<String> },
    /// The item was skipped and the cursor moved on.
    Skipped,
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Read-only view of how far a session has come.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    total: usize,
    completed: usize,
    finished: bool,
}

impl Progress {
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Items settled so far, answered or skipped.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
