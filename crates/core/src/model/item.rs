use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::ItemId;
use crate::rule::{AcceptRule, RuleError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ItemError {
    #[error("item prompt cannot be empty")]
    EmptyPrompt,

    #[error("choice item needs at least two options, got {len}")]
    TooFewOptions { len: usize },

    #[error("option {index} is blank")]
    BlankOption { index: usize },

    #[error("correct option index {index} is out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },

    #[error("pattern item solution cannot be empty")]
    EmptySolution,

    #[error(transparent)]
    Rule(#[from] RuleError),
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// How a submitted answer is judged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    /// Enumerated candidate answers with one designated correct option.
    Choice {
        options: Vec<String>,
        correct: usize,
    },
    /// Free text judged by an ordered-marker acceptance rule. The solution
    /// is reference text for the show-solution affordance, not part of the
    /// judgement.
    Pattern { rule: AcceptRule, solution: String },
}

impl AnswerKey {
    /// Returns true when the candidate answer satisfies this key.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        match self {
            AnswerKey::Choice { options, correct } => {
                options.get(*correct).is_some_and(|opt| opt == candidate)
            }
            AnswerKey::Pattern { rule, .. } => rule.matches(candidate),
        }
    }
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// One entry in a pack's fixed ordered sequence.
///
/// Immutable once validated; the engine never mutates items, only the
/// session state layered over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    category: Option<String>,
    title: Option<String>,
    prompt: String,
    key: AnswerKey,
    hints: Vec<String>,
    explanation: Option<String>,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }
}

//
// ─── ITEM DEF ──────────────────────────────────────────────────────────────────
//

/// Unvalidated item definition, as authored in code or a pack file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDef {
    pub id: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub prompt: String,
    pub key: KeyDef,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Unvalidated answer key definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeyDef {
    Choice {
        options: Vec<String>,
        correct: usize,
    },
    Pattern {
        markers: Vec<String>,
        solution: String,
    },
}

impl ItemDef {
    /// Validates the definition into an `Item`.
    ///
    /// # Errors
    ///
    /// Returns an `ItemError` describing the first problem found.
    pub fn validate(self) -> Result<Item, ItemError> {
        if self.prompt.trim().is_empty() {
            return Err(ItemError::EmptyPrompt);
        }

        let key = match self.key {
            KeyDef::Choice { options, correct } => {
                if options.len() < 2 {
                    return Err(ItemError::TooFewOptions { len: options.len() });
                }
                for (index, option) in options.iter().enumerate() {
                    if option.trim().is_empty() {
                        return Err(ItemError::BlankOption { index });
                    }
                }
                if correct >= options.len() {
                    return Err(ItemError::CorrectOutOfRange {
                        index: correct,
                        len: options.len(),
                    });
                }
                AnswerKey::Choice { options, correct }
            }
            KeyDef::Pattern { markers, solution } => {
                if solution.trim().is_empty() {
                    return Err(ItemError::EmptySolution);
                }
                let rule = AcceptRule::new(markers)?;
                AnswerKey::Pattern { rule, solution }
            }
        };

        let category = self
            .category
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        let title = self
            .title
            .map(|t| t.trim().to_owned())
            .filter(|t| !t.is_empty());
        let hints = self
            .hints
            .into_iter()
            .map(|h| h.trim().to_owned())
            .filter(|h| !h.is_empty())
            .collect();
        let explanation = self
            .explanation
            .map(|e| e.trim().to_owned())
            .filter(|e| !e.is_empty());

        Ok(Item {
            id: ItemId::new(self.id),
            category,
            title,
            prompt: self.prompt.trim().to_owned(),
            key,
            hints,
            explanation,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
