use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::aid::{AidError, AidInventory, AidKind};
use crate::model::ids::ItemId;
use crate::model::item::{Item, ItemDef, ItemError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum PackError {
    #[error("pack title cannot be empty")]
    EmptyTitle,

    #[error("pack needs at least one item")]
    EmptyPack,

    #[error("pack reward must be greater than zero")]
    ZeroReward,

    #[error("reward {reward} over {items} items overflows the score range")]
    ScoreOverflow { reward: u32, items: usize },

    #[error("duplicate item id {id}")]
    DuplicateItemId { id: ItemId },

    #[error(transparent)]
    UnknownAid(#[from] AidError),

    #[error("item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: ItemError,
    },
}

//
// ─── PACK ──────────────────────────────────────────────────────────────────────
//

/// A validated, ordered sequence of items with the run-wide rules a
/// session plays under: the per-item reward and the starting aid grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    title: String,
    items: Vec<Item>,
    reward: u32,
    initial_aids: AidInventory,
}

impl Pack {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Points granted for each correct answer.
    #[must_use]
    pub fn reward(&self) -> u32 {
        self.reward
    }

    /// Aid counts a fresh session starts with.
    #[must_use]
    pub fn initial_aids(&self) -> AidInventory {
        self.initial_aids
    }

    /// Highest score a perfect run can reach.
    ///
    /// `PackDef::validate` bounds `reward * len`, so the product fits.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.reward * self.items.len() as u32
    }
}

//
// ─── PACK DEF ──────────────────────────────────────────────────────────────────
//

/// Unvalidated pack definition, as authored in code or a pack file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackDef {
    pub title: String,
    pub reward: u32,
    #[serde(default)]
    pub aids: Vec<AidGrantDef>,
    pub items: Vec<ItemDef>,
}

/// One starting aid grant, keyed by the aid's wire name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AidGrantDef {
    pub kind: String,
    pub count: u8,
}

impl PackDef {
    /// Validates the definition into a `Pack`.
    ///
    /// # Errors
    ///
    /// Returns a `PackError` describing the first problem found. Item
    /// problems carry the item's position in the pack.
    pub fn validate(self) -> Result<Pack, PackError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(PackError::EmptyTitle);
        }
        if self.reward == 0 {
            return Err(PackError::ZeroReward);
        }
        if self.items.is_empty() {
            return Err(PackError::EmptyPack);
        }
        // a perfect run's score, reward * len, must stay within u32
        if u32::try_from(self.items.len())
            .ok()
            .and_then(|count| self.reward.checked_mul(count))
            .is_none()
        {
            return Err(PackError::ScoreOverflow {
                reward: self.reward,
                items: self.items.len(),
            });
        }

        let mut eliminate = 0u8;
        let mut skip = 0u8;
        for grant in self.aids {
            let kind: AidKind = grant.kind.parse()?;
            match kind {
                AidKind::Eliminate => eliminate = eliminate.saturating_add(grant.count),
                AidKind::Skip => skip = skip.saturating_add(grant.count),
            }
        }

        let mut items = Vec::with_capacity(self.items.len());
        let mut seen = HashSet::new();
        for (index, def) in self.items.into_iter().enumerate() {
            let item = def
                .validate()
                .map_err(|source| PackError::Item { index, source })?;
            if !seen.insert(item.id()) {
                return Err(PackError::DuplicateItemId { id: item.id() });
            }
            items.push(item);
        }

        Ok(Pack {
            title,
            items,
            reward: self.reward,
            initial_aids: AidInventory::new(eliminate, skip),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::KeyDef;

    fn item_def(id: u64) -> ItemDef {
        ItemDef {
            id,
            category: None,
            title: None,
            prompt: format!("question {id}"),
            key: KeyDef::Choice {
                options: vec!["a".to_string(), "b".to_string()],
                correct: 0,
            },
            hints: Vec::new(),
            explanation: None,
        }
    }

    fn pack_def() -> PackDef {
        PackDef {
            title: "Basics".to_string(),
            reward: 10,
            aids: vec![
                AidGrantDef {
                    kind: "eliminate-wrong-option".to_string(),
                    count: 2,
                },
                AidGrantDef {
                    kind: "skip-item".to_string(),
                    count: 1,
                },
            ],
            items: vec![item_def(1), item_def(2)],
        }
    }

    #[test]
    fn pack_def_validates() {
        let pack = pack_def().validate().unwrap();
        assert_eq!(pack.title(), "Basics");
        assert_eq!(pack.len(), 2);
        assert_eq!(pack.reward(), 10);
        assert_eq!(pack.max_score(), 20);
        assert_eq!(pack.initial_aids().count(AidKind::Eliminate), 2);
        assert_eq!(pack.initial_aids().count(AidKind::Skip), 1);
    }

    #[test]
    fn aid_grants_accumulate() {
        let mut def = pack_def();
        def.aids.push(AidGrantDef {
            kind: "skip-item".to_string(),
            count: 2,
        });
        let pack = def.validate().unwrap();
        assert_eq!(pack.initial_aids().count(AidKind::Skip), 3);
    }

    #[test]
    fn unknown_aid_kind_fails() {
        let mut def = pack_def();
        def.aids[0].kind = "phone-a-friend".to_string();
        let err = def.validate().unwrap_err();
        assert!(matches!(err, PackError::UnknownAid(_)));
    }

    #[test]
    fn empty_title_fails() {
        let mut def = pack_def();
        def.title = "  ".to_string();
        assert!(matches!(def.validate(), Err(PackError::EmptyTitle)));
    }

    #[test]
    fn zero_reward_fails() {
        let mut def = pack_def();
        def.reward = 0;
        assert!(matches!(def.validate(), Err(PackError::ZeroReward)));
    }

    #[test]
    fn empty_item_list_fails() {
        let mut def = pack_def();
        def.items.clear();
        assert!(matches!(def.validate(), Err(PackError::EmptyPack)));
    }

    #[test]
    fn overflowing_total_reward_fails() {
        let mut def = pack_def();
        def.reward = 3_000_000_000;
        let err = def.validate().unwrap_err();
        assert!(matches!(
            err,
            PackError::ScoreOverflow {
                reward: 3_000_000_000,
                items: 2,
            }
        ));
    }

    #[test]
    fn total_reward_at_the_u32_boundary_validates() {
        let mut def = pack_def();
        def.reward = u32::MAX / 2;
        let pack = def.validate().unwrap();
        assert_eq!(pack.max_score(), u32::MAX - 1);
    }

    #[test]
    fn duplicate_item_id_fails() {
        let mut def = pack_def();
        def.items.push(item_def(1));
        let err = def.validate().unwrap_err();
        assert!(matches!(
            err,
            PackError::DuplicateItemId { id } if id == ItemId::new(1)
        ));
    }

    #[test]
    fn item_errors_carry_position() {
        let mut def = pack_def();
        def.items[1].prompt = " ".to_string();
        let err = def.validate().unwrap_err();
        assert!(matches!(
            err,
            PackError::Item {
                index: 1,
                source: ItemError::EmptyPrompt,
            }
        ));
    }

    #[test]
    fn no_grants_means_empty_inventory() {
        let mut def = pack_def();
        def.aids.clear();
        let pack = def.validate().unwrap();
        assert_eq!(pack.initial_aids().count(AidKind::Eliminate), 0);
        assert_eq!(pack.initial_aids().count(AidKind::Skip), 0);
    }
}
