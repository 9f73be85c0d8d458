use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised at the string boundary of the aid model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AidError {
    #[error("unknown aid kind: {0}")]
    UnknownKind(String),
}

//
// ─── AID KIND ──────────────────────────────────────────────────────────────────
//

/// Consumable aid kinds a player can spend during a run.
///
/// The set is closed on purpose: inventory is a fixed-size count table
/// indexed by kind, not an open-ended map keyed by strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AidKind {
    /// Remove one wrong option from the current choice item.
    Eliminate,
    /// Advance past the current item without answering it.
    Skip,
}

impl AidKind {
    /// Every aid kind, in inventory table order.
    pub const ALL: [AidKind; 2] = [AidKind::Eliminate, AidKind::Skip];

    pub(crate) fn slot(self) -> usize {
        match self {
            AidKind::Eliminate => 0,
            AidKind::Skip => 1,
        }
    }
}

impl fmt::Display for AidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AidKind::Eliminate => "eliminate-wrong-option",
            AidKind::Skip => "skip-item",
        };
        write!(f, "{name}")
    }
}

impl FromStr for AidKind {
    type Err = AidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eliminate-wrong-option" => Ok(AidKind::Eliminate),
            "skip-item" => Ok(AidKind::Skip),
            other => Err(AidError::UnknownKind(other.to_string())),
        }
    }
}

//
// ─── AID INVENTORY ─────────────────────────────────────────────────────────────
//

/// Fixed-size table of remaining aid charges, one slot per `AidKind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AidInventory {
    counts: [u8; AidKind::ALL.len()],
}

impl AidInventory {
    /// Creates an inventory with the given starting charges.
    #[must_use]
    pub fn new(eliminate: u8, skip: u8) -> Self {
        Self {
            counts: [eliminate, skip],
        }
    }

    /// Remaining charges for the given kind.
    #[must_use]
    pub fn count(&self, kind: AidKind) -> u8 {
        self.counts[kind.slot()]
    }

    /// Consume one charge of the given kind.
    ///
    /// Returns false (and leaves the table untouched) when no charge remains.
    pub(crate) fn spend(&mut self, kind: AidKind) -> bool {
        let slot = &mut self.counts[kind.slot()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
