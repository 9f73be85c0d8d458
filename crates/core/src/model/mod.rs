mod aid;
mod ids;
mod item;
mod pack;
mod session;
mod summary;
mod workbench;

pub use aid::{AidError, AidInventory, AidKind};
pub use ids::{ItemId, ParseIdError};

pub use item::{AnswerKey, Item, ItemDef, ItemError, KeyDef};
pub use pack::{AidGrantDef, Pack, PackDef, PackError};
pub use session::{
    AidEffect, ItemResult, Outcome, Progress, Session, SessionError, Submission, Verdict,
};
pub use summary::{RunSummary, SummaryError, Tier};
pub use workbench::{Candidate, ContractSource, Workbench, WorkbenchError};
