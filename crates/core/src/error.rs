use thiserror::Error;

use crate::model::{PackError, SessionError, SummaryError, WorkbenchError};
use crate::rule::RuleError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Pack(#[from] PackError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Workbench(#[from] WorkbenchError),
    #[error(transparent)]
    Rule(#[from] RuleError),
}
