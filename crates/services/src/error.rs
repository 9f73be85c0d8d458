//! Failure types for the catalog and the pack-file loader.

use std::path::PathBuf;

use thiserror::Error;

use chainlab_core::model::PackError;

/// Errors emitted by `PackCatalog` and the pack-file loader.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read pack file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pack file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] PackError),
}

impl CatalogError {
    /// The pack file involved, when the error came from one.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            CatalogError::Read { path, .. } | CatalogError::Parse { path, .. } => Some(path),
            CatalogError::Invalid(_) => None,
        }
    }
}
