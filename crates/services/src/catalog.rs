//! Pack lookup and pack-file loading.

use std::path::Path;
use std::sync::Arc;

use chainlab_core::model::{Pack, PackDef};

use crate::content;
use crate::error::CatalogError;

/// The packs available to the app: the shipped banks, optionally replaced
/// by pack files supplied at startup. Packs are immutable once loaded, so
/// lookups hand out cheap `Arc` clones.
#[derive(Debug, Clone)]
pub struct PackCatalog {
    quiz: Arc<Pack>,
    code: Arc<Pack>,
}

impl PackCatalog {
    /// Catalog holding the shipped quiz bank and Java levels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` if a shipped pack fails validation.
    pub fn built_in() -> Result<Self, CatalogError> {
        Ok(Self {
            quiz: Arc::new(content::quiz::pack_def().validate()?),
            code: Arc::new(content::java::pack_def().validate()?),
        })
    }

    /// Replaces the quiz pack with one loaded from a TOML pack file.
    ///
    /// # Errors
    ///
    /// Propagates read, parse, and validation failures for the file.
    pub fn with_quiz_pack(mut self, path: &Path) -> Result<Self, CatalogError> {
        self.quiz = Arc::new(load_pack_file(path)?);
        Ok(self)
    }

    /// Replaces the code pack with one loaded from a TOML pack file.
    ///
    /// # Errors
    ///
    /// Propagates read, parse, and validation failures for the file.
    pub fn with_code_pack(mut self, path: &Path) -> Result<Self, CatalogError> {
        self.code = Arc::new(load_pack_file(path)?);
        Ok(self)
    }

    /// The multiple-choice quiz bank.
    #[must_use]
    pub fn quiz(&self) -> Arc<Pack> {
        Arc::clone(&self.quiz)
    }

    /// The step-by-step code challenge levels.
    #[must_use]
    pub fn code(&self) -> Arc<Pack> {
        Arc::clone(&self.code)
    }
}

/// Reads one TOML pack file and validates it into a `Pack`.
///
/// # Errors
///
/// Returns `CatalogError::Read` when the file cannot be read,
/// `CatalogError::Parse` when it is not valid TOML for a pack definition,
/// and `CatalogError::Invalid` when the definition fails validation.
pub fn load_pack_file(path: &Path) -> Result<Pack, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let def: PackDef = toml::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(def.validate()?)
}
