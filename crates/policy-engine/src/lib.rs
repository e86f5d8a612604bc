use std::path::Path;

use dirwarden_core::config::Config;
use dirwarden_core::error::DirWardenError;
use dirwarden_core::home::{HomeLocator, SystemHome};
use dirwarden_core::paths::{resolve_path, DenylistEntry};

mod decision;
pub mod rules;
pub mod zones;

pub use decision::Classification;

/// Decides whether a directory is too sensitive for a destructive tool to run in.
///
/// The denylist and the home directory are looked up again on every call.
#[derive(Debug, Clone, Default)]
pub struct Classifier<H = SystemHome> {
    home: H,
    extra_entries: Vec<DenylistEntry>,
}

impl Classifier<SystemHome> {
    /// Creates a classifier for the current OS user
    pub fn new() -> Self {
        Self::with_home(SystemHome)
    }

    /// Creates a classifier with the extra entries from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new().with_extra_entries(config.extra_entries.clone())
    }
}

impl<H: HomeLocator> Classifier<H> {
    pub fn with_home(home: H) -> Self {
        Self {
            home,
            extra_entries: Vec::new(),
        }
    }

    /// Appends entries that are scanned after the built-in denylist
    pub fn with_extra_entries(mut self, entries: Vec<DenylistEntry>) -> Self {
        self.extra_entries.extend(entries);
        self
    }

    /// Classifies `path`, which need not exist.
    ///
    /// Fails only for malformed input or when a relative path cannot be
    /// anchored at the current directory.
    pub fn classify(&self, path: impl AsRef<Path>) -> Result<Classification, DirWardenError> {
        let resolved = resolve_path(path.as_ref())?;
        let home = self.home.home_dir();
        let denylist = zones::denylist::build_denylist(&self.extra_entries);
        Ok(rules::filesystem::evaluate_path(
            &resolved,
            &denylist,
            home.as_deref(),
        ))
    }

    pub fn classify_current_dir(&self) -> Result<Classification, DirWardenError> {
        self.classify(".")
    }

    /// Classifies `path` and turns a dangerous verdict into an error unless
    /// `allow_override` is set.
    pub fn guard(
        &self,
        path: impl AsRef<Path>,
        allow_override: bool,
    ) -> Result<Classification, DirWardenError> {
        let path = path.as_ref();
        let classification = self.classify(path)?;
        if !classification.is_dangerous {
            return Ok(classification);
        }
        if allow_override {
            tracing::warn!(
                "Override in effect for {}: {}",
                path.display(),
                classification.reason
            );
            return Ok(classification);
        }
        Err(DirWardenError::DangerousDirectory {
            path: path.to_path_buf(),
            reason: classification.reason,
        })
    }
}

/// Classifies `path` against the built-in denylist for the current user.
pub fn classify(path: impl AsRef<Path>) -> Result<Classification, DirWardenError> {
    Classifier::new().classify(path)
}

/// Classifies the current working directory.
pub fn classify_current_dir() -> Result<Classification, DirWardenError> {
    Classifier::new().classify_current_dir()
}
