//! Lookup of the current user's home directory.
//!
//! The classifier asks for the home directory on every call instead of
//! holding on to it, so a change of effective user is always observed.

use std::path::PathBuf;

use directories::BaseDirs;

/// Source of the current user's home directory.
pub trait HomeLocator {
    /// Returns `None` when the platform cannot tell who the user is.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Home directory as reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeLocator for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

/// A pinned home directory, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedHome(pub Option<PathBuf>);

impl FixedHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    pub fn unknown() -> Self {
        Self(None)
    }
}

impl HomeLocator for FixedHome {
    fn home_dir(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
