use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirWardenError {
    #[error("malformed path: {0}")]
    MalformedInput(String),
    #[error("cannot resolve {label}: {reason}")]
    UnresolvableEntry { label: String, reason: String },
    #[error("current directory unavailable: {0}")]
    WorkingDirectory(String),
    #[error("refusing to operate in {}: {reason}", path.display())]
    DangerousDirectory { path: PathBuf, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
