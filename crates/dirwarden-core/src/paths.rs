use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DirWardenError;

const HOME_VAR: &str = "${HOME}";

/// A labelled location that destructive tools should refuse to run in.
///
/// `path` is a template: a leading `${HOME}` is replaced by the current
/// user's home directory when the entry is resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DenylistEntry {
    pub label: String,
    pub path: String,
}

impl DenylistEntry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Expands the template against `home` and resolves the result.
    pub fn resolve(&self, home: Option<&Path>) -> Result<PathBuf, DirWardenError> {
        let expanded = expand_path_template(&self.path, home)
            .ok_or_else(|| self.unresolvable(format!("cannot expand {}", self.path)))?;
        resolve_path(&expanded).map_err(|err| self.unresolvable(err))
    }

    fn unresolvable(&self, reason: impl ToString) -> DirWardenError {
        DirWardenError::UnresolvableEntry {
            label: self.label.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Replaces a leading `${HOME}` with `home`.
///
/// Returns `None` when the template needs a home directory and none is known,
/// or when `${HOME}` is glued to a name (`${HOME}foo`).
pub fn expand_path_template(template: &str, home: Option<&Path>) -> Option<PathBuf> {
    let Some(rest) = template.strip_prefix(HOME_VAR) else {
        return Some(PathBuf::from(template));
    };
    if !rest.is_empty() && !rest.starts_with(['/', '\\']) {
        return None;
    }
    let home = home?;
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        Some(home.to_path_buf())
    } else {
        Some(home.join(rest))
    }
}

/// Resolves `path` to an absolute canonical form without requiring it to exist.
///
/// Relative paths are anchored at the current directory. Every existing
/// prefix is canonicalized so symlinks are followed; components past the
/// deepest existing ancestor are normalized lexically.
pub fn resolve_path(path: &Path) -> Result<PathBuf, DirWardenError> {
    validate_input(path)?;

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir()
            .map_err(|err| DirWardenError::WorkingDirectory(err.to_string()))?;
        cwd.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                // `resolved` is canonical up to its parent, so this only
                // expands a symlink at the last component.
                if let Ok(canonical) = fs::canonicalize(&resolved) {
                    resolved = canonical;
                }
            }
        }
    }
    Ok(resolved)
}

fn validate_input(path: &Path) -> Result<(), DirWardenError> {
    let raw = path.as_os_str();
    if raw.is_empty() {
        return Err(DirWardenError::MalformedInput("empty path".to_string()));
    }
    if raw.as_encoded_bytes().contains(&0) {
        return Err(DirWardenError::MalformedInput(format!(
            "{} contains a NUL byte",
            path.display()
        )));
    }
    Ok(())
}
