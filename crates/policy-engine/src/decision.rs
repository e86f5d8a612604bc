use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Verdict for a single path.
///
/// `reason` is empty exactly when `is_dangerous` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_dangerous: bool,
    pub reason: String,
    pub zone_label: Option<String>,
    pub matched_path: Option<PathBuf>,
}

impl Classification {
    pub fn safe() -> Self {
        Self {
            is_dangerous: false,
            reason: String::new(),
            zone_label: None,
            matched_path: None,
        }
    }

    pub fn dangerous(label: &str, matched_path: PathBuf) -> Self {
        Self {
            is_dangerous: true,
            reason: format!("You are in the {label}"),
            zone_label: Some(label.to_string()),
            matched_path: Some(matched_path),
        }
    }
}
