use std::path::Path;

use dirwarden_core::paths::DenylistEntry;

use crate::decision::Classification;

/// Matches an already resolved path against `entries`, first match wins.
///
/// Only exact equality counts; a directory inside a denylisted one is safe.
/// Entries that cannot be resolved are skipped.
pub fn evaluate_path(
    resolved: &Path,
    entries: &[DenylistEntry],
    home: Option<&Path>,
) -> Classification {
    for entry in entries {
        let dangerous_path = match entry.resolve(home) {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!("Skipping denylist entry: {}", err);
                continue;
            }
        };
        if resolved == dangerous_path {
            tracing::debug!("{} matches {}", resolved.display(), entry.label);
            return Classification::dangerous(&entry.label, dangerous_path);
        }
    }
    Classification::safe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::zones::denylist::builtin_denylist;

    fn fake_home() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let home = fs::canonicalize(temp_dir.path()).unwrap();
        (temp_dir, home)
    }

    #[test]
    fn test_exact_match() {
        let (_temp_dir, home) = fake_home();
        let pictures = home.join("Pictures");
        let decision = evaluate_path(&pictures, &builtin_denylist(), Some(home.as_path()));
        assert!(decision.is_dangerous);
        assert_eq!(decision.reason, "You are in the Pictures folder");
        assert_eq!(decision.zone_label.as_deref(), Some("Pictures folder"));
        assert_eq!(decision.matched_path, Some(pictures));
    }

    #[test]
    fn test_nested_path_is_safe() {
        let (_temp_dir, home) = fake_home();
        let nested = home.join("Downloads").join("archive");
        let decision = evaluate_path(&nested, &builtin_denylist(), Some(home.as_path()));
        assert_eq!(decision, Classification::safe());
    }

    #[test]
    fn test_unknown_home_skips_home_entries() {
        let entries = builtin_denylist();
        let decision = evaluate_path(Path::new("/System"), &entries, None);
        assert!(decision.is_dangerous);
        assert_eq!(decision.reason, "You are in the System folder");
    }

    #[test]
    fn test_first_match_wins() {
        let entries = vec![
            DenylistEntry::new("first alias", "/srv/shared"),
            DenylistEntry::new("second alias", "/srv/shared"),
        ];
        let decision = evaluate_path(Path::new("/srv/shared"), &entries, None);
        assert_eq!(decision.reason, "You are in the first alias");
    }

    #[test]
    fn test_reversed_order_same_verdict() {
        let (_temp_dir, home) = fake_home();
        let forward = builtin_denylist();
        let mut reversed = forward.clone();
        reversed.reverse();

        let candidates = [
            home.clone(),
            home.join("Music"),
            home.join("Music/albums"),
            home.join("elsewhere"),
            PathBuf::from("/Applications"),
        ];
        for candidate in &candidates {
            assert_eq!(
                evaluate_path(candidate, &forward, Some(home.as_path())).is_dangerous,
                evaluate_path(candidate, &reversed, Some(home.as_path())).is_dangerous,
                "verdict changed for {}",
                candidate.display()
            );
        }
    }
}
