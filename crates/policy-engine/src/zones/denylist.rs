use dirwarden_core::paths::DenylistEntry;

/// Folders under the user's home directory, in scan order.
const HOME_FOLDERS: &[(&str, &str)] = &[
    ("Documents", "Documents folder"),
    ("Desktop", "Desktop folder"),
    ("Downloads", "Downloads folder"),
    ("Pictures", "Pictures folder"),
    ("Movies", "Movies folder"),
    ("Music", "Music folder"),
    ("Library", "Library folder"),
];

const SYSTEM_DIRS: &[(&str, &str)] = &[
    ("/Applications", "Applications folder"),
    ("/System", "System folder"),
    ("/Library", "System Library folder"),
    ("/usr", "System usr folder"),
    ("/private", "System private folder"),
];

/// Built-in entries: home, the home folders, then system directories.
pub fn builtin_denylist() -> Vec<DenylistEntry> {
    let mut entries = Vec::with_capacity(1 + HOME_FOLDERS.len() + SYSTEM_DIRS.len());
    entries.push(DenylistEntry::new("home directory", "${HOME}"));
    for (folder, label) in HOME_FOLDERS {
        entries.push(DenylistEntry::new(*label, format!("${{HOME}}/{folder}")));
    }
    for (path, label) in SYSTEM_DIRS {
        entries.push(DenylistEntry::new(*label, *path));
    }
    entries
}

/// Built-in entries followed by `extra`, so configured entries never shadow
/// a built-in label.
pub fn build_denylist(extra: &[DenylistEntry]) -> Vec<DenylistEntry> {
    let mut entries = builtin_denylist();
    entries.extend_from_slice(extra);
    entries
}
