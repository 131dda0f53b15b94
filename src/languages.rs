//! Fixed language table and the directory names skipped during traversal.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Recognized languages and their file extension (without the leading dot).
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Python", "py"),
    ("Rust", "rs"),
    ("Haskell", "hs"),
    ("Lua", "lua"),
    ("TypeScript", "ts"),
    ("JavaScript", "js"),
    ("Swift", "swift"),
];

/// Directory basenames that are never descended into.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "__pycache__",
    ".git",
    "venv",
    "env",
    ".venv",
    "target",
];

fn extension_table() -> &'static HashMap<&'static str, &'static str> {
    static BY_EXTENSION: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    BY_EXTENSION.get_or_init(|| {
        LANGUAGES
            .iter()
            .map(|&(language, extension)| (extension, language))
            .collect()
    })
}

/// Look up the language registered for `extension`. Matching is exact and case-sensitive.
pub fn language_for_extension(extension: &str) -> Option<&'static str> {
    extension_table().get(extension).copied()
}

pub fn is_ignored_dir(name: &str) -> bool {
    IGNORED_DIRS.contains(&name)
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
