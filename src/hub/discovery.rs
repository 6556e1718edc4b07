//! Hub tree discovery.
//!
//! Scenario files live under `<hub>/scenarios/<maintainer>/`. Only files
//! directly inside a recognized maintainer folder are considered, so a
//! stray YAML file at the tree root or in an unknown vendor folder never
//! reaches the parser.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Maintainer folders recognized inside the scenarios tree.
pub const SCENARIO_FOLDERS: &[&str] = &["crowdsecurity"];

/// Collects scenario file paths under `<hub>/scenarios`, sorted
/// lexicographically so the output is deterministic regardless of
/// filesystem traversal order.
///
/// A missing scenarios tree yields an empty list, not an error: an empty
/// hub is a valid (if useless) input.
#[must_use]
pub fn discover_scenario_files(hub: &Path) -> Vec<PathBuf> {
    let root = hub.join("scenarios");

    let mut files: Vec<PathBuf> = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| is_yaml(entry.path()) && in_recognized_folder(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    files
}

/// Returns `true` for `.yaml` / `.yml` files.
fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Returns `true` when the file sits directly inside a recognized
/// maintainer folder.
fn in_recognized_folder(path: &Path) -> bool {
    path.parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(|name| SCENARIO_FOLDERS.contains(&name))
}

// ============================================================================
// Tests
// ============================================================================
