//! File system scanner for source sprites.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect the PNG sprites under a directory.
///
/// Results are sorted by path so batch output order is stable across runs.
pub fn scan_sprites(root: &Path) -> Vec<PathBuf> {
    let mut sprites = Vec::new();

    if !root.exists() {
        return sprites;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let is_png = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"));

        if is_png {
            sprites.push(path.to_path_buf());
        }
    }

    sprites.sort();
    sprites
}
