use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Find every `*.csv` file under `root`, at any depth.
///
/// Non-CSV files are ignored and subdirectories are traversed fully.
/// The returned order is whatever `glob` yields, which depends on the
/// filesystem; callers must not rely on it being stable across platforms.
pub fn find_csv_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let pattern = root.as_ref().join("**").join("*.csv");
    let pattern = pattern.to_string_lossy().into_owned();

    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("Invalid glob pattern {:?}", pattern))? {
        let path = entry.with_context(|| format!("Failed to read entry for {:?}", pattern))?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Derive the prompt-type key from a CSV path: the base name with the
/// directory prefix and extension dropped. `None` only for paths with
/// no base name at all (e.g. `..`).
pub fn prompt_type(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().into_owned())
}
