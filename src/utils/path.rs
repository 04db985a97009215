//! Path utilities: expand ~ and resolve snapshot paths from the config.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Relative paths in the config file are relative to the config directory.
pub fn resolve_from(base: &Path, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() { p } else { base.join(p) }
}

/// Paths given on the command line are relative to the working directory.
pub fn absolutize(path: &str) -> String {
    let p = expand_tilde(path);
    if p.is_absolute() {
        return p.to_string_lossy().to_string();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&p))
        .unwrap_or(p)
        .to_string_lossy()
        .to_string()
}
