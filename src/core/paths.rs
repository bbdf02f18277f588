use std::path::{Path, PathBuf};

/// File name of the optional per-project config.
pub const CONFIG_FILE_NAME: &str = "rebrand.json";

/// Project config file path, relative to the working directory.
pub fn rebrand_json(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE_NAME)
}

/// Path relative to `base` for display, or the path itself when it lies outside.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
