use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::paths;
use crate::rebrand::{Replacement, ReplacementMap};

/// Root configuration structure for rebrand.json
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RebrandConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Everything a run is driven by. Each field falls back to its built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    /// Directory walked recursively, relative to the working directory.
    #[serde(default = "default_root")]
    pub root: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Files in the working directory processed regardless of extension.
    #[serde(default = "default_root_files")]
    pub root_files: Vec<String>,

    /// Applied in order; earlier entries run first.
    #[serde(default = "default_replacements")]
    pub replacements: Vec<Replacement>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            root_files: default_root_files(),
            replacements: default_replacements(),
        }
    }
}

impl Defaults {
    /// Validate and build the replacement mapping.
    pub fn replacement_map(&self) -> Result<ReplacementMap> {
        ReplacementMap::new(self.replacements.clone())
    }

    /// Reject values that would make a run silently do the wrong thing.
    pub fn validate(&self) -> Result<()> {
        if self.root.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "root",
                Some(self.root.clone()),
                "Walk root must not be empty",
            ));
        }

        for (index, ext) in self.extensions.iter().enumerate() {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(Error::config_invalid_value(
                    format!("extensions[{}]", index),
                    Some(ext.clone()),
                    "Extensions must start with '.' followed by a suffix (e.g. \".md\")",
                ));
            }
        }

        self.replacement_map().map(|_| ())
    }
}

fn default_root() -> String {
    "src".to_string()
}

fn default_extensions() -> Vec<String> {
    [
        ".ts", ".tsx", ".js", ".jsx", ".json", ".md", ".css", ".yaml", ".yml",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_excluded_dirs() -> Vec<String> {
    vec![
        ".git".to_string(),
        ".next".to_string(),
        "node_modules".to_string(),
    ]
}

fn default_root_files() -> Vec<String> {
    vec![
        "package.json".to_string(),
        "README.md".to_string(),
        "next.config.mjs".to_string(),
        "tailwind.config.ts".to_string(),
        "postcss.config.mjs".to_string(),
    ]
}

// Longer keys first: a bare domain must not fire inside the email address.
fn default_replacements() -> Vec<Replacement> {
    vec![
        Replacement::new("james@jamesspalding.org", "hello@openclaw.io"),
        Replacement::new("jamesspalding.org", "openclaw.io"),
        Replacement::new("jamesspalding.com", "openclaw.io"),
        Replacement::new("James Spalding", "OpenClaw"),
        Replacement::new("jamesspalding", "openclaw"),
    ]
}

// =============================================================================
// Loading
// =============================================================================

/// Where the config was (or would be) read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSource {
    pub path: String,
    pub exists: bool,
}

/// Resolve which config file applies: an explicit path wins over
/// `<base>/rebrand.json`.
pub fn config_source(base: &Path, explicit: Option<&Path>) -> ConfigSource {
    let path: PathBuf = match explicit {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => base.join(p),
        None => paths::rebrand_json(base),
    };

    ConfigSource {
        exists: path.is_file(),
        path: path.display().to_string(),
    }
}

/// Load the effective config.
///
/// A missing `rebrand.json` yields built-in defaults; an explicit path that
/// does not exist is an error. A file that exists must parse and validate.
pub fn load_config(base: &Path, explicit: Option<&Path>) -> Result<RebrandConfig> {
    let source = config_source(base, explicit);

    if !source.exists {
        if explicit.is_some() {
            return Err(Error::config_not_found(source.path));
        }
        return Ok(RebrandConfig::default());
    }

    let config = load_config_from_file(Path::new(&source.path))?;
    config.defaults.validate()?;
    Ok(config)
}

fn load_config_from_file(path: &Path) -> Result<RebrandConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtin_defaults_match_documented_constants() {
        let d = builtin_defaults();
        assert_eq!(d.root, "src");
        assert_eq!(d.extensions.len(), 9);
        assert!(d.extensions.contains(&".yml".to_string()));
        assert_eq!(d.excluded_dirs, vec![".git", ".next", "node_modules"]);
        assert_eq!(d.root_files[0], "package.json");
        assert_eq!(d.root_files.len(), 5);
        d.validate().unwrap();
    }

    #[test]
    fn builtin_mapping_is_lint_clean() {
        let map = builtin_defaults().replacement_map().unwrap();
        assert!(map.lint().is_empty(), "{:?}", map.lint());
    }

    #[test]
    fn missing_project_config_falls_back_to_builtin() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.defaults, builtin_defaults());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(Path::new("custom.json"))).unwrap_err();
        assert_eq!(err.code.as_str(), "config.not_found");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rebrand.json"),
            r#"{"defaults": {"root": "app", "replacements": [{"from": "Acme", "to": "Zenith"}]}}"#,
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.defaults.root, "app");
        assert_eq!(config.defaults.replacements, vec![Replacement::new("Acme", "Zenith")]);
        assert_eq!(config.defaults.extensions, builtin_defaults().extensions);
    }

    #[test]
    fn malformed_config_is_reported() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rebrand.json"), "{ not json").unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_json");
    }

    #[test]
    fn extension_without_dot_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rebrand.json"),
            r#"{"defaults": {"extensions": [".md", "ts"]}}"#,
        )
        .unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
        assert_eq!(err.details["key"], "extensions[1]");
    }

    #[test]
    fn empty_replacement_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rebrand.json"),
            r#"{"defaults": {"replacements": [{"from": "", "to": "x"}]}}"#,
        )
        .unwrap();

        let err = load_config(dir.path(), None).unwrap_err();
        assert_eq!(err.code.as_str(), "config.invalid_value");
    }

    #[test]
    fn config_source_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let source = config_source(dir.path(), Some(Path::new("other.json")));
        assert!(source.path.ends_with("other.json"));
        assert!(!source.exists);

        let source = config_source(dir.path(), None);
        assert!(source.path.ends_with("rebrand.json"));
    }
}
