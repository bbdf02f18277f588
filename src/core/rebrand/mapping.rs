//! Replacement mapping: ordered literal substitutions.
//!
//! Entries are applied one after another to the same buffer, so an entry sees
//! the output of every entry before it. `lint` flags orderings where that
//! cumulative application does something the author probably did not mean.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single literal substitution rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of applying a mapping to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub content: String,
    /// Total occurrences replaced across all entries.
    pub replacements: usize,
}

/// A potential ordering hazard between mapping entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingWarning {
    /// Warning category: `shadowed` or `reintroduced`.
    pub kind: String,
    /// Index of the entry the warning is about.
    pub entry: usize,
    /// Index of the entry that causes it.
    pub conflicts_with: usize,
    pub message: String,
}

/// Ordered, immutable replacement mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<Replacement>,
}

impl ReplacementMap {
    /// Build a mapping, rejecting empty keys (they would match everywhere).
    pub fn new(entries: Vec<Replacement>) -> Result<Self> {
        if let Some(index) = entries.iter().position(|r| r.from.is_empty()) {
            return Err(Error::config_invalid_value(
                format!("replacements[{}].from", index),
                None,
                "Replacement key must not be empty",
            ));
        }
        Ok(Self { entries })
    }

    /// Apply every entry in order to the cumulative buffer.
    ///
    /// Each entry replaces all non-overlapping occurrences, scanning left to right.
    pub fn apply(&self, content: &str) -> Applied {
        let mut buffer = content.to_string();
        let mut replacements = 0;

        for entry in &self.entries {
            let count = buffer.matches(entry.from.as_str()).count();
            if count == 0 {
                continue;
            }
            buffer = buffer.replace(entry.from.as_str(), &entry.to);
            replacements += count;
        }

        Applied {
            content: buffer,
            replacements,
        }
    }

    /// Report ordering hazards.
    ///
    /// - `shadowed`: an earlier key is a substring of a later key, so the later
    ///   key is consumed piecemeal before it can ever match whole.
    /// - `reintroduced`: a replacement value contains its own key or a later
    ///   entry's key, so a second run would change the content again.
    pub fn lint(&self) -> Vec<MappingWarning> {
        let mut warnings = Vec::new();

        for (later, entry) in self.entries.iter().enumerate() {
            for (earlier, prior) in self.entries[..later].iter().enumerate() {
                if entry.from.contains(prior.from.as_str()) {
                    warnings.push(MappingWarning {
                        kind: "shadowed".to_string(),
                        entry: later,
                        conflicts_with: earlier,
                        message: format!(
                            "Key '{}' contains earlier key '{}' and will never match whole; move it before entry {}",
                            entry.from, prior.from, earlier
                        ),
                    });
                }
            }
        }

        for (index, entry) in self.entries.iter().enumerate() {
            for (target, other) in self.entries.iter().enumerate().skip(index) {
                if entry.to.contains(other.from.as_str()) {
                    warnings.push(MappingWarning {
                        kind: "reintroduced".to_string(),
                        entry: index,
                        conflicts_with: target,
                        message: format!(
                            "Replacement '{}' contains key '{}'; repeated runs will not converge",
                            entry.to, other.from
                        ),
                    });
                }
            }
        }

        warnings
    }
}
