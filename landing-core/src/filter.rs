//! Filter keys for the card grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized key a filter control applies to the card grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterKey(String);

impl FilterKey {
    /// Key that shows every card.
    pub const ALL: &'static str = "all";

    /// Use a stored key verbatim, as found in a `data-filter` attribute.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn all() -> Self {
        Self(Self::ALL.to_string())
    }

    /// Derive a key from a control's visible label: trimmed, lowercased, with
    /// every whitespace run collapsed into a single hyphen.
    pub fn from_label(label: &str) -> Self {
        Self(
            label
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>()
                .join("-"),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0 == Self::ALL
    }

    /// Whether a card with the given category stays visible under this key.
    /// Missing categories count as empty, and comparison ignores case.
    pub fn shows(&self, category: Option<&str>) -> bool {
        if self.is_all() {
            return true;
        }
        category.unwrap_or_default().to_lowercase() == self.0
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
