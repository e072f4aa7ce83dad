//! Font catalog types.

use serde::{Deserialize, Serialize};

/// A font option for the terminal font selector.
///
/// Entries are produced by the font enumeration collaborator; this crate
/// never checks that the font exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontOption {
    /// Unique key, e.g. the font's PostScript name
    pub identifier: String,
    /// Name shown in the dropdown
    pub display_name: String,
}

impl FontOption {
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
        }
    }
}
