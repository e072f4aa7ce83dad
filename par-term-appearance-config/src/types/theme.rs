//! Theme catalog types.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The part of the UI a theme styles.
///
/// A theme can cover several categories at once, so catalog entries carry a
/// set of these rather than a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeCategory {
    /// Terminal colors (ANSI palette, cursor, selection)
    Terminal,
    /// Text and syntax highlighting
    Syntax,
    /// Window chrome, tabs and panels
    #[serde(alias = "gui")]
    Interface,
}

impl ThemeCategory {
    /// Label for the category's selector in the settings panel
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeCategory::Terminal => "Terminal Theme",
            ThemeCategory::Syntax => "Text & Syntax Theme",
            ThemeCategory::Interface => "Interface Theme",
        }
    }

    /// All categories in panel order
    pub fn all() -> &'static [ThemeCategory] {
        &[
            ThemeCategory::Terminal,
            ThemeCategory::Syntax,
            ThemeCategory::Interface,
        ]
    }
}

/// A theme entry from the theme catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOption {
    /// Unique key used by the config to reference this theme
    pub identifier: String,
    /// Name shown in the dropdown and used for ordering
    pub display_name: String,
    /// Categories this theme can be selected for
    #[serde(default)]
    pub categories: HashSet<ThemeCategory>,
    /// Free-form note shown under the selector, may be empty
    #[serde(default)]
    pub comment: String,
}

impl ThemeOption {
    /// Create a theme with no categories and an empty comment.
    pub fn new(identifier: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            categories: HashSet::new(),
            comment: String::new(),
        }
    }

    /// Add a category to this theme.
    pub fn with_category(mut self, category: ThemeCategory) -> Self {
        self.categories.insert(category);
        self
    }

    /// Set the comment shown when this theme is selected.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn belongs_to(&self, category: ThemeCategory) -> bool {
        self.categories.contains(&category)
    }
}
