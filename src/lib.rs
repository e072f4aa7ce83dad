//! Appearance settings view-model for par-term.
//!
//! Holds the font, theme, zoom and title bar selections edited in the
//! Appearance settings panel, and derives what the panel displays from them:
//!
//! - Per-category theme lists, sorted by name
//! - The comment for the theme selected in each category
//! - Whether a restart is needed for the title bar style to apply
//! - The fixed zoom and title bar option lists
//!
//! Catalog loading, persistence and rendering live elsewhere; this crate
//! only works on the in-memory copy.

pub mod appearance_settings;
pub mod options;

pub use appearance_settings::{
    AppearanceSettings, ThemeSelection, comment_for_selection, is_restart_pending,
    selected_font, themes_for_category,
};
pub use options::{scale_options, title_bar_options};

pub use par_term_appearance_config::{
    AppearanceConfig, ConfigError, FontOption, ScaleOption, ThemeCategory, ThemeOption,
    TitleBarMode,
};
