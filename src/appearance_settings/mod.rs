//! Working state of the Appearance settings panel.
//!
//! An [`AppearanceSettings`] is created each time the panel opens and
//! dropped when it closes. The rendering layer edits the public selection
//! fields directly and reads the derived values on every frame.
//!
//! ## Sub-module layout
//!
//! | File | Contents |
//! |------|----------|
//! | `mod.rs` (this file) | `AppearanceSettings` struct, construction, catalog and selection access |
//! | `derived.rs` | Pure derivations: per-category theme lists, selected comment, restart flag |

use par_term_appearance_config::{
    AppearanceConfig, FontOption, ThemeCategory, ThemeOption, TitleBarMode,
};

mod derived;

pub use derived::{comment_for_selection, is_restart_pending, selected_font, themes_for_category};

/// Selected theme identifier for each category.
///
/// Identifiers may reference themes that are not in the current catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSelection {
    pub terminal: String,
    pub syntax: String,
    pub interface: String,
}

impl ThemeSelection {
    pub fn get(&self, category: ThemeCategory) -> &str {
        match category {
            ThemeCategory::Terminal => &self.terminal,
            ThemeCategory::Syntax => &self.syntax,
            ThemeCategory::Interface => &self.interface,
        }
    }

    pub fn set(&mut self, category: ThemeCategory, identifier: impl Into<String>) {
        let slot = match category {
            ThemeCategory::Terminal => &mut self.terminal,
            ThemeCategory::Syntax => &mut self.syntax,
            ThemeCategory::Interface => &mut self.interface,
        };
        *slot = identifier.into();
    }
}

/// Appearance preferences being edited plus the catalogs they select from.
#[derive(Debug, Clone)]
pub struct AppearanceSettings {
    /// Identifier of the selected terminal font
    pub terminal_font: String,
    /// Terminal font size in pixels (the input layer keeps it in 1..=1024)
    pub terminal_font_size: u32,
    /// Selected theme per category
    pub selected_themes: ThemeSelection,
    /// Interface zoom percentage
    pub ui_scale_percent: u32,
    /// Title bar style currently chosen in the panel
    pub title_bar_mode: TitleBarMode,

    /// Title bar style the running process was started with
    title_bar_mode_at_startup: TitleBarMode,
    available_fonts: Vec<FontOption>,
    available_themes: Vec<ThemeOption>,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSettings {
    /// Create the panel state with default values and empty catalogs.
    pub fn new() -> Self {
        Self::from_config(&AppearanceConfig::default())
    }

    /// Create the panel state from a loaded appearance section.
    ///
    /// The config's title bar style becomes the startup snapshot used by
    /// [`is_restart_pending`].
    pub fn from_config(config: &AppearanceConfig) -> Self {
        Self {
            terminal_font: config.terminal_font.clone(),
            terminal_font_size: config.terminal_font_size,
            selected_themes: ThemeSelection {
                terminal: config.theme_terminal.clone(),
                syntax: config.theme_syntax.clone(),
                interface: config.theme_interface.clone(),
            },
            ui_scale_percent: config.ui_scale_percent,
            title_bar_mode: config.title_bar_style,
            title_bar_mode_at_startup: config.title_bar_style,
            available_fonts: Vec::new(),
            available_themes: Vec::new(),
        }
    }

    /// Build the appearance section reflecting the current selections.
    ///
    /// Values are copied as-is; out-of-range sizes are not repaired here.
    pub fn to_config(&self) -> AppearanceConfig {
        AppearanceConfig {
            terminal_font: self.terminal_font.clone(),
            terminal_font_size: self.terminal_font_size,
            theme_terminal: self.selected_themes.terminal.clone(),
            theme_syntax: self.selected_themes.syntax.clone(),
            theme_interface: self.selected_themes.interface.clone(),
            ui_scale_percent: self.ui_scale_percent,
            title_bar_style: self.title_bar_mode,
        }
    }

    pub fn title_bar_mode_at_startup(&self) -> TitleBarMode {
        self.title_bar_mode_at_startup
    }

    pub fn fonts(&self) -> &[FontOption] {
        &self.available_fonts
    }

    pub fn all_themes(&self) -> &[ThemeOption] {
        &self.available_themes
    }

    /// Swap in a new font catalog.
    pub fn replace_fonts(&mut self, fonts: Vec<FontOption>) {
        log::debug!("Appearance font catalog replaced ({} fonts)", fonts.len());
        self.available_fonts = fonts;
    }

    /// Swap in a new theme catalog.
    pub fn replace_themes(&mut self, themes: Vec<ThemeOption>) {
        log::debug!("Appearance theme catalog replaced ({} themes)", themes.len());
        self.available_themes = themes;
    }

    pub fn selected_theme(&self, category: ThemeCategory) -> &str {
        self.selected_themes.get(category)
    }

    pub fn set_theme(&mut self, category: ThemeCategory, identifier: impl Into<String>) {
        self.selected_themes.set(category, identifier);
    }

    /// Change the title bar style.
    pub fn set_title_bar_mode(&mut self, mode: TitleBarMode) {
        if mode == self.title_bar_mode {
            return;
        }
        self.title_bar_mode = mode;
        if mode != self.title_bar_mode_at_startup {
            log::info!(
                "Title bar style changed to '{}', restart required",
                mode.display_name()
            );
        }
    }

    pub fn themes_for_category(&self, category: ThemeCategory) -> Vec<&ThemeOption> {
        themes_for_category(self, category)
    }

    pub fn comment_for_selection(&self, category: ThemeCategory) -> &str {
        comment_for_selection(self, category)
    }

    pub fn is_restart_pending(&self) -> bool {
        is_restart_pending(self)
    }

    pub fn selected_font(&self) -> Option<&FontOption> {
        selected_font(self)
    }
}
