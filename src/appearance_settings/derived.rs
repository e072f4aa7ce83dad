//! Derived values for the Appearance panel.
//!
//! Everything here is a pure function of the current [`AppearanceSettings`].
//! Catalogs are small, so results are recomputed on every call instead of
//! being cached.

use par_term_appearance_config::{FontOption, ThemeCategory, ThemeOption};

use super::AppearanceSettings;

/// Themes usable for `category`, ordered by display name.
///
/// The comparison is byte-wise and the sort is stable, so themes sharing a
/// display name keep their catalog order.
pub fn themes_for_category(
    settings: &AppearanceSettings,
    category: ThemeCategory,
) -> Vec<&ThemeOption> {
    let mut themes: Vec<&ThemeOption> = settings
        .all_themes()
        .iter()
        .filter(|theme| theme.belongs_to(category))
        .collect();
    themes.sort_by(|a, b| a.display_name.cmp(&b.display_name));
    themes
}

/// Comment of the theme selected for `category`.
///
/// Returns an empty string when the selection is not among the themes of
/// that category, including when it names a theme from another category.
pub fn comment_for_selection(settings: &AppearanceSettings, category: ThemeCategory) -> &str {
    let selected = settings.selected_theme(category);
    themes_for_category(settings, category)
        .into_iter()
        .find(|theme| theme.identifier == selected)
        .map(|theme| theme.comment.as_str())
        .unwrap_or("")
}

/// Whether the title bar style differs from the one the process started with.
pub fn is_restart_pending(settings: &AppearanceSettings) -> bool {
    settings.title_bar_mode != settings.title_bar_mode_at_startup()
}

/// Catalog entry for the selected terminal font, if the catalog has it.
pub fn selected_font(settings: &AppearanceSettings) -> Option<&FontOption> {
    settings
        .fonts()
        .iter()
        .find(|font| font.identifier == settings.terminal_font)
}
