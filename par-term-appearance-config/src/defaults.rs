//! Default values for the appearance section.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `AppearanceConfig` fields and when a settings panel opens without a
//! loaded config.

use crate::types::TitleBarMode;

/// Smallest accepted terminal font size in pixels
pub const MIN_FONT_SIZE: u32 = 1;
/// Largest accepted terminal font size in pixels
pub const MAX_FONT_SIZE: u32 = 1024;

pub fn terminal_font_size() -> u32 {
    13
}

pub fn ui_scale_percent() -> u32 {
    100
}

pub fn title_bar_style() -> TitleBarMode {
    TitleBarMode::ThemeDrawn
}
