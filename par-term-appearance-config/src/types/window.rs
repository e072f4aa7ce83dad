//! Window chrome and UI zoom types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Title Bar
// ============================================================================

/// Window title bar style
///
/// Switching styles only takes effect after the application restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TitleBarMode {
    /// Title bar drawn by the window manager
    Native,
    /// Title bar drawn by the interface theme (default)
    #[default]
    #[serde(rename = "theme")]
    ThemeDrawn,
}

impl TitleBarMode {
    /// Display name for settings UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TitleBarMode::Native => "Native title bar",
            TitleBarMode::ThemeDrawn => "Theme title bar",
        }
    }

    /// All title bar modes for UI iteration
    pub fn all() -> &'static [TitleBarMode] {
        &[TitleBarMode::Native, TitleBarMode::ThemeDrawn]
    }
}

// ============================================================================
// UI Scale
// ============================================================================

/// One entry of the interface zoom dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOption {
    pub percent: u32,
    pub label: &'static str,
}

static SCALE_OPTIONS: [ScaleOption; 13] = [
    ScaleOption::new(25, "25%"),
    ScaleOption::new(50, "50%"),
    ScaleOption::new(65, "65%"),
    ScaleOption::new(80, "80%"),
    ScaleOption::new(90, "90%"),
    ScaleOption::new(100, "100%"),
    ScaleOption::new(110, "110%"),
    ScaleOption::new(120, "120%"),
    ScaleOption::new(150, "150%"),
    ScaleOption::new(175, "175%"),
    ScaleOption::new(200, "200%"),
    ScaleOption::new(250, "250%"),
    ScaleOption::new(300, "300%"),
];

impl ScaleOption {
    const fn new(percent: u32, label: &'static str) -> Self {
        Self { percent, label }
    }

    /// All scale options in ascending order
    pub fn all() -> &'static [ScaleOption] {
        &SCALE_OPTIONS
    }

    /// Look up the option for an exact percentage
    pub fn find(percent: u32) -> Option<&'static ScaleOption> {
        SCALE_OPTIONS.iter().find(|opt| opt.percent == percent)
    }
}

/// Snap an arbitrary percentage to the closest available scale option.
///
/// Ties resolve to the smaller option.
pub fn nearest_scale_percent(percent: u32) -> u32 {
    SCALE_OPTIONS
        .iter()
        .min_by_key(|opt| opt.percent.abs_diff(percent))
        .map(|opt| opt.percent)
        .unwrap_or(crate::defaults::ui_scale_percent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_labels_match_percent() {
        for opt in ScaleOption::all() {
            assert_eq!(opt.label, format!("{}%", opt.percent));
        }
    }

    #[test]
    fn test_scale_options_ascending() {
        let percents: Vec<u32> = ScaleOption::all().iter().map(|o| o.percent).collect();
        assert_eq!(
            percents,
            vec![25, 50, 65, 80, 90, 100, 110, 120, 150, 175, 200, 250, 300]
        );
    }

    #[test]
    fn test_scale_find() {
        assert_eq!(ScaleOption::find(175).map(|o| o.label), Some("175%"));
        assert!(ScaleOption::find(99).is_none());
    }

    #[test]
    fn test_nearest_scale_percent() {
        assert_eq!(nearest_scale_percent(100), 100);
        assert_eq!(nearest_scale_percent(0), 25);
        assert_eq!(nearest_scale_percent(104), 100);
        assert_eq!(nearest_scale_percent(106), 110);
        // Equidistant between 100 and 110
        assert_eq!(nearest_scale_percent(105), 100);
        assert_eq!(nearest_scale_percent(10_000), 300);
    }

    #[test]
    fn test_title_bar_serde_names() {
        assert_eq!(
            serde_yaml_ng::to_string(&TitleBarMode::ThemeDrawn)
                .unwrap()
                .trim(),
            "theme"
        );
        let mode: TitleBarMode = serde_yaml_ng::from_str("native").unwrap();
        assert_eq!(mode, TitleBarMode::Native);
    }

    #[test]
    fn test_title_bar_default_is_theme_drawn() {
        assert_eq!(TitleBarMode::default(), TitleBarMode::ThemeDrawn);
    }
}
