//! Fixed option lists for the Appearance panel dropdowns.
//!
//! Both lists are static tables; every call returns the same slice.

use par_term_appearance_config::{ScaleOption, TitleBarMode};

/// Interface zoom levels, ascending.
pub fn scale_options() -> &'static [ScaleOption] {
    ScaleOption::all()
}

/// Title bar styles, native first.
pub fn title_bar_options() -> &'static [TitleBarMode] {
    TitleBarMode::all()
}
