//! Appearance configuration types.
//!
//! Split into focused sub-modules:
//! - `font`   — Font catalog entries
//! - `theme`  — Theme categories and theme catalog entries
//! - `window` — Title bar mode and UI scale options

pub mod font;
pub mod theme;
pub mod window;

pub use font::FontOption;
pub use theme::{ThemeCategory, ThemeOption};
pub use window::{ScaleOption, TitleBarMode, nearest_scale_percent};
