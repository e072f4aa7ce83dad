//! Appearance configuration for the par-term settings panel.
//!
//! This crate holds the plain data the appearance settings view-model works
//! with:
//!
//! - Font and theme catalog entries (`FontOption`, `ThemeOption`)
//! - Theme categories, title bar modes and UI scale options
//! - Default values for the appearance section
//! - The serde-backed `AppearanceConfig` section and its error type

pub mod config;
pub mod defaults;
pub mod error;
mod types;

pub use config::AppearanceConfig;
pub use error::ConfigError;

pub use types::{
    FontOption, ScaleOption, ThemeCategory, ThemeOption, TitleBarMode, nearest_scale_percent,
};
