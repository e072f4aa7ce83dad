//! Typed error variants for the par-term-appearance-config crate.
//!
//! File loading goes through `anyhow` at the boundary; callers that want to
//! match on a specific failure can downcast to [`ConfigError`].

use thiserror::Error;

/// Errors produced while parsing or validating an appearance section.
///
/// # Example
///
/// ```rust,no_run
/// use par_term_appearance_config::ConfigError;
///
/// fn check_load_err(e: &anyhow::Error) {
///     if let Some(cfg_err) = e.downcast_ref::<ConfigError>() {
///         match cfg_err {
///             ConfigError::Parse(p) => eprintln!("YAML parse error: {p}"),
///             ConfigError::Validation(msg) => eprintln!("Validation: {msg}"),
///         }
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The section contained invalid YAML that could not be parsed.
    #[error("YAML parse error in appearance config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string names the field and the accepted range.
    #[error("Appearance config validation error: {0}")]
    Validation(String),
}
