//! Basic types and enums for configuration

use minijinja::{AutoEscape, UndefinedBehavior};
use serde::Deserialize;

/// Escaping applied to every value printed by a template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoEscapeMode {
    /// Output values verbatim
    #[default]
    None,
    /// HTML-escape output values
    Html,
    /// Serialize output values as JSON
    Json,
}

impl From<AutoEscapeMode> for AutoEscape {
    fn from(mode: AutoEscapeMode) -> Self {
        match mode {
            AutoEscapeMode::None => AutoEscape::None,
            AutoEscapeMode::Html => AutoEscape::Html,
            AutoEscapeMode::Json => AutoEscape::Json,
        }
    }
}

/// How templates treat variables that were never provided
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedMode {
    /// Missing values print as empty and are falsy
    #[default]
    Lenient,
    /// Any use of a missing value is an error
    Strict,
    /// Attribute access on a missing value stays undefined
    Chainable,
}

impl From<UndefinedMode> for UndefinedBehavior {
    fn from(mode: UndefinedMode) -> Self {
        match mode {
            UndefinedMode::Lenient => UndefinedBehavior::Lenient,
            UndefinedMode::Strict => UndefinedBehavior::Strict,
            UndefinedMode::Chainable => UndefinedBehavior::Chainable,
        }
    }
}
