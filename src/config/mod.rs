//! Configuration for views and their template engine
//!
//! This module contains the configuration system components:
//! - `types`: Enums selecting engine behaviour
//! - `loader`: Engine options, view configuration and file loading

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use loader::{EngineOptions, ViewConfig};
pub use types::{AutoEscapeMode, UndefinedMode};
