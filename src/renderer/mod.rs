//! Template engine integration.
//!
//! Views never talk to MiniJinja directly; they go through
//! [`MiniJinjaRenderer`], which owns the environment, loads template files
//! and maps engine failures onto [`crate::error::Error`].

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
pub use interface::TemplateRenderer;
