/// Command line entry point for rendering templates.
pub mod cli;

/// View and engine configuration.
pub mod config;

/// Shared constants.
pub mod constants;

/// String-keyed service container and provider trait.
pub mod container;

/// Defines custom error types.
pub mod error;

/// Helpers for reading template variables.
pub mod ioutils;

/// Template engine integration.
pub mod renderer;

/// Response abstraction rendered output is written into.
pub mod response;

/// The template view.
pub mod view;

pub use config::{EngineOptions, ViewConfig};
pub use container::{Container, ServiceProvider};
pub use error::{Error, Result};
pub use response::{BufferedResponse, HttpResponse};
pub use view::TemplateView;
