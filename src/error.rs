use minijinja::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The engine could not locate the resolved template path.
    #[error("Template not found. Original error: {0}")]
    TemplateNotFound(#[source] minijinja::Error),

    /// The template source failed to parse.
    #[error("Template syntax error. Original error: {0}")]
    TemplateSyntax(#[source] minijinja::Error),

    /// The template parsed but failed while being evaluated.
    #[error("Failed to render. Original error: {0}")]
    Render(#[source] minijinja::Error),

    #[error("Default variable '{key}' is not set.")]
    KeyNotFound { key: String },

    #[error("Cannot register filter '{name}': {reason}.")]
    FilterRegistration { name: String, reason: String },

    #[error("Template variables must be a mapping, got {kind}.")]
    InvalidVariables { kind: &'static str },

    #[error("Invalid engine option: {0}.")]
    InvalidOption(String),

    #[error("No service registered under '{key}'.")]
    ServiceNotFound { key: String },

    #[error("Service '{key}' is not of type {expected}.")]
    ServiceType { key: String, expected: &'static str },

    #[error("Unsupported config file '{path}'. Expected one of: {expected}.")]
    ConfigFormat { path: String, expected: String },

    #[error("Failed to parse config file '{path}': {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("IO error: {0}.")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            ErrorKind::TemplateNotFound => Error::TemplateNotFound(err),
            ErrorKind::SyntaxError => Error::TemplateSyntax(err),
            _ => Error::Render(err),
        }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
