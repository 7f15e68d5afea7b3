use super::filters::{is_filter_name, register_standard_filters};
use crate::{
    config::EngineOptions,
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use log::debug;
use minijinja::{
    functions::Function,
    value::{FunctionArgs, FunctionResult},
    AutoEscape, Environment, ErrorKind,
};
use std::io;

/// MiniJinja-based template rendering engine.
///
/// Template names are treated as filesystem paths and read verbatim. Loaded
/// templates are cached by the environment for the lifetime of the renderer.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Extension appended to template names by views
    extension: String,
}

/// Reads a template straight from disk; a missing file is reported to the
/// environment as "not found" rather than as an IO failure.
fn load_template_file(name: &str) -> Result<Option<String>, minijinja::Error> {
    match std::fs::read_to_string(name) {
        Ok(source) => Ok(Some(source)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(minijinja::Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template '{name}'"),
        )
        .with_source(err)),
    }
}

impl MiniJinjaRenderer {
    /// Creates a renderer with default options.
    pub fn new() -> Self {
        Self::configure(&EngineOptions::default())
    }

    /// Creates a renderer configured from `options`.
    pub fn with_options(options: &EngineOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self::configure(options))
    }

    fn configure(options: &EngineOptions) -> Self {
        let mut env = Environment::new();
        env.set_loader(load_template_file);

        let auto_escape: AutoEscape = options.auto_escape.into();
        env.set_auto_escape_callback(move |_| auto_escape);
        env.set_undefined_behavior(options.undefined.into());
        env.set_trim_blocks(options.trim_blocks);
        env.set_lstrip_blocks(options.lstrip_blocks);
        env.set_keep_trailing_newline(options.keep_trailing_newline);
        env.set_debug(options.debug);

        if options.standard_filters {
            register_standard_filters(&mut env);
        }

        Self { env, extension: options.extension.clone() }
    }

    /// Adds a filter, replacing any filter already registered under `name`.
    pub fn add_filter<F, Rv, Args>(&mut self, name: &str, filter: F) -> Result<()>
    where
        F: Function<Rv, Args>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        if !is_filter_name(name) {
            return Err(Error::FilterRegistration {
                name: name.to_string(),
                reason: "filter names must be identifiers".to_string(),
            });
        }
        debug!("Registering filter '{name}'");
        self.env.add_filter(name.to_string(), filter);
        Ok(())
    }

    /// The underlying MiniJinja environment.
    pub fn env(&self) -> &Environment<'static> {
        &self.env
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn extension(&self) -> &str {
        &self.extension
    }

    fn render_file(
        &self,
        template_path: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        debug!("Rendering template file '{template_path}'");
        let tmpl = self.env.get_template(template_path)?;
        Ok(tmpl.render(context)?)
    }

    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}
