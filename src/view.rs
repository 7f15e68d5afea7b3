//! The template view: renders files from a template root into responses.

use crate::{
    config::{EngineOptions, ViewConfig},
    constants::VIEW_SERVICE_KEY,
    container::{Container, ServiceProvider},
    error::{Error, Result},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    response::HttpResponse,
};
use indexmap::IndexMap;
use log::debug;
use minijinja::{
    functions::Function,
    value::{FunctionArgs, FunctionResult},
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

/// Renders templates found under a base path and carries a set of default
/// variables that every render sees.
///
/// Template names resolve to `base_path + name + extension` by plain string
/// concatenation. The base path is kept verbatim, so it must already end in a
/// separator if one is wanted. Names are trusted: nothing stops a name from
/// walking out of the template root.
#[derive(Debug)]
pub struct TemplateView {
    engine: MiniJinjaRenderer,
    path: String,
    default_variables: IndexMap<String, Value>,
}

impl TemplateView {
    /// Creates a view over `path` with an engine configured from `options`.
    pub fn new(path: impl Into<String>, options: EngineOptions) -> Result<Self> {
        Ok(Self {
            engine: MiniJinjaRenderer::with_options(&options)?,
            path: path.into(),
            default_variables: IndexMap::new(),
        })
    }

    pub fn from_config(config: &ViewConfig) -> Result<Self> {
        Self::new(config.path.clone(), config.options.clone())
    }

    /// Adds or replaces a filter on the underlying engine.
    pub fn register_filter<F, Rv, Args>(&mut self, name: &str, filter: F) -> Result<()>
    where
        F: Function<Rv, Args>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.engine.add_filter(name, filter)
    }

    /// The path the engine is asked to render for `template`.
    pub fn resolve(&self, template: &str) -> String {
        format!("{}{}{}", self.path, template, self.engine.extension())
    }

    /// Renders `template` with the default variables overlaid by `data`.
    ///
    /// `data` must be a JSON object or `null`; keys in `data` win over
    /// default variables of the same name.
    pub fn fetch(&self, template: &str, data: &Value) -> Result<String> {
        let context = self.merge_variables(data)?;
        let resolved = self.resolve(template);
        debug!("Fetching template '{template}' from '{resolved}'");
        self.engine.render_file(&resolved, &context)
    }

    /// Renders `template` and appends the output to the response body.
    ///
    /// Nothing is written when rendering fails.
    pub fn render<'r, R: HttpResponse>(
        &self,
        response: &'r mut R,
        template: &str,
        data: &Value,
    ) -> Result<&'r mut R> {
        let output = self.fetch(template, data)?;
        response.body_mut().write_all(output.as_bytes())?;
        Ok(response)
    }

    fn merge_variables(&self, data: &Value) -> Result<Value> {
        let mut merged: Map<String, Value> = self
            .default_variables
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        match data {
            Value::Null => {}
            Value::Object(overrides) => {
                for (key, value) in overrides {
                    merged.insert(key.clone(), value.clone());
                }
            }
            other => return Err(Error::InvalidVariables { kind: json_kind(other) }),
        }

        Ok(Value::Object(merged))
    }

    pub fn has(&self, key: &str) -> bool {
        self.default_variables.contains_key(key)
    }

    /// Returns the default variable stored under `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.default_variables
            .get(key)
            .ok_or_else(|| Error::KeyNotFound { key: key.to_string() })
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.default_variables.insert(key.into(), value.into());
    }

    /// Serializes `value` and stores it as a default variable.
    pub fn assign<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.default_variables.insert(key.into(), value);
        Ok(())
    }

    /// Removes a default variable; absent keys are ignored.
    pub fn delete(&mut self, key: &str) {
        self.default_variables.shift_remove(key);
    }

    pub fn count(&self) -> usize {
        self.default_variables.len()
    }

    /// A snapshot of the default variables as they are right now.
    pub fn iter(&self) -> indexmap::map::IntoIter<String, Value> {
        self.default_variables.clone().into_iter()
    }

    pub fn default_variables(&self) -> &IndexMap<String, Value> {
        &self.default_variables
    }

    pub fn base_path(&self) -> &str {
        &self.path
    }

    pub fn extension(&self) -> &str {
        self.engine.extension()
    }

    pub fn engine(&self) -> &MiniJinjaRenderer {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MiniJinjaRenderer {
        &mut self.engine
    }
}

impl ServiceProvider for TemplateView {
    fn register(self, container: &mut Container) {
        container.insert(VIEW_SERVICE_KEY, self);
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
