use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// File extension appended to template names, including the leading dot.
    fn extension(&self) -> &str;

    /// Renders the template file at `template_path` with the given context.
    ///
    /// # Arguments
    /// * `template_path` - Fully resolved path of the template file
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template output
    fn render_file(&self, template_path: &str, context: &serde_json::Value)
        -> Result<String>;

    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}
