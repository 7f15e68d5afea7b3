use crate::{
    cli::Args,
    config::{EngineOptions, ViewConfig},
    error::Result,
    ioutils::{parse_assignment, read_variables, read_variables_file},
    response::BufferedResponse,
    view::TemplateView,
};
use log::{debug, info};
use std::io::{Read, Write};

/// Builds a view from the arguments, renders the requested template and
/// writes the response body to `out`. `stdin` backs `--vars -`.
pub fn run(args: &Args, stdin: impl Read, mut out: impl Write) -> Result<()> {
    let view = build_view(args)?;

    let data = match (&args.vars, &args.vars_file) {
        (Some(vars), _) => read_variables(vars, stdin)?,
        (None, Some(path)) => read_variables_file(path)?,
        (None, None) => serde_json::Value::Null,
    };

    info!("Rendering '{}'", view.resolve(&args.template));
    let mut response = BufferedResponse::new();
    view.render(&mut response, &args.template, &data)?;

    out.write_all(response.body())?;
    out.flush()?;
    Ok(())
}

fn build_view(args: &Args) -> Result<TemplateView> {
    let mut options = match &args.config {
        Some(path) => ViewConfig::load(path)?.options,
        None => EngineOptions::default(),
    };
    if let Some(extension) = &args.extension {
        options = options.with_extension(extension.clone());
    }

    let mut view = TemplateView::new(args.base_path.clone(), options)?;
    for pair in &args.set {
        let (key, value) = parse_assignment(pair)?;
        debug!("Default variable '{key}' = {value}");
        view.set(key, value);
    }
    Ok(view)
}
