mod utils;

use clap::Parser;
use jinja_view::cli::{run, Args};
use jinja_view::Error;
use std::fs;
use utils::{base_path, template_root};

fn run_to_string(argv: &[&str], stdin: &str) -> Result<String, Error> {
    let args = Args::parse_from(argv);
    let mut out = Vec::new();
    run(&args, stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn renders_with_inline_vars_and_defaults() {
    let dir = template_root(&[("home.jinja", "{{ site }}: {{ title }} ({{ year }})")]);
    let base = base_path(dir.path());

    let out = run_to_string(
        &[
            "jinja-view",
            &base,
            "home",
            "--set",
            "site=Demo",
            "--set",
            "year=2024",
            "--set",
            "title=Default",
            "--vars",
            r#"{"title": "Welcome"}"#,
        ],
        "",
    )
    .unwrap();
    assert_eq!(out, "Demo: Welcome (2024)");
}

#[test]
fn reads_vars_from_stdin() {
    let dir = template_root(&[("hello.jinja", "hello {{ name }}")]);
    let base = base_path(dir.path());

    let out =
        run_to_string(&["jinja-view", &base, "hello", "--vars", "-"], r#"{"name": "pipe"}"#)
            .unwrap();
    assert_eq!(out, "hello pipe");
}

#[test]
fn reads_vars_from_file() {
    let dir = template_root(&[("hello.jinja", "hello {{ name }}")]);
    let vars = dir.path().join("vars.json");
    fs::write(&vars, r#"{"name": "file"}"#).unwrap();
    let base = base_path(dir.path());

    let out = run_to_string(
        &["jinja-view", &base, "hello", "--vars-file", vars.to_str().unwrap()],
        "",
    )
    .unwrap();
    assert_eq!(out, "hello file");
}

#[test]
fn applies_config_file_and_extension_override() {
    let dir = template_root(&[
        ("page.html", "{{ body }}"),
        ("page.jade", "jade {{ body }}"),
    ]);
    let config = dir.path().join("view.yaml");
    fs::write(&config, "path: ignored/\nextension: .html\nauto_escape: html\n").unwrap();
    let base = base_path(dir.path());

    let out = run_to_string(
        &[
            "jinja-view",
            &base,
            "page",
            "--config",
            config.to_str().unwrap(),
            "--vars",
            r#"{"body": "<p>"}"#,
        ],
        "",
    )
    .unwrap();
    assert_eq!(out, "&lt;p&gt;");

    let out = run_to_string(
        &[
            "jinja-view",
            &base,
            "page",
            "--config",
            config.to_str().unwrap(),
            "--extension",
            ".jade",
            "--vars",
            r#"{"body": "<p>"}"#,
        ],
        "",
    )
    .unwrap();
    assert_eq!(out, "jade &lt;p&gt;");
}

#[test]
fn missing_template_is_reported() {
    let dir = template_root(&[]);
    let base = base_path(dir.path());

    let err = run_to_string(&["jinja-view", &base, "absent"], "").unwrap_err();
    assert!(matches!(err, Error::TemplateNotFound(_)));
}

#[test]
fn malformed_assignment_is_rejected() {
    let dir = template_root(&[("x.jinja", "x")]);
    let base = base_path(dir.path());

    let err = run_to_string(&["jinja-view", &base, "x", "--set", "oops"], "").unwrap_err();
    assert!(matches!(err, Error::InvalidOption(_)));
}
