//! Tests for the config module

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;

    use crate::config::{AutoEscapeMode, EngineOptions, UndefinedMode, ViewConfig};
    use crate::error::Error;

    #[test]
    fn defaults_match_empty_document() {
        let options: EngineOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EngineOptions::default());
        assert_eq!(options.extension, ".jinja");
        assert!(options.standard_filters);
        assert_eq!(options.auto_escape, AutoEscapeMode::None);
        assert_eq!(options.undefined, UndefinedMode::Lenient);
    }

    #[test]
    fn loads_yaml_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("view.yaml");
        fs::write(
            &path,
            "path: templates/\nextension: .jade\nauto_escape: html\nundefined: strict\ntrim_blocks: true\n",
        )
        .unwrap();

        let config = ViewConfig::load(&path).unwrap();
        assert_eq!(config.path, "templates/");
        assert_eq!(config.options.extension, ".jade");
        assert_eq!(config.options.auto_escape, AutoEscapeMode::Html);
        assert_eq!(config.options.undefined, UndefinedMode::Strict);
        assert!(config.options.trim_blocks);
        assert!(!config.options.lstrip_blocks);
    }

    #[test]
    fn loads_json_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("view.json");
        fs::write(&path, r#"{"path": "views", "standard_filters": false}"#).unwrap();

        let config = ViewConfig::load(&path).unwrap();
        assert_eq!(config.path, "views");
        assert!(!config.options.standard_filters);
        assert_eq!(config.options.extension, ".jinja");
    }

    #[test]
    fn rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("view.toml");
        fs::write(&path, "path = 'x'").unwrap();

        let err = ViewConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigFormat { .. }));
    }

    #[test]
    fn reports_parse_failures() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("view.json");
        fs::write(&path, r#"{"extension": ".j2"}"#).unwrap();

        let err = ViewConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn rejects_extension_without_dot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("view.yml");
        fs::write(&path, "path: t/\nextension: jade\n").unwrap();

        let err = ViewConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
        assert!(EngineOptions::default().with_extension(".").validate().is_err());
    }
}
