//! Constants used throughout jinja-view

/// Template file extension appended to every resolved template name
pub const DEFAULT_TEMPLATE_EXTENSION: &str = ".jinja";

/// Key under which a view registers itself in a service container
pub const VIEW_SERVICE_KEY: &str = "view";

/// Configuration file extensions understood by the config loader
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
