//! Constants used throughout the stencil application

/// Reserved manifest filename; discovery matches base names against it exactly
pub const MANIFEST_FILENAME: &str = "template.yaml";

/// Default template collection repository
pub const DEFAULT_TEMPLATE_REPO: &str = "https://github.com/stencil-cli/stencil-templates";

/// Placeholder token delimiters
pub const PLACEHOLDER_OPEN: &str = "{{";
pub const PLACEHOLDER_CLOSE: &str = "}}";

/// Builtin substitution variables collected for every project
pub const PROJECT_NAME_VAR: &str = "ProjectName";
pub const MODULE_NAME_VAR: &str = "ModuleName";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

/// Formats the placeholder token for a variable name, e.g. `{{ProjectName}}`.
pub fn placeholder_token(name: &str) -> String {
    format!("{PLACEHOLDER_OPEN}{name}{PLACEHOLDER_CLOSE}")
}
