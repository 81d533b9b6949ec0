mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{CONFIG_VERSION, Config, RuleSetting, ScannerConfig};
pub use validation::validate_config_semantics;

/// Configuration written by `semi-guard init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# semi-guard configuration
version = "1"

[scanner]
# Respect .gitignore files when scanning directories
gitignore = true
# File extensions to lint
extensions = ["css"]
# Glob patterns to skip
exclude = []

[rules]
# Require a newline after the semicolon of block-less at-rules.
# Only "always" is accepted; set to false to disable.
at-rule-semicolon-newline-after = "always"
"#;
