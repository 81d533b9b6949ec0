use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::checker::SEMICOLON_NEWLINE_AFTER;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Scanner configuration for stylesheet discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// File extensions to lint, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files/dirs to skip entirely.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// How a rule is configured in `[rules]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSetting {
    /// `rule = false`
    Disabled,
    /// `rule = true` (no option) or `rule = "value"`. Values that are not
    /// strings are kept as their TOML text so the rule can reject them.
    Enabled(Option<String>),
}

impl RuleSetting {
    #[must_use]
    pub fn from_value(value: &toml::Value) -> Self {
        match value {
            toml::Value::Boolean(false) => Self::Disabled,
            toml::Value::Boolean(true) => Self::Enabled(None),
            toml::Value::String(option) => Self::Enabled(Some(option.clone())),
            other => Self::Enabled(Some(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// File discovery settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Rule name to primary option, e.g.
    /// `at-rule-semicolon-newline-after = "always"`.
    #[serde(default = "default_rules")]
    pub rules: BTreeMap<String, toml::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            scanner: ScannerConfig::default(),
            rules: default_rules(),
        }
    }
}

impl Config {
    /// Setting for `rule`, `None` if the rule is not listed.
    #[must_use]
    pub fn rule_setting(&self, rule: &str) -> Option<RuleSetting> {
        self.rules.get(rule).map(RuleSetting::from_value)
    }
}

const fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["css".to_string()]
}

fn default_rules() -> BTreeMap<String, toml::Value> {
    BTreeMap::from([(
        SEMICOLON_NEWLINE_AFTER.to_string(),
        toml::Value::String("always".to_string()),
    )])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
