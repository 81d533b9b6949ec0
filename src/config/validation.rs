//! Configuration semantic validation.
//!
//! Validates values that parse fine as TOML but cannot be acted on. Rule
//! options are not checked here: a rule validates its own option when it
//! runs and reports a bad one as a diagnostic.

use crate::config::Config;
use crate::config::model::CONFIG_VERSION;
use crate::lint::is_known_rule;
use crate::{Result, SemiGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, a rule name is unknown,
/// an extension is malformed, or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_rules(config)?;
    validate_scanner(config)?;
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(SemiGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_rules(config: &Config) -> Result<()> {
    for name in config.rules.keys() {
        if !is_known_rule(name) {
            return Err(SemiGuardError::Config(format!("Unknown rule '{name}'")));
        }
    }
    Ok(())
}

fn validate_scanner(config: &Config) -> Result<()> {
    for ext in &config.scanner.extensions {
        if ext.is_empty() || ext.starts_with('.') {
            return Err(SemiGuardError::Config(format!(
                "scanner.extensions entries must be non-empty and without a leading dot, got '{ext}'"
            )));
        }
    }
    for pattern in &config.scanner.exclude {
        globset::Glob::new(pattern).map_err(|e| SemiGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}
