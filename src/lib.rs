pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod lint;
pub mod output;
pub mod scanner;
pub mod syntax;

use std::sync::Once;

pub use error::{Result, SemiGuardError};
pub use lint::{LintReport, Linter, SourceReport, lint_source};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic logs on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `-vvv` enables debug logs for this
/// crate. Safe to call multiple times.
pub fn init_tracing(verbose: u8) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose >= 3 {
            EnvFilter::new("semi_guard=debug")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
