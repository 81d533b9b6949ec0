mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for finding the stylesheets to lint under a path.
pub trait FileScanner {
    /// Scan a file or directory and return all matching file paths, sorted.
    ///
    /// # Errors
    /// Returns an error if the path does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
