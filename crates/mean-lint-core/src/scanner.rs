//! Tree scanner: walks a project directory yielding checkable files.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::context::FileKind;

/// Errors that can occur during scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error while walking the tree.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid exclude glob pattern.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying glob error.
        source: glob::PatternError,
    },

    /// Walk error from the ignore crate.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Walks a project tree and yields files that rules understand.
///
/// Built on the `ignore` crate so `.gitignore` entries are honored by
/// default; `node_modules` and friends are additionally excluded via glob
/// patterns. Output is sorted for deterministic reports.
pub struct Scanner {
    root: PathBuf,
    exclude: Vec<glob::Pattern>,
    raw_exclude: Vec<String>,
    respect_gitignore: bool,
}

impl Scanner {
    /// Creates a new scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if any exclude pattern has invalid glob syntax.
    pub fn new(
        root: impl Into<PathBuf>,
        exclude: Vec<String>,
        respect_gitignore: bool,
    ) -> Result<Self, ScanError> {
        let compiled = exclude
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| ScanError::Pattern {
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.into(),
            exclude: compiled,
            raw_exclude: exclude,
            respect_gitignore,
        })
    }

    /// Returns the root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the tree and returns all checkable files, sorted.
    ///
    /// Only files whose extension maps to a known [`FileKind`] are yielded.
    ///
    /// # Errors
    ///
    /// Returns an error if the walk itself fails. Individual unreadable
    /// entries are skipped with a debug log.
    pub fn scan(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut files = Vec::new();

        let walker = ignore::WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();

            if FileKind::from_path(&path) == FileKind::Other {
                continue;
            }

            if self.is_excluded(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path matches any exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for (pattern, raw) in self.exclude.iter().zip(&self.raw_exclude) {
            if pattern.matches(&path_str) {
                return true;
            }

            // Also check as substring for patterns like "**/node_modules/**",
            // which must match regardless of how the root path was spelled.
            let normalized = raw.replace("**", "");
            if !normalized.is_empty() && path_str.contains(&normalized) {
                return true;
            }
        }

        false
    }
}
