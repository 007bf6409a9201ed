//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Classification of a scanned file by what kind of source it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// JavaScript source (`.js`).
    JavaScript,
    /// Sass stylesheet (`.scss`).
    Scss,
    /// Plain CSS stylesheet (`.css`).
    Css,
    /// HTML template (`.html`).
    Html,
    /// JSON data or config (`.json`).
    Json,
    /// Anything else; rules normally skip these.
    Other,
}

impl FileKind {
    /// Classifies a path by its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("js") => Self::JavaScript,
            Some("scss") => Self::Scss,
            Some("css") => Self::Css,
            Some("html") => Self::Html,
            Some("json") => Self::Json,
            _ => Self::Other,
        }
    }

    /// Returns true for the stylesheet kinds (SCSS and CSS).
    #[must_use]
    pub fn is_stylesheet(self) -> bool {
        matches!(self, Self::Scss | Self::Css)
    }
}

/// Context provided to per-file rules.
///
/// Contains metadata about the file being checked that rules can use
/// to make context-aware decisions (e.g., skip checks in spec files).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// What kind of source file this is.
    pub kind: FileKind,
    /// Whether this file is detected as a Jasmine spec file.
    pub is_spec: bool,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
        let kind = FileKind::from_path(path);
        let is_spec = Self::detect_spec_file(&relative_path);

        Self {
            path,
            content,
            kind,
            is_spec,
            relative_path,
        }
    }

    /// Returns the file name (basename) of the checked file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Detects if a file is a Jasmine spec based on path conventions.
    fn detect_spec_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "test" || s == "tests" {
                    return true;
                }
            }
        }

        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| name.ends_with(".spec.js") || name.ends_with(".test.js"))
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}

/// Context provided to project-wide rules.
///
/// Contains the project root and every file the scanner yielded, so rules
/// can check directory shape and cross-file conventions.
#[derive(Debug, Clone)]
pub struct ProjectContext<'a> {
    /// Root directory of the project.
    pub root: &'a Path,
    /// All scanned files (absolute paths).
    pub files: Vec<PathBuf>,
}

impl<'a> ProjectContext<'a> {
    /// Creates a new project context.
    #[must_use]
    pub fn new(root: &'a Path) -> Self {
        Self {
            root,
            files: Vec::new(),
        }
    }

    /// Sets the list of scanned files.
    #[must_use]
    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    /// Returns a path relative to the project root.
    #[must_use]
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(self.root).unwrap_or(path)
    }

    /// Iterates over scanned files of the given kind, as (absolute, relative)
    /// path pairs.
    pub fn files_of_kind(&self, kind: FileKind) -> impl Iterator<Item = (&PathBuf, &Path)> {
        self.files
            .iter()
            .filter(move |f| FileKind::from_path(f) == kind)
            .map(|f| (f, self.relative(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_extension() {
        assert_eq!(
            FileKind::from_path(Path::new("app/users/users.controller.js")),
            FileKind::JavaScript
        );
        assert_eq!(
            FileKind::from_path(Path::new("styles/_variables.scss")),
            FileKind::Scss
        );
        assert_eq!(
            FileKind::from_path(Path::new("app/users/users.html")),
            FileKind::Html
        );
        assert_eq!(FileKind::from_path(Path::new("README.md")), FileKind::Other);
    }

    #[test]
    fn detects_spec_file() {
        assert!(FileContext::detect_spec_file(Path::new(
            "app/users/users.controller.spec.js"
        )));
        assert!(FileContext::detect_spec_file(Path::new(
            "test/helpers/mock-api.js"
        )));
        assert!(!FileContext::detect_spec_file(Path::new(
            "app/users/users.controller.js"
        )));
    }

    #[test]
    fn relative_path_stripped_from_root() {
        let root = Path::new("/proj");
        let path = Path::new("/proj/app/users/index.js");
        let ctx = FileContext::new(path, "", root);
        assert_eq!(ctx.relative_path, PathBuf::from("app/users/index.js"));
        assert_eq!(ctx.file_name(), "index.js");
    }

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        let ctx = FileContext {
            path: Path::new("app.js"),
            content,
            kind: FileKind::JavaScript,
            is_spec: false,
            relative_path: PathBuf::from("app.js"),
        };

        assert_eq!(ctx.offset_for(1, 1), 0); // Start of line 1
        assert_eq!(ctx.offset_for(2, 1), 6); // Start of line 2
        assert_eq!(ctx.offset_for(2, 3), 8); // "ne" in line2
    }

    #[test]
    fn project_context_filters_by_kind() {
        let root = Path::new("/proj");
        let ctx = ProjectContext::new(root).with_files(vec![
            PathBuf::from("/proj/app/index.js"),
            PathBuf::from("/proj/styles/app.scss"),
        ]);

        let js: Vec<_> = ctx.files_of_kind(FileKind::JavaScript).collect();
        assert_eq!(js.len(), 1);
        assert_eq!(js[0].1, Path::new("app/index.js"));
    }
}
