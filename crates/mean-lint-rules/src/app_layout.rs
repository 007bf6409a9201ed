//! Project rule checking the top-level directory layout.
//!
//! # Rationale
//!
//! The guide's layout puts Angular modules under `app/` and the SCSS tree
//! under `styles/`. Tooling (the Gulp build, the Karma config) assumes those
//! paths exist.
//!
//! # Configuration
//!
//! - `required_dirs`: directories that must exist at the project root
//!   (default: `app`, `styles`)

use mean_lint_core::{Location, ProjectContext, ProjectRule, Severity, Suggestion, Violation};

/// Rule code for app-layout.
pub const CODE: &str = "ML103";

/// Rule name for app-layout.
pub const NAME: &str = "app-layout";

/// Requires the guide's top-level directories to exist.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Directories that must exist at the project root.
    pub required_dirs: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AppLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLayout {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            required_dirs: vec!["app".to_string(), "styles".to_string()],
            severity: Severity::Warning,
        }
    }

    /// Sets the required directories.
    #[must_use]
    pub fn required_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ProjectRule for AppLayout {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the guide's top-level directories (app/, styles/)"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation> {
        self.required_dirs
            .iter()
            .filter(|dir| !ctx.root.join(dir).is_dir())
            .map(|dir| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::whole_file(dir.into()),
                    format!("required directory '{dir}/' is missing"),
                )
                .with_suggestion(Suggestion::new(
                    "Create the directory or configure required_dirs",
                ))
                .with_doc_ref("GUIDE.md §Structure")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn complete_layout_passes() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("app")).expect("mkdir");
        fs::create_dir(tmp.path().join("styles")).expect("mkdir");

        let ctx = ProjectContext::new(tmp.path());
        assert!(AppLayout::new().check_project(&ctx).is_empty());
    }

    #[test]
    fn missing_styles_flagged() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("app")).expect("mkdir");

        let ctx = ProjectContext::new(tmp.path());
        let violations = AppLayout::new().check_project(&ctx);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("styles"));
    }

    #[test]
    fn custom_dirs() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("client")).expect("mkdir");

        let ctx = ProjectContext::new(tmp.path());
        let rule = AppLayout::new().required_dirs(["client"]);
        assert!(rule.check_project(&ctx).is_empty());
    }
}
