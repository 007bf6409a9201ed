//! Project rule requiring a Jasmine spec beside each Angular artifact.
//!
//! # Rationale
//!
//! The guide keeps specs next to the code they test: `users.controller.js`
//! ships with `users.controller.spec.js` in the same folder. A missing spec
//! is usually a missing test, not a different layout.
//!
//! # Configuration
//!
//! - `roles`: role suffixes that need specs
//!   (default: controller, service, factory, filter)

use std::collections::HashSet;
use std::path::PathBuf;

use mean_lint_core::utils::naming::split_role_suffix;
use mean_lint_core::{
    FileKind, Location, ProjectContext, ProjectRule, Severity, Suggestion, Violation,
};

/// Rule code for require-spec.
pub const CODE: &str = "ML102";

/// Rule name for require-spec.
pub const NAME: &str = "require-spec";

/// Requires a sibling `*.spec.js` for testable Angular artifacts.
#[derive(Debug, Clone)]
pub struct RequireSpec {
    /// Role suffixes that need specs.
    pub roles: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for RequireSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl RequireSpec {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: ["controller", "service", "factory", "filter"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            severity: Severity::Warning,
        }
    }

    /// Sets the role suffixes that need specs.
    #[must_use]
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ProjectRule for RequireSpec {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a sibling *.spec.js for controllers, services, and filters"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation> {
        let js_files: Vec<PathBuf> = ctx
            .files_of_kind(FileKind::JavaScript)
            .map(|(_, rel)| rel.to_path_buf())
            .collect();

        let existing: HashSet<&PathBuf> = js_files.iter().collect();
        let mut violations = Vec::new();

        for rel in &js_files {
            let Some(name) = rel.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name.ends_with(".spec.js") || name.ends_with(".test.js") {
                continue;
            }
            let Some(stem) = name.strip_suffix(".js") else {
                continue;
            };
            let Some((_base, role)) = split_role_suffix(stem) else {
                continue;
            };
            if !self.roles.iter().any(|r| r == role) {
                continue;
            }

            let spec = rel.with_file_name(format!("{stem}.spec.js"));
            if existing.contains(&spec) {
                continue;
            }

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::whole_file(rel.clone()),
                    format!("'{}' has no sibling {stem}.spec.js", rel.display()),
                )
                .with_suggestion(Suggestion::new(
                    "Add a Jasmine spec next to the file it tests",
                ))
                .with_doc_ref("GUIDE.md §Testing"),
            );
        }

        violations
    }
}
