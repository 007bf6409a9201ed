//! Rule to forbid `!important` in stylesheets.
//!
//! # Rationale
//!
//! `!important` breaks the cascade and forces later overrides to escalate.
//! The guide's position is that specificity problems are structural: fix the
//! selector, don't shout over it.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(no-important) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, Location, Rule, Severity, Suggestion, Violation};

/// Rule code for no-important.
pub const CODE: &str = "ML005";

/// Rule name for no-important.
pub const NAME: &str = "no-important";

/// Forbids `!important` in SCSS and CSS files.
#[derive(Debug, Clone)]
pub struct NoImportant {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoImportant {
    fn default() -> Self {
        Self::new()
    }
}

impl NoImportant {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoImportant {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids !important in stylesheets"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if !ctx.kind.is_stylesheet() {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || trimmed.starts_with('*') || trimmed.starts_with("/*") {
                continue;
            }

            let Some(col) = line.find("!important") else {
                continue;
            };

            let allow = check_allow_with_reason(ctx.content, line_no, NAME);
            if allow.is_allowed() {
                if self.requires_allow_reason() && allow.reason().is_none() {
                    violations.push(missing_reason_violation(ctx, line_no, col + 1));
                }
                continue;
            }

            let location = Location::new(ctx.relative_path.clone(), line_no, col + 1)
                .with_span(ctx.offset_for(line_no, col + 1), "!important".len());

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location,
                    "!important is forbidden in stylesheets",
                )
                .with_suggestion(Suggestion::new(
                    "Raise selector specificity or restructure the rule instead",
                ))
                .with_doc_ref("GUIDE.md §CSS"),
            );
        }

        violations
    }
}

fn missing_reason_violation(ctx: &FileContext, line: usize, column: usize) -> Violation {
    Violation::new(
        CODE,
        NAME,
        Severity::Warning,
        Location::new(ctx.relative_path.clone(), line, column),
        format!("Allow directive for '{NAME}' is missing required reason"),
    )
    .with_suggestion(Suggestion::new(
        "Add reason=\"...\" to explain why this exception is necessary",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn check_scss(content: &str) -> Vec<Violation> {
        let path = PathBuf::from("/p/styles/app.scss");
        let ctx = FileContext::new(&path, content, Path::new("/p"));
        NoImportant::new().check(&ctx)
    }

    #[test]
    fn detects_important() {
        let violations = check_scss(".button {\n  color: red !important;\n}\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn ignores_comments() {
        let violations = check_scss("// never use !important\n.button { color: red; }\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn skips_non_stylesheets() {
        let path = PathBuf::from("/p/app/index.js");
        let ctx = FileContext::new(&path, "var s = '!important';", Path::new("/p"));
        assert!(NoImportant::new().check(&ctx).is_empty());
    }

    #[test]
    fn allow_with_reason_suppresses() {
        let violations = check_scss(
            ".fix {\n  // mean-lint: allow(no-important) reason=\"vendor widget override\"\n  z-index: 10 !important;\n}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn allow_without_reason_warns() {
        let violations = check_scss(
            ".fix {\n  // mean-lint: allow(no-important)\n  z-index: 10 !important;\n}\n",
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0].message.contains("missing required reason"));
    }
}
