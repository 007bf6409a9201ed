//! Rule enforcing one `module.exports` per file.
//!
//! # Rationale
//!
//! Browserify modules read best when each file exports exactly one thing:
//! one controller, one service, one directive. A second `module.exports`
//! assignment silently discards the first.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(single-export) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for single-export.
pub const CODE: &str = "ML004";

/// Rule name for single-export.
pub const NAME: &str = "single-export";

fn exports_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Plain reassignment only; `module.exports.foo = ...` augments and is fine.
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"^\s*module\.exports\s*=").unwrap())
}

/// Flags files that reassign `module.exports`.
#[derive(Debug, Clone)]
pub struct SingleExport {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SingleExport {
    fn default() -> Self {
        Self::new()
    }
}

impl SingleExport {
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

impl Rule for SingleExport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows only one module.exports assignment per file"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::JavaScript {
            return Vec::new();
        }

        let mut violations = Vec::new();
        let mut first_export: Option<usize> = None;

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let Some(m) = exports_re().find(line) else {
                continue;
            };

            let Some(first_line) = first_export else {
                first_export = Some(line_no);
                continue;
            };

            if check_allow_with_reason(ctx.content, line_no, NAME).is_allowed() {
                continue;
            }

            let location = Location::new(ctx.relative_path.clone(), line_no, m.end());

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location,
                    format!("module.exports reassigned (first assignment at line {first_line})"),
                )
                .with_suggestion(Suggestion::new(
                    "Export a single object or constructor from each file",
                ))
                .with_doc_ref("GUIDE.md §Modules"),
            );
        }

        violations
    }
}
