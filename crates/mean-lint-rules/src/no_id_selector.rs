//! Rule to forbid `#id` selectors in stylesheets.
//!
//! # Rationale
//!
//! Id selectors are unreusable and win every specificity fight, which is how
//! `!important` escalation starts. The guide styles everything with classes.
//!
//! # Heuristic
//!
//! Only selector context is scanned: the text before a `{` on a line, or a
//! whole line ending with `,` (a selector list continuation). Declaration
//! values (`color: #fff;`) and Sass interpolation (`#{...}`) never match.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(no-id-selector) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for no-id-selector.
pub const CODE: &str = "ML006";

/// Rule name for no-id-selector.
pub const NAME: &str = "no-id-selector";

fn id_selector_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `#` followed by an identifier start; `#{` is Sass interpolation.
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"#[a-zA-Z_][a-zA-Z0-9_-]*").unwrap())
}

/// Forbids `#id` selectors in SCSS and CSS files.
#[derive(Debug, Clone)]
pub struct NoIdSelector {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoIdSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl NoIdSelector {
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

impl Rule for NoIdSelector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids #id selectors in stylesheets"
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

            // Selector context only: before a `{`, or a selector-list line.
            let selector_part = match line.find('{') {
                Some(i) => &line[..i],
                None if line.trim_end().ends_with(',') => line,
                None => continue,
            };

            for m in id_selector_re().find_iter(selector_part) {
                // Sass interpolation: `#{` — find_iter already excludes it
                // because `{` can't start an identifier, but a preceding `&#`
                // entity can't occur in selectors either, so no extra checks.
                let allow = check_allow_with_reason(ctx.content, line_no, NAME);
                if allow.is_allowed() {
                    if self.requires_allow_reason() && allow.reason().is_none() {
                        violations.push(missing_reason_violation(ctx, line_no, m.start() + 1));
                    }
                    continue;
                }

                let location = Location::new(ctx.relative_path.clone(), line_no, m.start() + 1)
                    .with_span(ctx.offset_for(line_no, m.start() + 1), m.len());

                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location,
                        format!("id selector '{}' is forbidden", m.as_str()),
                    )
                    .with_suggestion(Suggestion::new("Use a class selector instead"))
                    .with_doc_ref("GUIDE.md §CSS"),
                );
            }
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
