//! Rule keeping DOM access out of Angular controllers.
//!
//! # Rationale
//!
//! Controllers bind data to a scope; directives own the DOM. A controller
//! that reaches for `document`, `window`, `angular.element`, or jQuery is
//! untestable without a browser and usually hides a missing directive.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(no-dom-in-controller) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for no-dom-in-controller.
pub const CODE: &str = "ML003";

/// Rule name for no-dom-in-controller.
pub const NAME: &str = "no-dom-in-controller";

struct DomPattern {
    regex: &'static Regex,
    what: &'static str,
    instead: &'static str,
}

fn dom_patterns() -> &'static [DomPattern; 4] {
    static DOCUMENT: OnceLock<Regex> = OnceLock::new();
    static WINDOW: OnceLock<Regex> = OnceLock::new();
    static ELEMENT: OnceLock<Regex> = OnceLock::new();
    static JQUERY: OnceLock<Regex> = OnceLock::new();
    static PATTERNS: OnceLock<[DomPattern; 4]> = OnceLock::new();

    #[allow(clippy::unwrap_used)] // Patterns are compile-time constants
    PATTERNS.get_or_init(|| {
        [
            DomPattern {
                regex: DOCUMENT.get_or_init(|| Regex::new(r"\bdocument\s*\.").unwrap()),
                what: "document access",
                instead: "inject $document",
            },
            DomPattern {
                regex: WINDOW.get_or_init(|| Regex::new(r"\bwindow\s*\.").unwrap()),
                what: "window access",
                instead: "inject $window",
            },
            DomPattern {
                regex: ELEMENT
                    .get_or_init(|| Regex::new(r"angular\s*\.\s*element\s*\(").unwrap()),
                what: "angular.element call",
                instead: "move DOM work into a directive",
            },
            DomPattern {
                regex: JQUERY.get_or_init(|| Regex::new(r"(?:^|[^\w$])\$\(").unwrap()),
                what: "jQuery call",
                instead: "move DOM work into a directive",
            },
        ]
    })
}

/// Forbids DOM access in `*.controller.js` files.
#[derive(Debug, Clone)]
pub struct NoDomInController {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoDomInController {
    fn default() -> Self {
        Self::new()
    }
}

impl NoDomInController {
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

impl Rule for NoDomInController {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids DOM access in controller files"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::JavaScript
            || ctx.is_spec
            || !ctx.file_name().ends_with(".controller.js")
        {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || trimmed.starts_with('*') {
                continue;
            }

            for pattern in dom_patterns() {
                let Some(m) = pattern.regex.find(line) else {
                    continue;
                };

                let allow = check_allow_with_reason(ctx.content, line_no, NAME);
                if allow.is_allowed() {
                    if self.requires_allow_reason() && allow.reason().is_none() {
                        violations.push(
                            Violation::new(
                                CODE,
                                NAME,
                                Severity::Warning,
                                Location::new(ctx.relative_path.clone(), line_no, m.start() + 1),
                                format!("Allow directive for '{NAME}' is missing required reason"),
                            )
                            .with_suggestion(Suggestion::new(
                                "Add reason=\"...\" to explain why this exception is necessary",
                            )),
                        );
                    }
                    continue;
                }

                let location = Location::new(ctx.relative_path.clone(), line_no, m.start() + 1);

                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location,
                        format!("{} in a controller", pattern.what),
                    )
                    .with_suggestion(Suggestion::new(pattern.instead))
                    .with_doc_ref("GUIDE.md §Angular"),
                );
            }
        }

        violations
    }
}
