//! Rule to forbid inline styles in HTML templates.
//!
//! # Rationale
//!
//! Inline `style` attributes and `<style>` blocks can't be themed, override
//! the stylesheet cascade, and scatter presentation across templates. All
//! styling belongs in the SCSS tree.
//!
//! # Suppression
//!
//! - `<!-- mean-lint: allow(no-inline-style) reason="..." -->` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for no-inline-style.
pub const CODE: &str = "ML008";

/// Rule name for no-inline-style.
pub const NAME: &str = "no-inline-style";

fn style_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Leading boundary keeps ng-style and data-style out.
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r#"(?:^|[\s"'])style\s*=\s*["']"#).unwrap())
}

fn style_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"<style[\s>]").unwrap())
}

/// Forbids `style="..."` attributes and `<style>` blocks in HTML.
#[derive(Debug, Clone)]
pub struct NoInlineStyle {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoInlineStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl NoInlineStyle {
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

impl Rule for NoInlineStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids inline style attributes and <style> blocks in HTML"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::Html {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("<!--") {
                continue;
            }

            let attr = style_attr_re().find(line).map(|m| {
                // Column points at `style`, not the boundary character.
                let start = line[m.start()..]
                    .find("style")
                    .map_or(m.start(), |i| m.start() + i);
                (start, "inline style attribute is forbidden")
            });
            let tag = style_tag_re()
                .find(line)
                .map(|m| (m.start(), "<style> block is forbidden in templates"));

            for (col, message) in attr.into_iter().chain(tag) {
                let allow = check_allow_with_reason(ctx.content, line_no, NAME);
                if allow.is_allowed() {
                    if self.requires_allow_reason() && allow.reason().is_none() {
                        violations.push(
                            Violation::new(
                                CODE,
                                NAME,
                                Severity::Warning,
                                Location::new(ctx.relative_path.clone(), line_no, col + 1),
                                format!("Allow directive for '{NAME}' is missing required reason"),
                            )
                            .with_suggestion(Suggestion::new(
                                "Add reason=\"...\" to explain why this exception is necessary",
                            )),
                        );
                    }
                    continue;
                }

                let location = Location::new(ctx.relative_path.clone(), line_no, col + 1)
                    .with_span(ctx.offset_for(line_no, col + 1), "style".len());

                violations.push(
                    Violation::new(CODE, NAME, self.severity, location, message)
                        .with_suggestion(Suggestion::new(
                            "Move the styling into the module's SCSS file",
                        ))
                        .with_doc_ref("GUIDE.md §CSS"),
                );
            }
        }

        violations
    }
}
