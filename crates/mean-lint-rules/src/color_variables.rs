//! Rule keeping raw hex colors in the variables partial.
//!
//! # Rationale
//!
//! The guide centralizes the palette in `_variables.scss` so a rebrand is a
//! one-file change. A hex literal inside a component stylesheet bypasses the
//! palette.
//!
//! # Configuration
//!
//! - `variables_files`: glob list of files allowed to define colors
//!   (default: any file whose name starts with `_variables`)
//!
//! # Suppression
//!
//! - `// mean-lint: allow(color-variables) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for color-variables.
pub const CODE: &str = "ML007";

/// Rule name for color-variables.
pub const NAME: &str = "color-variables";

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").unwrap())
}

/// Flags raw hex colors outside the variables partial.
#[derive(Debug, Clone)]
pub struct ColorVariables {
    /// File-name prefixes exempt from the check.
    pub variables_prefixes: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ColorVariables {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorVariables {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables_prefixes: vec!["_variables".to_string(), "variables".to_string()],
            severity: Severity::Warning,
        }
    }

    /// Sets the exempt file-name prefixes.
    #[must_use]
    pub fn variables_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn is_variables_file(&self, ctx: &FileContext) -> bool {
        let name = ctx.file_name();
        self.variables_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

impl Rule for ColorVariables {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Keeps raw hex colors in the variables partial"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::Scss || self.is_variables_file(ctx) {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || trimmed.starts_with('*') || trimmed.starts_with("/*") {
                continue;
            }

            for m in hex_color_re().find_iter(line) {
                // Only declaration values: a `:` must precede the literal,
                // otherwise `#fab` could be an id selector (ML006's turf).
                if !line[..m.start()].contains(':') {
                    continue;
                }

                let allow = check_allow_with_reason(ctx.content, line_no, NAME);
                if allow.is_allowed() {
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
                        format!("raw color '{}' outside the variables partial", m.as_str()),
                    )
                    .with_suggestion(Suggestion::new(
                        "Define the color in _variables.scss and reference the variable",
                    ))
                    .with_doc_ref("GUIDE.md §CSS"),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn check_file(rel: &str, content: &str) -> Vec<Violation> {
        let path = PathBuf::from("/p").join(rel);
        let ctx = FileContext::new(&path, content, Path::new("/p"));
        ColorVariables::new().check(&ctx)
    }

    #[test]
    fn detects_hex_in_component_stylesheet() {
        let violations = check_file(
            "app/users/users.scss",
            ".avatar {\n  border-color: #ff6600;\n}\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("#ff6600"));
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn allows_variables_partial() {
        let violations = check_file("styles/_variables.scss", "$brand: #ff6600;\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_id_selectors() {
        let violations = check_file("app/users/users.scss", "#fab {\n  margin: 0;\n}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_variable_references() {
        let violations = check_file(
            "app/users/users.scss",
            ".avatar {\n  border-color: $brand;\n}\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn custom_prefixes() {
        let path = PathBuf::from("/p/styles/_palette.scss");
        let ctx = FileContext::new(&path, "$brand: #ff6600;\n", Path::new("/p"));
        let rule = ColorVariables::new().variables_prefixes(["_palette"]);
        assert!(rule.check(&ctx).is_empty());
    }
}
