//! Rule checking the shape of Jasmine spec files.
//!
//! # Rationale
//!
//! A spec file without a `describe` block runs nothing; a `describe` without
//! `it` asserts nothing. And any spec that sets `$httpBackend` expectations
//! must verify them in `afterEach`, or silently-unflushed requests pass.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(spec-structure) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};

/// Rule code for spec-structure.
pub const CODE: &str = "ML009";

/// Rule name for spec-structure.
pub const NAME: &str = "spec-structure";

/// Checks that `*.spec.js` files have a runnable Jasmine structure.
#[derive(Debug, Clone)]
pub struct SpecStructure {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SpecStructure {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecStructure {
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

    fn whole_file_violation(&self, ctx: &FileContext, message: &str, help: &str) -> Violation {
        Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::whole_file(ctx.relative_path.clone()),
            message,
        )
        .with_suggestion(Suggestion::new(help))
        .with_doc_ref("GUIDE.md §Testing")
    }
}

impl Rule for SpecStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks describe/it structure and $httpBackend verification in specs"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::JavaScript || !ctx.file_name().ends_with(".spec.js") {
            return Vec::new();
        }

        if check_allow_with_reason(ctx.content, 1, NAME).is_allowed() {
            return Vec::new();
        }

        let mut violations = Vec::new();

        if !ctx.content.contains("describe(") {
            violations.push(self.whole_file_violation(
                ctx,
                "spec file has no describe block",
                "Wrap the spec in describe('unit under test', function() {...})",
            ));
            return violations;
        }

        if !ctx.content.contains("it(") {
            violations.push(self.whole_file_violation(
                ctx,
                "spec file has no it() cases",
                "Add at least one it('should ...', function() {...})",
            ));
        }

        let uses_http_backend = ctx
            .content
            .lines()
            .any(|l| l.contains("$httpBackend.expect") || l.contains("$httpBackend.when"));

        if uses_http_backend && !ctx.content.contains("verifyNoOutstandingExpectation") {
            let line = ctx
                .content
                .lines()
                .position(|l| l.contains("$httpBackend"))
                .map_or(0, |i| i + 1);

            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::new(ctx.relative_path.clone(), line, 1),
                    "$httpBackend expectations are never verified",
                )
                .with_suggestion(Suggestion::new(
                    "Call $httpBackend.verifyNoOutstandingExpectation() in afterEach",
                ))
                .with_doc_ref("GUIDE.md §Testing"),
            );
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn check_spec(content: &str) -> Vec<Violation> {
        let path = PathBuf::from("/p/app/users/users.controller.spec.js");
        let ctx = FileContext::new(&path, content, Path::new("/p"));
        SpecStructure::new().check(&ctx)
    }

    #[test]
    fn well_formed_spec_passes() {
        let violations = check_spec(
            "describe('UsersCtrl', function() {\n  it('should exist', function() {});\n});\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn missing_describe_flagged() {
        let violations = check_spec("it('floats free', function() {});\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("no describe"));
        assert_eq!(violations[0].location.line, 0);
    }

    #[test]
    fn missing_it_flagged() {
        let violations = check_spec("describe('UsersCtrl', function() {});\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("no it()"));
    }

    #[test]
    fn unverified_http_backend_flagged() {
        let violations = check_spec(
            "describe('UsersService', function() {\n  it('fetches', function() {\n    $httpBackend.expectGET('/api/users').respond([]);\n  });\n});\n",
        );
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("never verified"));
        assert_eq!(violations[0].location.line, 3);
    }

    #[test]
    fn verified_http_backend_passes() {
        let violations = check_spec(
            "describe('UsersService', function() {\n  afterEach(function() {\n    $httpBackend.verifyNoOutstandingExpectation();\n  });\n  it('fetches', function() {\n    $httpBackend.expectGET('/api/users').respond([]);\n  });\n});\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn only_applies_to_spec_files() {
        let path = PathBuf::from("/p/app/users/users.controller.js");
        let ctx = FileContext::new(&path, "var x = 1;\n", Path::new("/p"));
        assert!(SpecStructure::new().check(&ctx).is_empty());
    }
}
