//! Rule enforcing minification-safe Angular dependency injection.
//!
//! # Rationale
//!
//! `module.controller('UsersCtrl', function($scope) {...})` breaks the moment
//! the bundle is minified: `$scope` becomes `a` and the injector can no longer
//! resolve it. The guide requires the array annotation:
//!
//! ```text
//! module.controller('UsersCtrl', ['$scope', function($scope) {...}]);
//! ```
//!
//! # Heuristic
//!
//! Registration calls are matched on a single line. A bare `function` second
//! argument with a non-empty parameter list is a violation; an empty
//! parameter list injects nothing and is exempt. Factories written as named
//! functions with an `$inject` array elsewhere in the file are also exempt.
//!
//! # Suppression
//!
//! - `// mean-lint: allow(di-array-annotation) reason="..."` comment

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};
use regex::Regex;
use std::sync::OnceLock;

/// Rule code for di-array-annotation.
pub const CODE: &str = "ML002";

/// Rule name for di-array-annotation.
pub const NAME: &str = "di-array-annotation";

fn named_registration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| {
        Regex::new(
            r#"\.(controller|service|factory|directive|filter|animation)\s*\(\s*['"][^'"]+['"]\s*,\s*function\s*\(([^)]*)\)"#,
        )
        .unwrap()
    })
}

fn anonymous_registration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::unwrap_used)] // Pattern is a compile-time constant
    RE.get_or_init(|| Regex::new(r"\.(config|run)\s*\(\s*function\s*\(([^)]*)\)").unwrap())
}

/// Requires the array annotation on Angular registrations.
#[derive(Debug, Clone)]
pub struct DiArrayAnnotation {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for DiArrayAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl DiArrayAnnotation {
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

impl Rule for DiArrayAnnotation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires minification-safe array annotation on Angular registrations"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if ctx.kind != FileKind::JavaScript || ctx.is_spec {
            return Vec::new();
        }

        // A file-level $inject assignment is the other sanctioned annotation.
        if ctx.content.contains(".$inject") {
            return Vec::new();
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") || trimmed.starts_with('*') {
                continue;
            }

            for caps in named_registration_re()
                .captures_iter(line)
                .chain(anonymous_registration_re().captures_iter(line))
            {
                let params = caps.get(2).map_or("", |m| m.as_str());
                if params.trim().is_empty() {
                    continue;
                }

                let kind = caps.get(1).map_or("registration", |m| m.as_str());
                let whole = caps.get(0).map_or(0, |m| m.start());

                let allow = check_allow_with_reason(ctx.content, line_no, NAME);
                if allow.is_allowed() {
                    if self.requires_allow_reason() && allow.reason().is_none() {
                        violations.push(
                            Violation::new(
                                CODE,
                                NAME,
                                Severity::Warning,
                                Location::new(ctx.relative_path.clone(), line_no, whole + 1),
                                format!("Allow directive for '{NAME}' is missing required reason"),
                            )
                            .with_suggestion(Suggestion::new(
                                "Add reason=\"...\" to explain why this exception is necessary",
                            )),
                        );
                    }
                    continue;
                }

                let location = Location::new(ctx.relative_path.clone(), line_no, whole + 1);

                violations.push(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location,
                        format!(
                            "{kind} registration injects dependencies without array annotation"
                        ),
                    )
                    .with_suggestion(Suggestion::new(
                        "Wrap the function: ['$dep', function($dep) {...}]",
                    ))
                    .with_doc_ref("GUIDE.md §Angular"),
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

    fn check_js(content: &str) -> Vec<Violation> {
        let path = PathBuf::from("/p/app/users/users.controller.js");
        let ctx = FileContext::new(&path, content, Path::new("/p"));
        DiArrayAnnotation::new().check(&ctx)
    }

    #[test]
    fn detects_bare_function_controller() {
        let violations =
            check_js("angular.module('app').controller('UsersCtrl', function($scope) {});\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("controller"));
    }

    #[test]
    fn detects_bare_config_block() {
        let violations =
            check_js("angular.module('app').config(function($routeProvider) {});\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("config"));
    }

    #[test]
    fn accepts_array_annotation() {
        let violations = check_js(
            "angular.module('app').controller('UsersCtrl', ['$scope', function($scope) {}]);\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn accepts_empty_parameter_list() {
        let violations = check_js("angular.module('app').run(function() {});\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn accepts_inject_annotation() {
        let violations = check_js(
            "function UsersCtrl($scope) {}\nUsersCtrl.$inject = ['$scope'];\nangular.module('app').controller('UsersCtrl', UsersCtrl);\n",
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn skips_spec_files() {
        let path = PathBuf::from("/p/app/users/users.controller.spec.js");
        let ctx = FileContext::new(
            &path,
            "module.controller('X', function($scope) {});\n",
            Path::new("/p"),
        );
        assert!(DiArrayAnnotation::new().check(&ctx).is_empty());
    }
}
