//! Rule traits for defining convention checks.

use crate::context::{FileContext, ProjectContext};
use crate::types::{Severity, Violation};

/// A per-file lint rule.
///
/// Implement this trait to create rules that check individual source files.
/// Rules receive a [`FileContext`] with the file's content and metadata and
/// scan it line by line or with precompiled regexes.
///
/// # Example
///
/// ```ignore
/// use mean_lint_core::{Rule, FileContext, Location, Severity, Violation};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "ML900" }
///
///     fn check(&self, ctx: &FileContext) -> Vec<Violation> {
///         ctx.content
///             .lines()
///             .enumerate()
///             .filter(|(_, l)| l.contains('\t'))
///             .map(|(i, _)| Violation::new(
///                 self.code(),
///                 self.name(),
///                 Severity::Warning,
///                 Location::new(ctx.relative_path.clone(), i + 1, 1),
///                 "tab character in source",
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-important").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "ML005").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// A project-wide lint rule based on directory-shape analysis.
///
/// Implement this trait to create rules that check the project structure
/// rather than individual file contents. Useful for enforcing conventions
/// like "every module directory must have an index.js".
///
/// # Example
///
/// ```ignore
/// use mean_lint_core::{Location, ProjectRule, ProjectContext, Severity, Violation};
///
/// pub struct RequireReadme;
///
/// impl ProjectRule for RequireReadme {
///     fn name(&self) -> &'static str { "require-readme" }
///     fn code(&self) -> &'static str { "ML199" }
///
///     fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation> {
///         if !ctx.root.join("README.md").exists() {
///             vec![Violation::new(
///                 self.code(),
///                 self.name(),
///                 Severity::Warning,
///                 Location::whole_file(ctx.root.to_path_buf()),
///                 "Project should have a README.md",
///             )]
///         } else {
///             vec![]
///         }
///     }
/// }
/// ```
pub trait ProjectRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "ML101").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks the project structure and returns any violations found.
    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation>;
}

/// Type alias for boxed `ProjectRule` trait objects.
pub type ProjectRuleBox = Box<dyn ProjectRule>;
