//! Rule enforcing the guide's file-naming scheme.
//!
//! # Rationale
//!
//! Filenames are the index of a MEAN project: `users.controller.js` tells you
//! what it registers before you open it. Names are kebab-case; JavaScript
//! files carry a role suffix; SCSS partials start with an underscore.
//!
//! # Configuration
//!
//! - `exempt`: extra JavaScript stems allowed without a role suffix
//!   (default: `index`, `app`, `main`)
//!
//! # Suppression
//!
//! - `// mean-lint: allow(file-naming) reason="..."` on the first line

use mean_lint_core::utils::allowance::check_allow_with_reason;
use mean_lint_core::utils::naming::{is_kebab_case, split_role_suffix};
use mean_lint_core::{FileContext, FileKind, Location, Rule, Severity, Suggestion, Violation};

/// Rule code for file-naming.
pub const CODE: &str = "ML001";

/// Rule name for file-naming.
pub const NAME: &str = "file-naming";

/// Enforces kebab-case names and JavaScript role suffixes.
#[derive(Debug, Clone)]
pub struct FileNaming {
    /// JavaScript stems allowed without a role suffix.
    pub exempt: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl FileNaming {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            exempt: vec!["index".to_string(), "app".to_string(), "main".to_string()],
            severity: Severity::Error,
        }
    }

    /// Sets the exempt JavaScript stems.
    #[must_use]
    pub fn exempt<I, S>(mut self, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt = stems.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn violation(&self, ctx: &FileContext, message: String, help: &str) -> Violation {
        Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::whole_file(ctx.relative_path.clone()),
            message,
        )
        .with_suggestion(Suggestion::new(help))
        .with_doc_ref("GUIDE.md §Structure")
    }

    fn check_js(&self, ctx: &FileContext, stem: &str) -> Vec<Violation> {
        if self.exempt.iter().any(|e| e == stem) {
            return Vec::new();
        }

        // Peel role suffixes: `users.controller.spec` -> `users.controller`
        // -> `users`.
        let mut base = stem;
        let mut found_role = false;
        while let Some((rest, _role)) = split_role_suffix(base) {
            base = rest;
            found_role = true;
        }

        let mut violations = Vec::new();

        if !found_role {
            violations.push(self.violation(
                ctx,
                format!("'{}' has no role suffix", ctx.file_name()),
                "Name JavaScript files <feature>.<role>.js, e.g. users.controller.js",
            ));
        }

        if !is_kebab_case(base) {
            violations.push(self.violation(
                ctx,
                format!("'{base}' is not kebab-case"),
                "Use lowercase words separated by single hyphens",
            ));
        }

        violations
    }

    fn check_stylesheet(&self, ctx: &FileContext, stem: &str) -> Vec<Violation> {
        let name = stem.strip_prefix('_').unwrap_or(stem);

        if is_kebab_case(name) {
            return Vec::new();
        }

        vec![self.violation(
            ctx,
            format!("'{}' is not kebab-case", ctx.file_name()),
            "Use lowercase words separated by single hyphens; partials start with _",
        )]
    }

    fn check_parts(&self, ctx: &FileContext, stem: &str) -> Vec<Violation> {
        if stem.split('.').all(is_kebab_case) {
            return Vec::new();
        }

        vec![self.violation(
            ctx,
            format!("'{}' is not kebab-case", ctx.file_name()),
            "Use lowercase words separated by single hyphens",
        )]
    }
}

impl Rule for FileNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces kebab-case names and JavaScript role suffixes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        if check_allow_with_reason(ctx.content, 1, NAME).is_allowed() {
            return Vec::new();
        }

        // Everything before the extension; role parts stay attached.
        let name = ctx.file_name().to_string();
        let Some((stem, _ext)) = name.rsplit_once('.') else {
            return Vec::new();
        };

        match ctx.kind {
            FileKind::JavaScript => self.check_js(ctx, stem),
            FileKind::Scss | FileKind::Css => self.check_stylesheet(ctx, stem),
            FileKind::Html | FileKind::Json => self.check_parts(ctx, stem),
            FileKind::Other => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn check_file(rel: &str) -> Vec<Violation> {
        let path = PathBuf::from("/p").join(rel);
        let ctx = FileContext::new(&path, "", Path::new("/p"));
        FileNaming::new().check(&ctx)
    }

    #[test]
    fn accepts_role_suffixed_js() {
        assert!(check_file("app/users/users.controller.js").is_empty());
        assert!(check_file("app/users/users.service.js").is_empty());
        assert!(check_file("app/users/users.controller.spec.js").is_empty());
        assert!(check_file("app/user-profile/user-profile.directive.js").is_empty());
    }

    #[test]
    fn accepts_exempt_stems() {
        assert!(check_file("app/users/index.js").is_empty());
        assert!(check_file("app/app.js").is_empty());
    }

    #[test]
    fn rejects_js_without_role() {
        let violations = check_file("app/users/helpers.js");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("no role suffix"));
    }

    #[test]
    fn rejects_camel_case_js() {
        let violations = check_file("app/users/userProfile.controller.js");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not kebab-case"));
    }

    #[test]
    fn accepts_scss_partial() {
        assert!(check_file("styles/_variables.scss").is_empty());
        assert!(check_file("styles/app.scss").is_empty());
    }

    #[test]
    fn rejects_camel_case_scss() {
        let violations = check_file("styles/mainTheme.scss");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn accepts_template_names() {
        assert!(check_file("app/users/users.html").is_empty());
        assert!(check_file("app/users/users.tpl.html").is_empty());
    }

    #[test]
    fn rejects_snake_case_html() {
        let violations = check_file("app/users/user_list.html");
        assert_eq!(violations.len(), 1);
    }
}
