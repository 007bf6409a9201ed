//! Project rule requiring an `index.js` in every module directory.
//!
//! # Rationale
//!
//! Each feature folder under `app/` is a Browserify module; its `index.js`
//! registers the module's controllers, services, and directives on the
//! Angular module. A folder with JavaScript but no `index.js` is invisible
//! to the bundle.
//!
//! # Configuration
//!
//! - `modules_root`: directory holding module folders (default: `app`)

use std::collections::BTreeMap;
use std::path::PathBuf;

use mean_lint_core::{
    FileKind, Location, ProjectContext, ProjectRule, Severity, Suggestion, Violation,
};

/// Rule code for module-index.
pub const CODE: &str = "ML101";

/// Rule name for module-index.
pub const NAME: &str = "module-index";

/// Requires `index.js` in every module directory containing JavaScript.
#[derive(Debug, Clone)]
pub struct ModuleIndex {
    /// Directory holding module folders.
    pub modules_root: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ModuleIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleIndex {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules_root: "app".to_string(),
            severity: Severity::Error,
        }
    }

    /// Sets the modules root directory.
    #[must_use]
    pub fn modules_root(mut self, root: impl Into<String>) -> Self {
        self.modules_root = root.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ProjectRule for ModuleIndex {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires index.js in every module directory under the modules root"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check_project(&self, ctx: &ProjectContext) -> Vec<Violation> {
        let root = std::path::Path::new(&self.modules_root);

        // module dir -> has index.js
        let mut modules: BTreeMap<PathBuf, bool> = BTreeMap::new();

        for (_abs, rel) in ctx.files_of_kind(FileKind::JavaScript) {
            let Ok(under_root) = rel.strip_prefix(root) else {
                continue;
            };
            let mut components = under_root.components();
            let Some(std::path::Component::Normal(module)) = components.next() else {
                continue;
            };
            // Files directly under the modules root (app.js etc.) have no
            // module dir.
            if components.clone().next().is_none() {
                continue;
            }

            let module_dir = root.join(module);
            let is_index = under_root == std::path::Path::new(module).join("index.js");
            let entry = modules.entry(module_dir).or_insert(false);
            *entry |= is_index;
        }

        modules
            .into_iter()
            .filter(|(_, has_index)| !has_index)
            .map(|(dir, _)| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    Location::whole_file(dir.clone()),
                    format!("module directory '{}' has no index.js", dir.display()),
                )
                .with_suggestion(Suggestion::new(
                    "Add an index.js that registers the module's components",
                ))
                .with_doc_ref("GUIDE.md §Structure")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn project(files: &[&str]) -> Vec<Violation> {
        let root = Path::new("/proj");
        let ctx = ProjectContext::new(root)
            .with_files(files.iter().map(|f| root.join(f)).collect());
        ModuleIndex::new().check_project(&ctx)
    }

    #[test]
    fn module_with_index_passes() {
        let violations = project(&[
            "app/users/index.js",
            "app/users/users.controller.js",
        ]);
        assert!(violations.is_empty());
    }

    #[test]
    fn module_without_index_flagged() {
        let violations = project(&[
            "app/users/index.js",
            "app/orders/orders.controller.js",
        ]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("app/orders"));
    }

    #[test]
    fn nested_files_count_toward_module() {
        let violations = project(&["app/users/widgets/avatar.directive.js"]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("app/users"));
    }

    #[test]
    fn files_at_modules_root_ignored() {
        let violations = project(&["app/app.js"]);
        assert!(violations.is_empty());
    }

    #[test]
    fn files_outside_modules_root_ignored() {
        let violations = project(&["lib/helpers.js", "styles/app.scss"]);
        assert!(violations.is_empty());
    }
}
