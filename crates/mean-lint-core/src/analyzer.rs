//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::{FileContext, ProjectContext};
use crate::pattern::{self, PatternError};
use crate::rule::{ProjectRule, ProjectRuleBox, Rule, RuleBox};
use crate::scanner::{ScanError, Scanner};
use crate::types::{LintResult, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading a source file (unreadable or not UTF-8).
    #[error("Read error in {path}: {message}")]
    Read {
        /// Path to the file that failed to read.
        path: PathBuf,
        /// Read error message.
        message: String,
    },

    /// Scanner error.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Invalid `[[patterns]]` declaration.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    project_rules: Vec<ProjectRuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_read_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds a project-wide rule to the analyzer.
    #[must_use]
    pub fn project_rule<R: ProjectRule + 'static>(mut self, rule: R) -> Self {
        self.project_rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed project-wide rule to the analyzer.
    #[must_use]
    pub fn project_rule_box(mut self, rule: ProjectRuleBox) -> Self {
        self.project_rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    ///
    /// Any `[[patterns]]` declarations in the config become rules at build
    /// time.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on unreadable files (default: false).
    #[must_use]
    pub fn fail_on_read_error(mut self, fail: bool) -> Self {
        self.fail_on_read_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if exclude globs or `[[patterns]]` declarations are
    /// invalid, or the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.scanner.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.scanner.exclude.clone());
        if exclude_patterns.is_empty() {
            exclude_patterns.extend(crate::config::default_excludes());
        }

        let scanner = Scanner::new(
            root.clone(),
            exclude_patterns,
            config.scanner.respect_gitignore,
        )?;

        let mut rules = self.rules;
        rules.extend(pattern::load_rules(&config.patterns)?);

        Ok(Analyzer {
            root,
            scanner,
            rules,
            project_rules: self.project_rules,
            config,
            fail_on_read_error: self.fail_on_read_error,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    scanner: Scanner,
    rules: Vec<RuleBox>,
    project_rules: Vec<ProjectRuleBox>,
    config: Config,
    fail_on_read_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len() + self.project_rules.len()
    }

    /// Analyzes all files and returns the results.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or on the first unreadable
    /// file when `fail_on_read_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let mut result = LintResult::new();
        let files = self.scanner.scan()?;

        info!("Found {} files to analyze", files.len());

        // Run per-file rules
        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Read { path, message }) => {
                    warn!("Failed to read {}: {}", path.display(), message);
                    if self.fail_on_read_error {
                        return Err(AnalyzerError::Read { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Run project-wide rules
        let project_ctx = ProjectContext::new(&self.root).with_files(files);

        for rule in &self.project_rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let violations = rule.check_project(&project_ctx);
            let violations = self.apply_severity_override(rule.name(), violations);
            result.violations.extend(violations);
        }

        // Sort violations by file, then line
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| AnalyzerError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let ctx = FileContext::new(path, &content, &self.root);
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(&ctx);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        Ok(violations)
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Location, Severity};
    use std::fs;
    use tempfile::TempDir;

    struct AlwaysFires;

    impl Rule for AlwaysFires {
        fn name(&self) -> &'static str {
            "always-fires"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                Severity::Error,
                Location::new(ctx.relative_path.clone(), 1, 1),
                "fired",
            )]
        }
    }

    #[test]
    fn builder_resolves_root() {
        let tmp = TempDir::new().expect("tempdir");
        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn per_file_rules_run_over_scanned_files() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("app.js"), "var x = 1;\n").expect("write");
        fs::write(tmp.path().join("notes.txt"), "ignored\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(AlwaysFires)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "always-fires");
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("app.js"), "var x = 1;\n").expect("write");

        let config = Config::parse("[rules.always-fires]\nenabled = false\n").expect("config");
        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(AlwaysFires)
            .config(config)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        assert!(result.violations.is_empty());
    }

    #[test]
    fn severity_override_applied() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("app.js"), "var x = 1;\n").expect("write");

        let config =
            Config::parse("[rules.always-fires]\nseverity = \"info\"\n").expect("config");
        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(AlwaysFires)
            .config(config)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        assert_eq!(result.violations[0].severity, Severity::Info);
    }

    #[test]
    fn pattern_rules_loaded_from_config() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("app.js"), "console.log('hi');\n").expect("write");

        let config = Config::parse(
            r#"
[[patterns]]
name = "no-console-log"
files = ["**/*.js"]
forbid = "console\\.log"
"#,
        )
        .expect("config");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .config(config)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "no-console-log");
    }

    // Emits violations in reverse line order to exercise the final sort.
    struct ReversedLines;

    impl Rule for ReversedLines {
        fn name(&self) -> &'static str {
            "reversed-lines"
        }
        fn code(&self) -> &'static str {
            "TEST002"
        }
        fn check(&self, ctx: &FileContext) -> Vec<Violation> {
            [2, 1]
                .iter()
                .map(|&line| {
                    Violation::new(
                        self.code(),
                        self.name(),
                        Severity::Warning,
                        Location::new(ctx.relative_path.clone(), line, 1),
                        "out of order",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn violations_sorted_by_file_then_line() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("b.js"), "var b;\n").expect("write");
        fs::write(tmp.path().join("a.js"), "var a;\n").expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(ReversedLines)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        let order: Vec<(String, usize)> = result
            .violations
            .iter()
            .map(|v| (v.location.file.to_string_lossy().into_owned(), v.location.line))
            .collect();

        assert_eq!(
            order,
            vec![
                ("a.js".to_string(), 1),
                ("a.js".to_string(), 2),
                ("b.js".to_string(), 1),
                ("b.js".to_string(), 2),
            ]
        );
    }

    #[test]
    fn unreadable_file_skipped_with_warning() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("app.js"), "var x = 1;\n").expect("write");
        // Invalid UTF-8 makes read_to_string fail for this file.
        fs::write(tmp.path().join("bad.js"), [0xf0, 0x28, 0x8c, 0x28]).expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(AlwaysFires)
            .build()
            .expect("build");

        let result = analyzer.analyze().expect("analyze");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);
        assert!(result.violations[0]
            .location
            .file
            .to_string_lossy()
            .contains("app.js"));
    }

    #[test]
    fn fail_on_read_error_surfaces_read_error() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("bad.js"), [0xf0, 0x28, 0x8c, 0x28]).expect("write");

        let analyzer = Analyzer::builder()
            .root(tmp.path())
            .rule(AlwaysFires)
            .fail_on_read_error(true)
            .build()
            .expect("build");

        let err = analyzer.analyze().expect_err("should fail");
        assert!(matches!(err, AnalyzerError::Read { .. }));
    }
}
