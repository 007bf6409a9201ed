//! User-defined pattern rules, declared in `[[patterns]]` TOML tables.
//!
//! Each entry names a rule, scopes it with file globs, and gives a regex
//! that must not match. Validation happens entirely at load time; checking
//! never panics.
//!
//! ```toml
//! [[patterns]]
//! name = "no-console-log"
//! files = ["app/**/*.js"]
//! forbid = "console\\.log"
//! message = "use the $log service"
//! severity = "warning"
//! ```

use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::config::PatternConfig;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::types::{Location, Severity, Suggestion, Violation};
use crate::utils::allowance::check_allow_with_reason;

/// Rule code shared by all pattern-rule violations.
pub const CODE: &str = "MLD001";

/// Errors produced while validating `[[patterns]]` entries.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Pattern entry has an empty name.
    #[error("pattern rule has an empty name")]
    EmptyName,

    /// Pattern name contains characters outside `[a-z0-9-]`.
    #[error("pattern rule name '{name}' must be kebab-case ([a-z0-9-])")]
    InvalidName {
        /// The offending name.
        name: String,
    },

    /// Pattern entry lists no file globs.
    #[error("pattern rule '{name}' has no file globs")]
    EmptyFiles {
        /// Name of the pattern missing globs.
        name: String,
    },

    /// A file glob failed to compile.
    #[error("pattern rule '{name}' has invalid glob '{pattern}': {source}")]
    InvalidGlob {
        /// Name of the pattern.
        name: String,
        /// The offending glob.
        pattern: String,
        /// Underlying glob error.
        source: glob::PatternError,
    },

    /// The forbid regex failed to compile.
    #[error("pattern rule '{name}' has invalid regex: {source}")]
    InvalidRegex {
        /// Name of the pattern.
        name: String,
        /// Underlying regex error.
        source: Box<regex::Error>,
    },
}

/// A validated, pre-compiled glob for file path matching.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    compiled: glob::Pattern,
}

impl GlobPattern {
    /// Compiles a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying glob error on invalid syntax.
    pub fn new(pattern: &str) -> Result<Self, glob::PatternError> {
        Ok(Self {
            raw: pattern.to_string(),
            compiled: glob::Pattern::new(pattern)?,
        })
    }

    /// Tests whether a relative file path matches this pattern.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        if self.compiled.matches(&path_str) {
            return true;
        }
        // For `dir/**` patterns, also accept any path under `dir/`.
        if let Some(prefix) = self.raw.strip_suffix("/**") {
            let normalized = prefix.trim_end_matches('/');
            if path_str.starts_with(normalized)
                && path_str
                    .as_bytes()
                    .get(normalized.len())
                    .is_some_and(|&b| b == b'/')
            {
                return true;
            }
        }
        false
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// A validated pattern rule definition.
#[derive(Debug)]
pub struct PatternDef {
    name: String,
    files: Vec<GlobPattern>,
    forbid: Regex,
    message: String,
    severity: Severity,
}

impl PatternDef {
    /// Validates a raw `[[patterns]]` entry into a definition.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] naming the offending entry if the name,
    /// globs, or regex are invalid.
    pub fn from_config(raw: &PatternConfig) -> Result<Self, PatternError> {
        if raw.name.is_empty() {
            return Err(PatternError::EmptyName);
        }
        if !raw
            .name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(PatternError::InvalidName {
                name: raw.name.clone(),
            });
        }
        if raw.files.is_empty() {
            return Err(PatternError::EmptyFiles {
                name: raw.name.clone(),
            });
        }

        let files = raw
            .files
            .iter()
            .map(|p| {
                GlobPattern::new(p).map_err(|e| PatternError::InvalidGlob {
                    name: raw.name.clone(),
                    pattern: p.clone(),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let forbid = Regex::new(&raw.forbid).map_err(|e| PatternError::InvalidRegex {
            name: raw.name.clone(),
            source: Box::new(e),
        })?;

        let message = raw
            .message
            .clone()
            .unwrap_or_else(|| format!("forbidden pattern '{}' matched", raw.forbid));

        Ok(Self {
            name: raw.name.clone(),
            files,
            forbid,
            message,
            severity: raw.severity.unwrap_or(Severity::Error),
        })
    }

    /// Returns the user-facing rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests whether this definition applies to a relative file path.
    #[must_use]
    pub fn applies_to(&self, path: &Path) -> bool {
        self.files.iter().any(|g| g.matches(path))
    }
}

/// A per-file rule that enforces every `[[patterns]]` declaration.
///
/// Violations carry the user-defined rule name, not this rule's own name,
/// so reports read naturally.
pub struct PatternRule {
    defs: Vec<PatternDef>,
}

impl PatternRule {
    /// Creates a pattern rule over validated definitions.
    #[must_use]
    pub fn new(defs: Vec<PatternDef>) -> Self {
        Self { defs }
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "User-defined forbid-regex rules from [[patterns]] config"
    }

    fn check(&self, ctx: &FileContext) -> Vec<Violation> {
        let applicable: Vec<&PatternDef> = self
            .defs
            .iter()
            .filter(|d| d.applies_to(&ctx.relative_path))
            .collect();

        if applicable.is_empty() {
            return vec![];
        }

        let mut violations = Vec::new();

        for (idx, line) in ctx.content.lines().enumerate() {
            let line_no = idx + 1;
            for def in &applicable {
                for m in def.forbid.find_iter(line) {
                    let allow = check_allow_with_reason(ctx.content, line_no, &def.name);
                    if allow.is_allowed() {
                        if def.severity == Severity::Error && allow.reason().is_none() {
                            violations.push(
                                Violation::new(
                                    CODE,
                                    def.name.clone(),
                                    Severity::Warning,
                                    Location::new(ctx.relative_path.clone(), line_no, m.start() + 1),
                                    format!(
                                        "Allow directive for '{}' is missing required reason",
                                        def.name
                                    ),
                                )
                                .with_suggestion(Suggestion::new(
                                    "Add reason=\"...\" to explain why this exception is necessary",
                                )),
                            );
                        }
                        continue;
                    }

                    let location = Location::new(
                        ctx.relative_path.clone(),
                        line_no,
                        m.start() + 1,
                    )
                    .with_span(ctx.offset_for(line_no, m.start() + 1), m.len());

                    violations.push(Violation::new(
                        CODE,
                        def.name.clone(),
                        def.severity,
                        location,
                        def.message.clone(),
                    ));
                }
            }
        }

        violations
    }
}

/// Builds rules from raw `[[patterns]]` config entries.
///
/// Returns an empty vec when no patterns are declared.
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn load_rules(patterns: &[PatternConfig]) -> Result<Vec<RuleBox>, PatternError> {
    if patterns.is_empty() {
        return Ok(vec![]);
    }

    let defs = patterns
        .iter()
        .map(PatternDef::from_config)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(vec![Box::new(PatternRule::new(defs))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn raw(name: &str, files: &[&str], forbid: &str) -> PatternConfig {
        PatternConfig {
            name: name.to_string(),
            files: files.iter().map(ToString::to_string).collect(),
            forbid: forbid.to_string(),
            message: None,
            severity: None,
        }
    }

    fn check(rule: &PatternRule, rel: &str, content: &str) -> Vec<Violation> {
        let path = PathBuf::from("/proj").join(rel);
        let ctx = FileContext::new(&path, content, Path::new("/proj"));
        rule.check(&ctx)
    }

    #[test]
    fn empty_name_rejected() {
        let err = PatternDef::from_config(&raw("", &["**/*.js"], "x")).expect_err("should fail");
        assert!(matches!(err, PatternError::EmptyName));
    }

    #[test]
    fn non_kebab_name_rejected() {
        let err =
            PatternDef::from_config(&raw("NoConsole", &["**/*.js"], "x")).expect_err("should fail");
        assert!(matches!(err, PatternError::InvalidName { .. }));
    }

    #[test]
    fn invalid_regex_rejected() {
        let err =
            PatternDef::from_config(&raw("bad-re", &["**/*.js"], "(")).expect_err("should fail");
        assert!(matches!(err, PatternError::InvalidRegex { .. }));
    }

    #[test]
    fn glob_scoping_respected() {
        let def = PatternDef::from_config(&raw("no-alert", &["app/**"], "alert\\(")).unwrap();
        assert!(def.applies_to(Path::new("app/users/users.controller.js")));
        assert!(!def.applies_to(Path::new("styles/app.scss")));
    }

    #[test]
    fn match_produces_violation_with_user_name() {
        let defs = vec![
            PatternDef::from_config(&raw("no-console-log", &["**/*.js"], "console\\.log")).unwrap(),
        ];
        let rule = PatternRule::new(defs);

        let violations = check(&rule, "app/index.js", "var x = 1;\nconsole.log(x);\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, "no-console-log");
        assert_eq!(violations[0].code, CODE);
        assert_eq!(violations[0].location.line, 2);
        assert_eq!(violations[0].location.column, 1);
    }

    #[test]
    fn allow_directive_with_reason_suppresses() {
        let defs = vec![
            PatternDef::from_config(&raw("no-console-log", &["**/*.js"], "console\\.log")).unwrap(),
        ];
        let rule = PatternRule::new(defs);

        let content = "// mean-lint: allow(no-console-log) reason=\"debug build only\"\nconsole.log(x);\n";
        let violations = check(&rule, "app/index.js", content);
        assert!(violations.is_empty());
    }

    #[test]
    fn allow_directive_without_reason_warns() {
        let defs = vec![
            PatternDef::from_config(&raw("no-console-log", &["**/*.js"], "console\\.log")).unwrap(),
        ];
        let rule = PatternRule::new(defs);

        let content = "// mean-lint: allow(no-console-log)\nconsole.log(x);\n";
        let violations = check(&rule, "app/index.js", content);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0].message.contains("missing required reason"));
    }

    #[test]
    fn load_rules_empty_config() {
        let rules = load_rules(&[]).unwrap();
        assert!(rules.is_empty());
    }
}
