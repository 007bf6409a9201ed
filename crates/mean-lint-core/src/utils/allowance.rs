//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // mean-lint: allow(no-important) reason="vendor override"
//! ```
//! in `//`, `/* */`, and `<!-- -->` comments, so the same syntax works in
//! JavaScript, SCSS/CSS, and HTML sources.

use std::collections::HashSet;

/// State of allowance for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowState {
    /// Rule is not allowed (default).
    Denied,
    /// Rule is explicitly allowed.
    Allowed,
}

impl AllowState {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allowed
    }
}

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Checks source for an allowance comment, ignoring any reason.
///
/// # Arguments
///
/// * `content` - Source file content
/// * `line` - Line number to check (1-indexed)
/// * `rule_name` - Name of the rule to check for
#[must_use]
pub fn check_allow_comment(content: &str, line: usize, rule_name: &str) -> AllowState {
    match check_allow_with_reason(content, line, rule_name) {
        AllowCheck::Allowed { .. } => AllowState::Allowed,
        AllowCheck::Denied => AllowState::Denied,
    }
}

/// Checks source for an allowance comment with reason.
///
/// Looks at the violation line and the line above for a comment in the format:
/// ```text
/// // mean-lint: allow(rule1, rule2) reason="explanation"
/// ```
///
/// `allow(all)` matches every rule.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_name: &str) -> AllowCheck {
    let lines: Vec<&str> = content.lines().collect();

    for check_line in [line.saturating_sub(1), line] {
        if check_line == 0 || check_line > lines.len() {
            continue;
        }

        let line_content = lines[check_line - 1];
        if let Some(directive) = parse_allow_directive(line_content) {
            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Strips the comment opener (and matching closer, if present) from a line,
/// returning the comment body.
fn comment_body(line: &str) -> Option<&str> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix("//") {
        return Some(rest.trim_start_matches('/').trim());
    }
    if let Some(rest) = line.strip_prefix("/*") {
        return Some(rest.trim_end_matches("*/").trim());
    }
    if let Some(rest) = line.strip_prefix("<!--") {
        return Some(rest.trim_end_matches("-->").trim());
    }

    // Directives may trail code on the same line.
    for opener in ["//", "/*", "<!--"] {
        if let Some(pos) = line.find(opener) {
            let rest = &line[pos + opener.len()..];
            let rest = rest.trim_end_matches("*/").trim_end_matches("-->").trim();
            return Some(rest);
        }
    }

    None
}

/// Parses an allowance directive from a comment line.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment_content = comment_body(line)?;

    let directive = comment_content.strip_prefix("mean-lint:")?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules_str = &allow_content[..paren_end];

    let rules: HashSet<String> = rules_str
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = &allow_content[paren_end + 1..].trim();
    let reason = if let Some(reason_part) = rest.strip_prefix("reason=") {
        let reason_part = reason_part.trim();
        if reason_part.starts_with('"') && reason_part.len() > 1 {
            let end = reason_part[1..].find('"').map(|i| i + 1)?;
            Some(reason_part[1..end].to_string())
        } else {
            None
        }
    } else {
        None
    };

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_comment_directive() {
        let directive = parse_allow_directive("// mean-lint: allow(no-important)");
        assert!(directive.is_some());
        let directive = directive.unwrap();
        assert!(directive.rules.contains("no-important"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn parse_directive_with_reason() {
        let directive =
            parse_allow_directive("// mean-lint: allow(no-id-selector) reason=\"vendor hook\"");
        assert!(directive.is_some());
        let directive = directive.unwrap();
        assert!(directive.rules.contains("no-id-selector"));
        assert_eq!(directive.reason, Some("vendor hook".to_string()));
    }

    #[test]
    fn parse_block_comment_directive() {
        let directive = parse_allow_directive("/* mean-lint: allow(no-important) */");
        assert!(directive.is_some());
        assert!(directive.unwrap().rules.contains("no-important"));
    }

    #[test]
    fn parse_html_comment_directive() {
        let directive = parse_allow_directive("<!-- mean-lint: allow(no-inline-style) -->");
        assert!(directive.is_some());
        assert!(directive.unwrap().rules.contains("no-inline-style"));
    }

    #[test]
    fn parse_trailing_directive() {
        let directive =
            parse_allow_directive("color: red !important; // mean-lint: allow(no-important)");
        assert!(directive.is_some());
        assert!(directive.unwrap().rules.contains("no-important"));
    }

    #[test]
    fn parse_multiple_rules() {
        let directive = parse_allow_directive("// mean-lint: allow(rule1, rule2, rule3)");
        assert!(directive.is_some());
        let directive = directive.unwrap();
        assert!(directive.rules.contains("rule1"));
        assert!(directive.rules.contains("rule2"));
        assert!(directive.rules.contains("rule3"));
    }

    #[test]
    fn check_on_preceding_line() {
        let content = ".button {\n  // mean-lint: allow(no-important)\n  color: red !important;\n}";

        assert_eq!(
            check_allow_comment(content, 3, "no-important"),
            AllowState::Allowed
        );
        assert_eq!(
            check_allow_comment(content, 3, "other-rule"),
            AllowState::Denied
        );
    }

    #[test]
    fn check_with_reason() {
        let content = "// mean-lint: allow(no-important) reason=\"overriding bootstrap\"\ncolor: red !important;";

        let result = check_allow_with_reason(content, 2, "no-important");
        assert!(result.is_allowed());
        assert_eq!(result.reason(), Some("overriding bootstrap"));
    }

    #[test]
    fn check_allow_all() {
        let content = "// mean-lint: allow(all) reason=\"generated file\"\nconsole.log(x);";
        assert!(check_allow_with_reason(content, 2, "anything").is_allowed());
    }

    #[test]
    fn check_denied_without_directive() {
        let content = "color: red !important;";
        let result = check_allow_with_reason(content, 1, "no-important");
        assert!(!result.is_allowed());
        assert_eq!(result.reason(), None);
    }
}
