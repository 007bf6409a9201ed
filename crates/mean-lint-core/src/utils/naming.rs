//! File-name helpers for naming-convention rules.

/// Role suffixes the guide recognizes for JavaScript artifacts, as they
/// appear in file names like `users.controller.js`.
pub const JS_ROLE_SUFFIXES: &[&str] = &[
    "controller",
    "service",
    "factory",
    "directive",
    "filter",
    "config",
    "routes",
    "spec",
    "test",
];

/// Returns true if a name part is kebab-case: lowercase ASCII letters,
/// digits, and single hyphens, never leading or trailing.
#[must_use]
pub fn is_kebab_case(name: &str) -> bool {
    if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
        return false;
    }
    let mut prev_hyphen = false;
    for c in name.chars() {
        match c {
            'a'..='z' | '0'..='9' => prev_hyphen = false,
            '-' => {
                if prev_hyphen {
                    return false;
                }
                prev_hyphen = true;
            }
            _ => return false,
        }
    }
    true
}

/// Splits a file stem into (base, role suffix) if the stem carries a
/// recognized role, e.g. `users.controller` -> `("users", "controller")`.
///
/// Returns `None` when there is no dot-separated role part.
#[must_use]
pub fn split_role_suffix(stem: &str) -> Option<(&str, &str)> {
    let (base, role) = stem.rsplit_once('.')?;
    JS_ROLE_SUFFIXES.contains(&role).then_some((base, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_accepts() {
        assert!(is_kebab_case("users"));
        assert!(is_kebab_case("user-profile"));
        assert!(is_kebab_case("v2-api"));
    }

    #[test]
    fn kebab_case_rejects() {
        assert!(!is_kebab_case(""));
        assert!(!is_kebab_case("UserProfile"));
        assert!(!is_kebab_case("user_profile"));
        assert!(!is_kebab_case("-users"));
        assert!(!is_kebab_case("users-"));
        assert!(!is_kebab_case("user--profile"));
    }

    #[test]
    fn splits_role_suffix() {
        assert_eq!(
            split_role_suffix("users.controller"),
            Some(("users", "controller"))
        );
        assert_eq!(
            split_role_suffix("user-profile.directive"),
            Some(("user-profile", "directive"))
        );
        assert_eq!(split_role_suffix("users"), None);
        assert_eq!(split_role_suffix("users.widget"), None);
    }

    #[test]
    fn spec_suffix_nests_after_role() {
        // `users.controller.spec` splits off `spec` first; callers peel
        // suffixes iteratively.
        assert_eq!(
            split_role_suffix("users.controller.spec"),
            Some(("users.controller", "spec"))
        );
    }
}
