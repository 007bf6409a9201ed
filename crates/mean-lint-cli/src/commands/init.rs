//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# mean-lint configuration
# See https://github.com/meanlint/mean-lint for documentation

# Preset: "recommended" (default), "strict", or "minimal"
# preset = "recommended"

# Severity at which the check command exits non-zero
# fail_on = "error"

[scanner]
# Root directory to analyze (default: current directory)
# root = "./client"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/bower_components/**",
    "**/dist/**",
    "**/coverage/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.file-naming]
enabled = true
# exempt = ["index", "app", "main"]

[rules.no-important]
enabled = true
# severity = "warning"  # Override default severity

# [rules.color-variables]
# enabled = true
# variables_prefixes = ["_variables", "variables"]

# [rules.module-index]
# enabled = true
# modules_root = "app"

# Custom forbid patterns (regex over matching files)
# [[patterns]]
# name = "no-console-log"
# files = ["app/**/*.js"]
# forbid = "console\\.log"
# message = "Use the $log service instead of console.log"
# severity = "warning"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("mean-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created mean-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit mean-lint.toml to configure rules");
    println!("  2. Run: mean-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use mean_lint_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(super::DEFAULT_CONFIG).expect("parse");
        assert!(config.is_rule_enabled("file-naming"));
        assert!(config.is_rule_enabled("no-important"));
    }
}
