//! Check command implementation.

use anyhow::{Context, Result};
use mean_lint_core::{Analyzer, Config, ProjectRuleBox, RuleBox};
use mean_lint_rules::{
    AppLayout, ColorVariables, FileNaming, ModuleIndex, Preset, RequireSpec,
};
use std::path::Path;

use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &crate::config_resolver::ConfigSource,
) -> Result<()> {
    let config = match source {
        crate::config_resolver::ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let preset = match config.preset.as_deref() {
        Some(name) => Preset::from_name(name)
            .with_context(|| format!("Unknown preset '{name}' in config"))?,
        None => Preset::Recommended,
    };

    let fail_on = config.fail_on();

    // Add rules based on filter, then apply config options
    let (rules, project_rules) = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names)
    } else {
        (preset.rules(), preset.project_rules())
    };
    let rules = apply_rule_options(rules, &config);
    let project_rules = apply_project_rule_options(project_rules, &config);

    // Build analyzer
    let mut builder = Analyzer::builder().root(path).config(config);

    // Add exclude patterns
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules {
        builder = builder.rule_box(rule);
    }
    for rule in project_rules {
        builder = builder.project_rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    // Output results
    super::output::print(&result, format)?;

    // Exit with error code when violations reach the fail_on threshold
    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Rebuilds rules whose config section sets rule-specific options.
///
/// Enabled/severity are handled by the analyzer; only free-form options
/// need the concrete rule type.
fn apply_rule_options(rules: Vec<RuleBox>, config: &Config) -> Vec<RuleBox> {
    rules
        .into_iter()
        .map(|rule| {
            let Some(rc) = config.rules.get(rule.name()) else {
                return rule;
            };
            match rule.name() {
                "file-naming" => {
                    let exempt = rc.get_str_array("exempt");
                    if exempt.is_empty() {
                        rule
                    } else {
                        Box::new(FileNaming::new().exempt(exempt))
                    }
                }
                "color-variables" => {
                    let prefixes = rc.get_str_array("variables_prefixes");
                    if prefixes.is_empty() {
                        rule
                    } else {
                        Box::new(ColorVariables::new().variables_prefixes(prefixes))
                    }
                }
                _ => rule,
            }
        })
        .collect()
}

/// Same as [`apply_rule_options`] for project-wide rules.
fn apply_project_rule_options(
    rules: Vec<ProjectRuleBox>,
    config: &Config,
) -> Vec<ProjectRuleBox> {
    rules
        .into_iter()
        .map(|rule| {
            let Some(rc) = config.rules.get(rule.name()) else {
                return rule;
            };
            match rule.name() {
                "module-index" => {
                    let root = rc.get_str("modules_root", "");
                    if root.is_empty() {
                        rule
                    } else {
                        Box::new(ModuleIndex::new().modules_root(root))
                    }
                }
                "require-spec" => {
                    let roles = rc.get_str_array("roles");
                    if roles.is_empty() {
                        rule
                    } else {
                        Box::new(RequireSpec::new().roles(roles))
                    }
                }
                "app-layout" => {
                    let dirs = rc.get_str_array("required_dirs");
                    if dirs.is_empty() {
                        rule
                    } else {
                        Box::new(AppLayout::new().required_dirs(dirs))
                    }
                }
                _ => rule,
            }
        })
        .collect()
}

/// Selects rules from the registries by name or code.
fn filter_rules(names: &[&str]) -> (Vec<RuleBox>, Vec<ProjectRuleBox>) {
    let rules: Vec<RuleBox> = mean_lint_rules::all_rules()
        .into_iter()
        .filter(|r| names.contains(&r.name()) || names.contains(&r.code()))
        .collect();
    let project_rules: Vec<ProjectRuleBox> = mean_lint_rules::all_project_rules()
        .into_iter()
        .filter(|r| names.contains(&r.name()) || names.contains(&r.code()))
        .collect();

    let known: Vec<&str> = rules
        .iter()
        .flat_map(|r| [r.name(), r.code()])
        .chain(project_rules.iter().flat_map(|r| [r.name(), r.code()]))
        .collect();
    for name in names {
        if !known.contains(name) {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    (rules, project_rules)
}
