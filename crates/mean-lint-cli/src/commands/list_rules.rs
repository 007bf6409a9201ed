//! List rules command implementation.

use mean_lint_rules::{all_project_rules, all_rules};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nProject-wide rules:\n");
    for rule in all_project_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - all file rules plus ML101, ML102 (default)");
    println!("  strict       - adds ML103 and stricter severities");
    println!("  minimal      - ML001 and ML005 only (for gradual adoption)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  mean-lint check --rules no-important,file-naming");
    println!("  mean-lint check --rules ML001,ML005,ML101");
}
