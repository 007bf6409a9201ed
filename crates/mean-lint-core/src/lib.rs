//! # mean-lint-core
//!
//! Core framework for checking MEAN-stack front-end project trees against
//! team conventions.
//!
//! This crate provides the foundational traits and types for building
//! convention checkers. It includes:
//!
//! - [`Rule`] trait for per-file text-based rules
//! - [`ProjectRule`] trait for directory-shape rules
//! - [`Scanner`] for walking project trees
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//! - [`pattern`] for user-defined forbid-regex rules from TOML
//!
//! ## Example
//!
//! ```ignore
//! use mean_lint_core::{Analyzer, Rule, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./client")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! result.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod scanner;
mod types;

/// User-defined pattern rules from `[[patterns]]` config.
pub mod pattern;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, PatternConfig, RuleConfig, ScannerConfig};
pub use context::{FileContext, FileKind, ProjectContext};
pub use pattern::{PatternDef, PatternError, PatternRule};
pub use rule::{ProjectRule, ProjectRuleBox, Rule, RuleBox};
pub use scanner::{ScanError, Scanner};
pub use types::{Label, LintResult, Location, Replacement, Severity, Suggestion, Violation};
pub use utils::allowance::{AllowCheck, AllowState};
