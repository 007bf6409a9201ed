//! # mean-lint-rules
//!
//! Built-in convention rules for mean-lint.
//!
//! This crate provides the rules that check a MEAN front-end project against
//! the team's conventions: file naming, Angular 1.x patterns, SCSS hygiene,
//! markup hygiene, and project layout.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | ML001 | `file-naming` | Requires kebab-case names with role suffixes |
//! | ML002 | `di-array-annotation` | Requires array-annotated dependency injection |
//! | ML003 | `no-dom-in-controller` | Forbids DOM access in controllers |
//! | ML004 | `single-export` | Forbids reassigning `module.exports` |
//! | ML005 | `no-important` | Forbids `!important` in stylesheets |
//! | ML006 | `no-id-selector` | Forbids `#id` selectors in stylesheets |
//! | ML007 | `color-variables` | Requires hex colors to live in the variables file |
//! | ML008 | `no-inline-style` | Forbids `style=` attributes and `<style>` tags |
//! | ML009 | `spec-structure` | Requires describe/it structure in Jasmine specs |
//! | ML101 | `module-index` | Requires index.js in every module directory |
//! | ML102 | `require-spec` | Requires a sibling spec for testable artifacts |
//! | ML103 | `app-layout` | Requires the guide's top-level directories |
//!
//! ## Usage
//!
//! ```ignore
//! use mean_lint_core::Analyzer;
//! use mean_lint_rules::{FileNaming, NoImportant};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./client")
//!     .rule(FileNaming::new())
//!     .rule(NoImportant::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app_layout;
mod color_variables;
mod di_array_annotation;
mod file_naming;
mod module_index;
mod no_dom_in_controller;
mod no_id_selector;
mod no_important;
mod no_inline_style;
mod presets;
mod require_spec;
mod single_export;
mod spec_structure;

pub use app_layout::AppLayout;
pub use color_variables::ColorVariables;
pub use di_array_annotation::DiArrayAnnotation;
pub use file_naming::FileNaming;
pub use module_index::ModuleIndex;
pub use no_dom_in_controller::NoDomInController;
pub use no_id_selector::NoIdSelector;
pub use no_important::NoImportant;
pub use no_inline_style::NoInlineStyle;
pub use presets::{
    all_project_rules, all_rules, minimal_rules, recommended_project_rules, recommended_rules,
    strict_project_rules, strict_rules, Preset,
};
pub use require_spec::RequireSpec;
pub use single_export::SingleExport;
pub use spec_structure::SpecStructure;

/// Re-export core types for convenience.
pub use mean_lint_core::{ProjectRule, Rule, Severity, Violation};
