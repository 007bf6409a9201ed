//! Rule presets for common configurations.

use crate::{
    AppLayout, ColorVariables, DiArrayAnnotation, FileNaming, ModuleIndex, NoDomInController,
    NoIdSelector, NoImportant, NoInlineStyle, RequireSpec, SingleExport, SpecStructure,
};
use mean_lint_core::{ProjectRuleBox, RuleBox, Severity};

/// Preset configurations for mean-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules for maximum conformance.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Parses a preset name from config.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Returns the per-file rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Returns the project-wide rules for this preset.
    #[must_use]
    pub fn project_rules(self) -> Vec<ProjectRuleBox> {
        match self {
            Self::Recommended => recommended_project_rules(),
            Self::Strict => strict_project_rules(),
            Self::Minimal => vec![],
        }
    }
}

/// Returns the recommended set of per-file rules.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FileNaming::new()),
        Box::new(DiArrayAnnotation::new()),
        Box::new(NoDomInController::new()),
        Box::new(SingleExport::new()),
        Box::new(NoImportant::new()),
        Box::new(NoIdSelector::new()),
        Box::new(ColorVariables::new()),
        Box::new(NoInlineStyle::new()),
        Box::new(SpecStructure::new()),
    ]
}

/// Returns the recommended set of project-wide rules.
#[must_use]
pub fn recommended_project_rules() -> Vec<ProjectRuleBox> {
    vec![Box::new(ModuleIndex::new()), Box::new(RequireSpec::new())]
}

/// Returns the strict set of per-file rules.
///
/// Like recommended, but the palette rule escalates to error.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FileNaming::new()),
        Box::new(DiArrayAnnotation::new()),
        Box::new(NoDomInController::new()),
        Box::new(SingleExport::new()),
        Box::new(NoImportant::new()),
        Box::new(NoIdSelector::new()),
        Box::new(ColorVariables::new().severity(Severity::Error)),
        Box::new(NoInlineStyle::new()),
        Box::new(SpecStructure::new()),
    ]
}

/// Returns the strict set of project-wide rules.
///
/// Adds the layout check; every rule reports at error severity.
#[must_use]
pub fn strict_project_rules() -> Vec<ProjectRuleBox> {
    vec![
        Box::new(ModuleIndex::new()),
        Box::new(RequireSpec::new().severity(Severity::Error)),
        Box::new(AppLayout::new().severity(Severity::Error)),
    ]
}

/// Returns the minimal set of per-file rules.
///
/// For gradual adoption: naming and the single worst stylesheet habit.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(FileNaming::new()), Box::new(NoImportant::new())]
}

/// Returns all available per-file rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(FileNaming::new()),
        Box::new(DiArrayAnnotation::new()),
        Box::new(NoDomInController::new()),
        Box::new(SingleExport::new()),
        Box::new(NoImportant::new()),
        Box::new(NoIdSelector::new()),
        Box::new(ColorVariables::new()),
        Box::new(NoInlineStyle::new()),
        Box::new(SpecStructure::new()),
    ]
}

/// Returns all available project-wide rules.
#[must_use]
pub fn all_project_rules() -> Vec<ProjectRuleBox> {
    vec![
        Box::new(ModuleIndex::new()),
        Box::new(RequireSpec::new()),
        Box::new(AppLayout::new()),
    ]
}
