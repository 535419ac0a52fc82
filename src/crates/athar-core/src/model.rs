//! Generated entities: ideas, proposals and budget lines.
//!
//! These structs are the structured-output contract between the provider
//! adapter and the rest of the system. Phase 1 produces an ordered batch
//! of [`ProjectIdea`]; phase 2 produces one [`ProjectProposal`]. Field
//! order inside the sequences is meaningful and preserved end-to-end into
//! the exported artifacts.

use serde::{Deserialize, Serialize};

/// One candidate intervention produced by phase-1 generation.
///
/// Immutable once produced; `id` is unique within its batch and is how a
/// caller selects the idea to expand in phase 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub id: String,
    pub sector: String,
    pub name: String,
    pub description: String,
    pub target_group: String,
}

/// SWOT quadrants, each an ordered list of short statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// One row of the activity matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity: String,
    pub details: String,
    pub output: String,
}

/// Monitoring & evaluation plan: an ordered list of indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MePlan {
    pub indicators: Vec<String>,
}

/// One budget line.
///
/// `total` is supplied by the generation step and trusted as-is; the
/// renderers copy it verbatim and never recompute it from the other
/// numeric fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_code: Option<String>,
    pub item: String,
    pub monthly_cost: f64,
    /// Fraction of the cost charged to this project.
    pub allocation: f64,
    pub quantity: f64,
    pub unit: String,
    pub frequency: f64,
    pub frequency_unit: String,
    pub total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The fully expanded proposal produced by phase-2 generation.
///
/// The optional narrative fields deserialize as `None` when the model
/// omits them. Absence is distinct from an empty string: the renderers
/// still emit the section, with an empty body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProposal {
    pub title: String,
    pub executive_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theory_of_change: Option<String>,
    #[serde(default)]
    pub specific_goals: Vec<String>,
    #[serde(default)]
    pub swot: Swot,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub me_plan: MePlan,
    #[serde(default)]
    pub budget: Vec<BudgetItem>,
}

impl ProjectProposal {
    /// Display-only grand total: the sum of the supplied per-line totals.
    ///
    /// This is a caller-side convenience; no renderer aggregates.
    pub fn grand_total(&self) -> f64 {
        self.budget.iter().map(|item| item.total).sum()
    }
}
