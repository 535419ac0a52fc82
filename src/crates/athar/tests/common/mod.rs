//! Shared test fixtures: mock adapters and canned entities.

use async_trait::async_trait;
use athar_core::{
    Activity, BudgetItem, Language, MePlan, ProjectIdea, ProjectProposal, Swot,
};
use llm::{LlmError, ProposalModel};

/// Adapter stand-in that answers with canned entities.
pub struct AcceptingModel;

#[async_trait]
impl ProposalModel for AcceptingModel {
    async fn generate_ideas(
        &self,
        _vision: &str,
        _country: &str,
        _lang: Language,
    ) -> llm::Result<Vec<ProjectIdea>> {
        Ok(idea_batch())
    }

    async fn generate_proposal(
        &self,
        idea: &ProjectIdea,
        _country: &str,
        _lang: Language,
    ) -> llm::Result<ProjectProposal> {
        Ok(proposal_for(idea))
    }
}

/// Adapter stand-in that fails every call with a fixed message.
pub struct RejectingModel {
    pub message: &'static str,
}

#[async_trait]
impl ProposalModel for RejectingModel {
    async fn generate_ideas(
        &self,
        _vision: &str,
        _country: &str,
        _lang: Language,
    ) -> llm::Result<Vec<ProjectIdea>> {
        Err(LlmError::Authentication(self.message.to_string()))
    }

    async fn generate_proposal(
        &self,
        _idea: &ProjectIdea,
        _country: &str,
        _lang: Language,
    ) -> llm::Result<ProjectProposal> {
        Err(LlmError::Authentication(self.message.to_string()))
    }
}

pub fn idea_batch() -> Vec<ProjectIdea> {
    vec![
        ProjectIdea {
            id: "idea-1".to_string(),
            sector: "WASH".to_string(),
            name: "Village wells".to_string(),
            description: "Rehabilitate wells".to_string(),
            target_group: "Rural households".to_string(),
        },
        ProjectIdea {
            id: "idea-2".to_string(),
            sector: "Education".to_string(),
            name: "School meals".to_string(),
            description: "Daily meals for pupils".to_string(),
            target_group: "Primary pupils".to_string(),
        },
    ]
}

pub fn proposal_for(idea: &ProjectIdea) -> ProjectProposal {
    ProjectProposal {
        title: format!("{} Programme", idea.name),
        executive_summary: "Summary".to_string(),
        problem_analysis: Some("Problem".to_string()),
        theory_of_change: None,
        specific_goals: vec!["G1".to_string(), "G2".to_string()],
        swot: Swot {
            strengths: vec!["strength".to_string()],
            ..Default::default()
        },
        activities: vec![Activity {
            activity: "A1".to_string(),
            details: "D1".to_string(),
            output: "O1".to_string(),
        }],
        me_plan: MePlan {
            indicators: vec!["I1".to_string()],
        },
        budget: vec![BudgetItem {
            budget_code: Some("1.1".to_string()),
            item: "Coordinator".to_string(),
            monthly_cost: 1000.0,
            allocation: 0.5,
            quantity: 1.0,
            unit: "person".to_string(),
            frequency: 12.0,
            frequency_unit: "months".to_string(),
            total: 6000.0,
            description: None,
        }],
    }
}
