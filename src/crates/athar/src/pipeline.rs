//! The two-phase generation pipeline.
//!
//! Not a general state machine: an explicit three-state sequence.
//! Submitting a vision moves to `Ideas` from anywhere (discarding any
//! previous batch and proposal); selecting an idea moves from `Ideas` to
//! `Proposal`. No other transitions exist. Adapter failures propagate
//! unchanged and leave the state exactly as it was.

use crate::error::{AtharError, Result};
use athar_core::{Language, ProjectIdea, ProjectProposal};
use export::Artifact;
use llm::ProposalModel;
use tracing::debug;

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Nothing generated yet.
    Input,
    /// Phase 1 finished: a batch of candidates, in model output order.
    Ideas(Vec<ProjectIdea>),
    /// Phase 2 finished: one resolved proposal for the selected idea.
    Proposal {
        idea: ProjectIdea,
        proposal: ProjectProposal,
    },
}

/// The in-memory flow holder. One pipeline per user intent; the busy
/// gating during an outstanding call is the caller's concern.
#[derive(Debug, Default)]
pub struct Pipeline {
    state: FlowState,
}

impl Default for FlowState {
    fn default() -> Self {
        FlowState::Input
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Phase 1: explore a vision into a batch of candidate ideas.
    ///
    /// Valid from any state; a new vision discards the previous batch
    /// and proposal.
    pub async fn explore(
        &mut self,
        model: &dyn ProposalModel,
        vision: &str,
        country: &str,
        lang: Language,
    ) -> Result<()> {
        let ideas = model.generate_ideas(vision, country, lang).await?;
        debug!(count = ideas.len(), "idea batch resolved");
        self.state = FlowState::Ideas(ideas);
        Ok(())
    }

    /// Phase 2: expand the idea with the given id into a full proposal.
    ///
    /// Valid only while a batch is held.
    pub async fn expand(
        &mut self,
        model: &dyn ProposalModel,
        idea_id: &str,
        country: &str,
        lang: Language,
    ) -> Result<()> {
        let idea = match &self.state {
            FlowState::Ideas(ideas) => ideas
                .iter()
                .find(|idea| idea.id == idea_id)
                .cloned()
                .ok_or_else(|| AtharError::UnknownIdea(idea_id.to_string()))?,
            _ => return Err(AtharError::NoIdeaBatch),
        };

        let proposal = model.generate_proposal(&idea, country, lang).await?;
        debug!(title = %proposal.title, budget_lines = proposal.budget.len(), "proposal resolved");
        self.state = FlowState::Proposal { idea, proposal };
        Ok(())
    }

    /// The current batch; empty outside the `Ideas` state.
    pub fn ideas(&self) -> &[ProjectIdea] {
        match &self.state {
            FlowState::Ideas(ideas) => ideas,
            _ => &[],
        }
    }

    /// The resolved proposal. Refuses until phase 2 has completed - the
    /// renderers are never invoked without one.
    pub fn proposal(&self) -> Result<&ProjectProposal> {
        match &self.state {
            FlowState::Proposal { proposal, .. } => Ok(proposal),
            _ => Err(AtharError::ProposalNotReady),
        }
    }

    /// Render the narrative document artifact for the resolved proposal.
    pub fn export_document(&self, lang: Language) -> Result<Artifact> {
        Ok(export::render_document(self.proposal()?, lang)?)
    }

    /// Render the budget workbook artifact for the resolved proposal.
    pub fn export_workbook(&self, lang: Language) -> Result<Artifact> {
        Ok(export::render_workbook(self.proposal()?, lang)?)
    }
}
