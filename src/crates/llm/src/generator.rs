//! The contract seam: typed generation on top of any completion client.

use crate::client::{CompletionClient, CompletionRequest};
use crate::error::{LlmError, Result};
use crate::json::extract_json;
use crate::prompts;
use crate::providers::client_for;
use async_trait::async_trait;
use athar_core::{Credentials, Language, ProjectIdea, ProjectProposal, ProviderKind};
use tracing::debug;

/// The Provider Adapter contract.
///
/// Both calls are single-shot: one prompt, one network call, one parsed
/// entity. No conversational state is kept between calls and failures
/// propagate unchanged; whether to resubmit is the caller's decision.
#[async_trait]
pub trait ProposalModel: Send + Sync {
    /// Phase 1: explore a vision into a small batch of candidate ideas,
    /// in model output order.
    async fn generate_ideas(
        &self,
        vision: &str,
        country: &str,
        lang: Language,
    ) -> Result<Vec<ProjectIdea>>;

    /// Phase 2: expand one previously produced idea into a full
    /// proposal with a complete budget line sequence.
    async fn generate_proposal(
        &self,
        idea: &ProjectIdea,
        country: &str,
        lang: Language,
    ) -> Result<ProjectProposal>;
}

/// Structured-output generation against the selected backend.
///
/// Owns the boxed client chosen once from the credentials; every call
/// builds a prompt, issues one completion and parses the response into
/// the target entity.
pub struct Generator {
    client: Box<dyn CompletionClient>,
}

impl Generator {
    /// Build a generator for the active credentials, dispatching on the
    /// stored provider kind.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            client: client_for(credentials),
        }
    }

    /// Build a generator over an explicit client. Used by tests and by
    /// anything that already holds a configured client.
    pub fn with_client(client: Box<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// The backend this generator dispatches to.
    pub fn kind(&self) -> ProviderKind {
        self.client.kind()
    }
}

#[async_trait]
impl ProposalModel for Generator {
    async fn generate_ideas(
        &self,
        vision: &str,
        country: &str,
        lang: Language,
    ) -> Result<Vec<ProjectIdea>> {
        let request = CompletionRequest::new(
            prompts::IDEAS_SYSTEM_PROMPT,
            prompts::build_ideas_prompt(vision, country, lang),
        )
        .json()
        .with_temperature(0.7);

        let text = self.client.complete(request).await?;
        let ideas: Vec<ProjectIdea> = extract_json(&text)?;

        if ideas.is_empty() {
            return Err(LlmError::Schema(
                "model returned an empty idea batch".to_string(),
            ));
        }

        debug!(provider = %self.kind(), count = ideas.len(), "parsed idea batch");
        Ok(ideas)
    }

    async fn generate_proposal(
        &self,
        idea: &ProjectIdea,
        country: &str,
        lang: Language,
    ) -> Result<ProjectProposal> {
        let request = CompletionRequest::new(
            prompts::PROPOSAL_SYSTEM_PROMPT,
            prompts::build_proposal_prompt(idea, country, lang),
        )
        .json()
        .with_temperature(0.4)
        .with_max_tokens(8192);

        let text = self.client.complete(request).await?;
        let proposal: ProjectProposal = extract_json(&text)?;

        debug!(
            provider = %self.kind(),
            budget_lines = proposal.budget.len(),
            "parsed proposal"
        );
        Ok(proposal)
    }
}
