//! Prompt construction for the two generation phases.
//!
//! Every prompt instructs the backend to answer with a single JSON value
//! whose shape matches the target entity, so the adapter can parse the
//! response deterministically regardless of vendor.

use athar_core::{Language, ProjectIdea};

/// Number of candidate ideas requested per phase-1 batch.
pub const IDEAS_PER_BATCH: usize = 4;

/// System prompt for phase-1 idea exploration.
pub const IDEAS_SYSTEM_PROMPT: &str = r#"You are a senior programme designer at an international NGO. You turn a short development vision into concrete, fundable project concepts.

RULES:
1. Respond with ONLY a JSON array. No markdown, no commentary.
2. Return exactly the requested number of ideas.
3. Give every idea a short unique "id" (e.g. "idea-1", "idea-2").
4. Prefer a different "sector" for each idea (health, education, WASH, livelihoods, protection, ...). Duplicate sectors are acceptable only when the vision clearly demands it.
5. Keep each description to 2-3 sentences, specific to the country context."#;

/// System prompt for phase-2 proposal expansion.
pub const PROPOSAL_SYSTEM_PROMPT: &str = r#"You are a senior grants writer at an international NGO. You expand one selected project concept into a complete, donor-ready proposal with a detailed line-item budget.

RULES:
1. Respond with ONLY a JSON object. No markdown, no commentary.
2. Fill every field of the requested shape. Never invent extra fields.
3. Goals must be SMART; activities must each name a concrete output.
4. Budget lines: "total" is the cost of the whole line for the project duration, computed from monthly cost, allocation, quantity and frequency. Include realistic units and donor-style budget codes.
5. Amounts are plain numbers in USD, without currency symbols or separators."#;

/// Build the phase-1 user prompt.
pub fn build_ideas_prompt(vision: &str, country: &str, lang: Language) -> String {
    format!(
        r#"VISION: {vision}
COUNTRY: {country}

Propose {count} project ideas for this vision.

OUTPUT: a JSON array of exactly {count} objects, each shaped like:
{{
  "id": "idea-1",
  "sector": "...",
  "name": "...",
  "description": "...",
  "targetGroup": "..."
}}

Write every value in {language}."#,
        vision = vision,
        country = country,
        count = IDEAS_PER_BATCH,
        language = lang.english_name(),
    )
}

/// Build the phase-2 user prompt for one selected idea.
pub fn build_proposal_prompt(idea: &ProjectIdea, country: &str, lang: Language) -> String {
    format!(
        r#"SELECTED IDEA:
- name: {name}
- sector: {sector}
- description: {description}
- target group: {target_group}
COUNTRY: {country}

Expand this idea into a full proposal.

OUTPUT: one JSON object shaped like:
{{
  "title": "...",
  "executiveSummary": "...",
  "problemAnalysis": "...",
  "theoryOfChange": "...",
  "specificGoals": ["...", "..."],
  "swot": {{
    "strengths": ["..."],
    "weaknesses": ["..."],
    "opportunities": ["..."],
    "threats": ["..."]
  }},
  "activities": [
    {{"activity": "...", "details": "...", "output": "..."}}
  ],
  "mePlan": {{"indicators": ["...", "..."]}},
  "budget": [
    {{
      "budgetCode": "1.1",
      "item": "...",
      "monthlyCost": 0,
      "allocation": 1,
      "quantity": 1,
      "unit": "...",
      "frequency": 12,
      "frequencyUnit": "months",
      "total": 0,
      "description": "..."
    }}
  ]
}}

Write every value in {language}."#,
        name = idea.name,
        sector = idea.sector,
        description = idea.description,
        target_group = idea.target_group,
        country = country,
        language = lang.english_name(),
    )
}
