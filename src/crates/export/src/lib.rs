//! Artifact renderers for the ATHAR proposal engine.
//!
//! Two deterministic, synchronous pipelines from a resolved
//! [`ProjectProposal`](athar_core::ProjectProposal):
//!
//! - [`document`]: proposal -> typed section/paragraph/table tree ->
//!   `.docx` bytes
//! - [`workbook`]: budget lines -> 2-D cell grid -> `.xlsx` bytes
//!
//! Both renderers are pure functions of their inputs: rendering the same
//! proposal twice yields the same tree and the same grid. Neither
//! aggregates, reorders or corrects anything - budget totals in
//! particular are copied verbatim. Callers that want a grand total sum
//! the `total` column themselves
//! ([`ProjectProposal::grand_total`](athar_core::ProjectProposal::grand_total)).

pub mod document;
pub mod error;
pub mod labels;
pub mod workbook;

pub use error::ExportError;
pub use labels::{BudgetLabels, DocumentLabels};

use athar_core::{Language, ProjectProposal};

/// A finished artifact: correct bytes plus the suggested filename. The
/// delivery mechanism (file write, download dialog) is the caller's.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Render the narrative document artifact for a resolved proposal.
pub fn render_document(
    proposal: &ProjectProposal,
    lang: Language,
) -> Result<Artifact, ExportError> {
    let labels = DocumentLabels::for_language(lang);
    let tree = document::build_document(proposal, &labels, lang.direction());
    let bytes = document::to_docx_bytes(&tree)?;
    Ok(Artifact {
        filename: document::document_filename(&proposal.title),
        bytes,
    })
}

/// Render the budget workbook artifact for a resolved proposal.
pub fn render_workbook(
    proposal: &ProjectProposal,
    lang: Language,
) -> Result<Artifact, ExportError> {
    let labels = BudgetLabels::for_language(lang);
    let grid = workbook::build_budget_grid(proposal, &labels);
    let bytes = workbook::to_xlsx_bytes(&grid)?;
    Ok(Artifact {
        filename: workbook::workbook_filename(&proposal.title),
        bytes,
    })
}
