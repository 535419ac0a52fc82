//! The document renderer: proposal -> typed tree -> `.docx` bytes.
//!
//! The tree is the unit under test; serialization is a thin walk over it.
//! Section order is fixed, every section header is always emitted (absent
//! narrative fields become an empty body paragraph), and one direction
//! flag applies to every paragraph - there is no per-paragraph language
//! mixing.

use crate::error::{ExportError, Result};
use crate::labels::DocumentLabels;
use athar_core::{ProjectProposal, TextDirection};
use docx_rs::{
    AlignmentType, Docx, Paragraph, Run, ShdType, Shading, Table, TableCell, TableRow,
};
use std::io::Cursor;

/// Characters of the title kept for the document filename stem.
pub const DOC_STEM_LEN: usize = 30;

// Fixed document styling, independent of language (half-point run sizes
// and the house ink color).
const INK_COLOR: &str = "1E1B4B";
const HEADER_TEXT_COLOR: &str = "FFFFFF";
const TITLE_SIZE: usize = 48;
const HEADING_SIZE: usize = 28;
const BODY_SIZE: usize = 24;
const CELL_SIZE: usize = 20;

/// One block of the rendered document, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock {
    /// Numbered section header, always emitted.
    Heading(String),
    /// Section body paragraph; empty when the source field is absent.
    Body(String),
    /// One bulleted paragraph per specific goal.
    Bullet(String),
    /// The activity matrix.
    Table(DocTable),
}

/// A table block: one styled header row plus data rows in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The resolved document: centered title block plus the seven numbered
/// sections.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTree {
    pub title: String,
    pub direction: TextDirection,
    pub blocks: Vec<DocBlock>,
}

impl DocumentTree {
    /// Count of bullet paragraphs (one per specific goal).
    pub fn bullet_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, DocBlock::Bullet(_)))
            .count()
    }

    /// The activity matrix, if any table block was emitted.
    pub fn activity_table(&self) -> Option<&DocTable> {
        self.blocks.iter().find_map(|b| match b {
            DocBlock::Table(table) => Some(table),
            _ => None,
        })
    }
}

/// Build the document tree for a resolved proposal.
///
/// Pure and deterministic: equal inputs yield an equal tree.
pub fn build_document(
    proposal: &ProjectProposal,
    labels: &DocumentLabels,
    direction: TextDirection,
) -> DocumentTree {
    let mut blocks = Vec::new();

    blocks.push(DocBlock::Heading(format!("1. {}", labels.executive_summary)));
    blocks.push(DocBlock::Body(proposal.executive_summary.clone()));

    blocks.push(DocBlock::Heading(format!("2. {}", labels.problem_analysis)));
    blocks.push(DocBlock::Body(
        proposal.problem_analysis.clone().unwrap_or_default(),
    ));

    blocks.push(DocBlock::Heading(format!("3. {}", labels.theory_of_change)));
    blocks.push(DocBlock::Body(
        proposal.theory_of_change.clone().unwrap_or_default(),
    ));

    blocks.push(DocBlock::Heading(format!("4. {}", labels.specific_goals)));
    for goal in &proposal.specific_goals {
        blocks.push(DocBlock::Bullet(goal.clone()));
    }

    blocks.push(DocBlock::Heading(format!("5. {}", labels.swot)));
    blocks.push(DocBlock::Body(proposal.swot.strengths.join(", ")));

    blocks.push(DocBlock::Heading(format!("6. {}", labels.activity_matrix)));
    blocks.push(DocBlock::Table(DocTable {
        header: vec![
            labels.activity.to_string(),
            labels.details.to_string(),
            labels.output.to_string(),
        ],
        rows: proposal
            .activities
            .iter()
            .map(|a| vec![a.activity.clone(), a.details.clone(), a.output.clone()])
            .collect(),
    }));

    blocks.push(DocBlock::Heading(format!("7. {}", labels.me_plan)));
    blocks.push(DocBlock::Body(proposal.me_plan.indicators.join(" | ")));

    DocumentTree {
        title: proposal.title.clone(),
        direction,
        blocks,
    }
}

/// Serialize a document tree to `.docx` bytes.
pub fn to_docx_bytes(tree: &DocumentTree) -> Result<Vec<u8>> {
    let align = if tree.direction.is_rtl() {
        AlignmentType::Right
    } else {
        AlignmentType::Left
    };

    let mut docx = Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(
                Run::new()
                    .add_text(tree.title.as_str())
                    .bold()
                    .size(TITLE_SIZE)
                    .color(INK_COLOR),
            )
            .align(AlignmentType::Center),
    );

    for block in &tree.blocks {
        match block {
            DocBlock::Heading(text) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(
                            Run::new()
                                .add_text(text.as_str())
                                .bold()
                                .size(HEADING_SIZE)
                                .color(INK_COLOR),
                        )
                        .align(align),
                );
            }
            DocBlock::Body(text) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text(text.as_str()).size(BODY_SIZE))
                        .align(align),
                );
            }
            DocBlock::Bullet(text) => {
                docx = docx.add_paragraph(
                    Paragraph::new()
                        .add_run(
                            Run::new()
                                .add_text(format!("• {}", text))
                                .size(BODY_SIZE),
                        )
                        .align(align),
                );
            }
            DocBlock::Table(table) => {
                docx = docx.add_table(build_table(table, align));
            }
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn build_table(table: &DocTable, align: AlignmentType) -> Table {
    let header_row = TableRow::new(
        table
            .header
            .iter()
            .map(|text| {
                // Header cells keep a fixed style regardless of language.
                TableCell::new()
                    .add_paragraph(
                        Paragraph::new()
                            .add_run(
                                Run::new()
                                    .add_text(text.as_str())
                                    .bold()
                                    .color(HEADER_TEXT_COLOR),
                            )
                            .align(AlignmentType::Center),
                    )
                    .shading(Shading::new().shd_type(ShdType::Clear).fill(INK_COLOR))
            })
            .collect(),
    );

    let mut rows = vec![header_row];
    for data in &table.rows {
        rows.push(TableRow::new(
            data.iter()
                .map(|text| {
                    TableCell::new().add_paragraph(
                        Paragraph::new()
                            .add_run(Run::new().add_text(text.as_str()).size(CELL_SIZE))
                            .align(align),
                    )
                })
                .collect(),
        ));
    }

    Table::new(rows).set_grid(vec![3213, 3213, 3212])
}

/// Filename stem: the first [`DOC_STEM_LEN`] characters of the title,
/// then every whitespace run collapsed to a single underscore.
pub fn document_stem(title: &str) -> String {
    let truncated: String = title.chars().take(DOC_STEM_LEN).collect();

    let mut stem = String::with_capacity(truncated.len());
    let mut in_whitespace = false;
    for ch in truncated.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                stem.push('_');
                in_whitespace = true;
            }
        } else {
            stem.push(ch);
            in_whitespace = false;
        }
    }
    stem
}

/// Suggested filename for the document artifact.
pub fn document_filename(title: &str) -> String {
    format!("ATHAR_Proposal_{}.docx", document_stem(title))
}
