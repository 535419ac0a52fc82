//! The spreadsheet renderer: budget lines -> 2-D grid -> `.xlsx` bytes.
//!
//! Row 0 carries the proposal title, row 1 the fixed column headers,
//! then one row per budget line in source order. Values are copied
//! verbatim - no aggregation, no rounding, no recomputation of `total`.

use crate::error::{ExportError, Result};
use crate::labels::BudgetLabels;
use athar_core::ProjectProposal;
use rust_xlsxwriter::Workbook;

/// Characters of the title kept for the workbook filename stem.
pub const SHEET_STEM_LEN: usize = 15;

/// Name of the single sheet.
pub const SHEET_NAME: &str = "Budget";

/// Number of columns in the budget grid.
pub const GRID_COLUMNS: usize = 10;

/// One cell of the grid. Missing optional fields become empty text, so
/// every row spans all columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

/// The workbook grid: `budget.len() + 2` rows of [`GRID_COLUMNS`] cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl BudgetGrid {
    /// Data rows only (everything below the title and header rows).
    pub fn data_rows(&self) -> &[Vec<Cell>] {
        &self.rows[2..]
    }
}

/// Build the budget grid for a resolved proposal.
///
/// Pure and deterministic: equal inputs yield an equal grid.
pub fn build_budget_grid(proposal: &ProjectProposal, labels: &BudgetLabels) -> BudgetGrid {
    let mut rows = Vec::with_capacity(proposal.budget.len() + 2);

    let mut title_row = vec![Cell::text(proposal.title.clone())];
    title_row.resize(GRID_COLUMNS, Cell::text(""));
    rows.push(title_row);

    rows.push(vec![
        Cell::text(labels.budget_code),
        Cell::text(labels.item),
        Cell::text(labels.monthly_cost),
        Cell::text(labels.allocation),
        Cell::text(labels.quantity),
        Cell::text(labels.unit),
        Cell::text(labels.frequency),
        Cell::text(labels.frequency_unit),
        Cell::text(labels.total),
        Cell::text(labels.description),
    ]);

    for item in &proposal.budget {
        rows.push(vec![
            Cell::text(item.budget_code.clone().unwrap_or_default()),
            Cell::text(item.item.clone()),
            Cell::Number(item.monthly_cost),
            Cell::Number(item.allocation),
            Cell::Number(item.quantity),
            Cell::text(item.unit.clone()),
            Cell::Number(item.frequency),
            Cell::text(item.frequency_unit.clone()),
            Cell::Number(item.total),
            Cell::text(item.description.clone().unwrap_or_default()),
        ]);
    }

    BudgetGrid { rows }
}

/// Serialize a budget grid to single-sheet `.xlsx` bytes.
pub fn to_xlsx_bytes(grid: &BudgetGrid) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| ExportError::Workbook(e.to_string()))?;

    for (row_index, row) in grid.rows.iter().enumerate() {
        for (col_index, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) if text.is_empty() => {}
                Cell::Text(text) => {
                    worksheet
                        .write_string(row_index as u32, col_index as u16, text)
                        .map_err(|e| ExportError::Workbook(e.to_string()))?;
                }
                Cell::Number(value) => {
                    worksheet
                        .write_number(row_index as u32, col_index as u16, *value)
                        .map_err(|e| ExportError::Workbook(e.to_string()))?;
                }
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Workbook(e.to_string()))
}

/// Filename stem: the first [`SHEET_STEM_LEN`] characters of the title,
/// unmodified (whitespace preserved).
pub fn workbook_stem(title: &str) -> String {
    title.chars().take(SHEET_STEM_LEN).collect()
}

/// Suggested filename for the workbook artifact.
pub fn workbook_filename(title: &str) -> String {
    format!("ATHAR_Budget_{}.xlsx", workbook_stem(title))
}
