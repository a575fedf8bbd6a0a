use thiserror::Error;

/// Input data does not have the shape a chart job needs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataShapeError {
    #[error(
        "required column '{logical}' not found (tried {tried:?}); available columns: {available:?}"
    )]
    MissingColumn {
        logical: String,
        tried: Vec<String>,
        available: Vec<String>,
    },

    #[error("row {row}: value '{value}' in column '{column}' is not a recognised timestamp")]
    InvalidTimestamp {
        row: usize,
        column: String,
        value: String,
    },

    #[error("workbook '{0}' does not contain any sheet")]
    EmptyWorkbook(String),

    #[error("sheet '{sheet}' has no header row")]
    MissingHeader { sheet: String },
}
