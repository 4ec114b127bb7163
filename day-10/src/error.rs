use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum TrailError {
    #[error("Topographic map is empty")]
    #[diagnostic(code(day10::empty_input))]
    EmptyInput,

    #[error("Row {row} has {found} cells, expected {expected}")]
    #[diagnostic(
        code(day10::ragged_row),
        help("The topographic map must be rectangular")
    )]
    RaggedRow {
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid height {symbol:?} at line {line}, column {column}")]
    #[diagnostic(
        code(day10::invalid_height),
        help("Heights are single digits 0-9, '.' marks an impassable cell")
    )]
    InvalidHeight {
        #[source_code]
        src: String,
        #[label("not a height")]
        span: SourceSpan,
        symbol: char,
        line: u32,
        column: usize,
    },
}
