use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum AntennaError {
    #[error("Antenna map is empty")]
    #[diagnostic(code(day08::empty_input))]
    EmptyInput,

    #[error("Row {row} has {found} cells, expected {expected}")]
    #[diagnostic(code(day08::ragged_row), help("The antenna map must be rectangular"))]
    RaggedRow {
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected symbol {symbol:?} at line {line}, column {column}")]
    #[diagnostic(
        code(day08::parse_error),
        help("Input must contain only dots (.), digits (0-9), or letters (a-z, A-Z)")
    )]
    InvalidSymbol {
        #[source_code]
        src: String,
        #[label("Parse error occurred here")]
        span: SourceSpan,
        symbol: char,
        line: u32,
        column: usize,
    },
}
