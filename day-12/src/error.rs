use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GardenError {
    #[error("Garden map is empty")]
    #[diagnostic(
        code(day12::empty_input),
        help("Provide at least one row of plot symbols")
    )]
    EmptyInput,

    #[error("Row {row} has {found} plots, expected {expected}")]
    #[diagnostic(
        code(day12::ragged_row),
        help("Every row of the garden map must have the same width")
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

    #[error("Unexpected symbol {symbol:?} at line {line}, column {column}")]
    #[diagnostic(
        code(day12::invalid_symbol),
        help("Plots are marked with ASCII letters or digits, one row per line")
    )]
    InvalidSymbol {
        #[source_code]
        src: String,
        #[label("not a plot")]
        span: SourceSpan,
        symbol: char,
        line: u32,
        column: usize,
    },

    #[error("Garden map of {width}x{height} plots is too large")]
    #[diagnostic(
        code(day12::too_large),
        help("Both dimensions must fit in a signed 32-bit coordinate")
    )]
    TooLarge { width: usize, height: usize },

    #[error("Position ({x}, {y}) is outside the {width}x{height} garden")]
    #[diagnostic(code(day12::out_of_range))]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}
