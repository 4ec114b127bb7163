use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PatrolError {
    #[error("Lab map is empty")]
    #[diagnostic(code(day06::empty_input))]
    EmptyInput,

    #[error("Row {row} has {found} tiles, expected {expected}")]
    #[diagnostic(code(day06::ragged_row), help("The lab map must be rectangular"))]
    RaggedRow {
        #[source_code]
        src: String,
        #[label("this row")]
        span: SourceSpan,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unexpected tile {tile:?} at line {line}, column {column}")]
    #[diagnostic(
        code(day06::unexpected_tile),
        help("Tiles are '.' (floor), '#' (obstacle) or one of '^', '>', 'v', '<' for the guard")
    )]
    UnexpectedTile {
        #[source_code]
        src: String,
        #[label("unknown tile")]
        span: SourceSpan,
        tile: char,
        line: u32,
        column: usize,
    },

    #[error("No guard found on the lab map")]
    #[diagnostic(code(day06::missing_guard))]
    MissingGuard,

    #[error("More than one guard on the lab map")]
    #[diagnostic(code(day06::multiple_guards))]
    MultipleGuards {
        #[source_code]
        src: String,
        #[label("first guard")]
        first: SourceSpan,
        #[label("second guard")]
        second: SourceSpan,
    },

    #[error("The guard never leaves the lab, even without a new obstruction")]
    #[diagnostic(
        code(day06::trapped),
        help("Every obstruction would trivially create a loop on this map")
    )]
    Trapped,
}
