use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SearchError {
    #[error("Word search is empty")]
    #[diagnostic(code(day04::empty_input))]
    EmptyInput,

    #[error("Row {row} has {found} letters, expected {expected}")]
    #[diagnostic(
        code(day04::ragged_row),
        help("Every row of the word search must have the same width")
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

    #[error("Unexpected character {symbol:?} at line {line}, column {column}")]
    #[diagnostic(
        code(day04::invalid_letter),
        help("The puzzle holds ASCII letters only, one row per line")
    )]
    InvalidLetter {
        #[source_code]
        src: String,
        #[label("not a letter")]
        span: SourceSpan,
        symbol: char,
        line: u32,
        column: usize,
    },

    #[error("Cannot search for an empty word")]
    #[diagnostic(code(day04::empty_word))]
    EmptyWord,

    #[error("{word:?} has {length} letters, a cross needs an odd length")]
    #[diagnostic(
        code(day04::even_cross_word),
        help("Both arms of a cross share the middle letter of the word")
    )]
    EvenCrossWord { word: String, length: usize },
}
