use miette::Context;
use tracing::info;

use crate::puzzle::WordSearch;
use crate::search::count_word;

pub const WORD: &str = "XMAS";

/// Number of times `word` appears in the puzzle in any of the eight
/// directions.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, word: &str) -> miette::Result<String> {
    let search = WordSearch::parse(input).context("Failed to parse word search")?;
    info!(dimensions = ?search.dimensions(), "Searching for words");

    let count = count_word(&search, word).context("Failed to search for word")?;
    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";
        assert_eq!("18", process(input, WORD)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::column("X\nM\nA\nS", "1")]
    #[case::upwards("S\nA\nM\nX", "1")]
    #[case::diagonal_both_ways("XOOS\nOMAO\nOMAO\nXOOS", "2")]
    #[case::nothing("XMAX\nSAMS", "0")]
    fn test_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input, WORD)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_digits() {
        assert!(process("XMAS\nXM4S", WORD).is_err());
    }
}
