use miette::Context;
use tracing::info;

use crate::puzzle::WordSearch;
use crate::search::count_crosses;

pub const WORD: &str = "MAS";

/// Number of places where two copies of `word` cross on the diagonals.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, word: &str) -> miette::Result<String> {
    let search = WordSearch::parse(input).context("Failed to parse word search")?;
    info!(dimensions = ?search.dimensions(), "Searching for crosses");

    let count = count_crosses(&search, word).context("Failed to search for crosses")?;
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
        assert_eq!("9", process(input, WORD)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::plus_shape_ignored("XMX\nMAS\nXSX", "0")]
    #[case::shared_arms("MXMXM\nXAXAX\nSXSXS", "2")]
    fn test_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input, WORD)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_even_word() {
        assert!(process("MAS\nMAS\nMAS", "XMAS").is_err());
    }
}
