use miette::Context;
use tracing::info;

use crate::garden::Garden;

/// Total fencing price where each region costs area × perimeter.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let garden = Garden::parse(input).context("Failed to read garden map")?;
    info!(regions = garden.regions().len(), "Pricing fences by perimeter");

    Ok(garden.price_by_perimeter().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
        assert_eq!("1930", process(input)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::small("AAAA\nBBCD\nBBCC\nEEEC", "140")]
    #[case::enclosed("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO", "772")]
    #[case::single("A", "4")]
    fn test_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_ragged_map() {
        assert!(process("AAA\nAA").is_err());
    }
}
