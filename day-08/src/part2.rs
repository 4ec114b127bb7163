use miette::Context;
use tracing::{debug, info};

use crate::antinode::resonant_antinodes;
use crate::map::AntennaMap;

/// Counts antinodes once resonant harmonics are taken into account: every
/// point in line with two antennas of a frequency.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let map = AntennaMap::parse(input).context("Failed to parse antenna map")?;
    info!(dimensions = ?map.dimensions(), "Locating resonant antinodes");

    let antinodes = resonant_antinodes(&map);
    debug!("Resonant antinodes:\n{}", map.render(&antinodes));

    Ok(antinodes.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        let input = "............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";
        assert_eq!("34", process(input)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::t_frequency(
        "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........",
        "9"
    )]
    #[case::lone_antenna("...\n.A.\n...", "0")]
    #[case::full_row("a.a..", "3")]
    fn test_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
