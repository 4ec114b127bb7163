use miette::Context;
use tracing::{debug, info};

use crate::antinode::antinodes;
use crate::map::AntennaMap;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let map = AntennaMap::parse(input).context("Failed to parse antenna map")?;
    info!(dimensions = ?map.dimensions(), "Locating antinodes");

    let antinodes = antinodes(&map);
    debug!("Antinodes:\n{}", map.render(&antinodes));

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
        assert_eq!("14", process(input)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::two_antennas(
        "\
..........
..........
..........
....a.....
..........
.....a....
..........
..........
..........
..........",
        "2"
    )]
    #[case::three_antennas(
        "\
..........
..........
..........
....a.....
........a.
.....a....
..........
..........
..........
..........",
        "4"
    )]
    #[case::antinode_on_other_antenna(
        "\
..........
..........
..........
....a.....
........a.
.....a....
..........
......A...
..........
..........",
        "4"
    )]
    fn test_examples(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_ragged_map() {
        assert!(process("...\n..").is_err());
    }
}
