use miette::Context;
use tracing::warn;

use crate::lab::Lab;
use crate::patrol::{walk, Patrol};

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lab = Lab::parse(input).context("Failed to parse lab map")?;

    let patrol = walk(&lab, None);
    if let Patrol::Looped(_) = patrol {
        warn!("Guard never leaves the lab, counting the cells of the loop");
    }

    Ok(patrol.visited().len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_process() -> miette::Result<()> {
        let input = "....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";
        assert_eq!("41", process(input)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::exits_immediately(".^.\n...", "1")]
    #[case::east("..>..", "3")]
    #[case::west("..<..", "3")]
    #[case::south(".v.\n...\n...", "3")]
    #[case::turns_at_wall(".#.\n.^.\n...", "2")]
    #[case::boxed_in(".#.\n#^#\n.#.", "1")]
    fn test_small_labs(#[case] input: &str, #[case] expected: &str) -> miette::Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }
}
