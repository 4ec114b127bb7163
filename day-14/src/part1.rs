use miette::Context;
use tracing::info;

use crate::formation::positions_at;
use crate::lobby::Lobby;
use crate::robot::parse_robots;

pub const SECONDS: usize = 100;

/// Safety factor of the lobby after `seconds` of patrolling.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, lobby: Lobby, seconds: usize) -> miette::Result<String> {
    let robots = parse_robots(input, lobby).context("Failed to parse robots")?;
    info!(robots = robots.len(), "Simulating robots");

    let positions = positions_at(&robots, lobby, seconds);
    Ok(lobby.safety_factor(positions).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = "\
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3";

    #[test]
    fn test_process() -> miette::Result<()> {
        let lobby = Lobby::new(11, 7)?;
        assert_eq!("12", process(SAMPLE, lobby, SECONDS)?);
        Ok(())
    }

    #[rstest]
    #[test_log::test]
    #[case::one_robot_per_quadrant("p=0,0 v=0,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=0,0", 0, "1")]
    #[case::midline_robot_ignored("p=0,0 v=0,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=0,0\np=5,2 v=0,0", 0, "1")]
    #[case::walks_onto_midline("p=0,0 v=1,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=0,0", 5, "0")]
    #[case::wraps_around("p=0,0 v=-1,-1\np=1,1 v=0,0\np=10,0 v=0,0\np=0,6 v=0,0\np=10,6 v=0,0", 1, "2")]
    fn test_small_lobby(
        #[case] input: &str,
        #[case] seconds: usize,
        #[case] expected: &str,
    ) -> miette::Result<()> {
        let lobby = Lobby::new(11, 7)?;
        assert_eq!(expected, process(input, lobby, seconds)?);
        Ok(())
    }

    #[test]
    fn test_process_rejects_garbage() {
        assert!(process("p=1,2", Lobby::default(), SECONDS).is_err());
    }
}
