use miette::Context;
use tracing::{debug, info};

use crate::formation::{positions_at, tightest_formation};
use crate::lobby::Lobby;
use crate::robot::parse_robots;

/// Seconds until the robots gather into their tightest formation, which is
/// where the picture appears.
#[tracing::instrument(skip(input))]
pub fn process(input: &str, lobby: Lobby) -> miette::Result<String> {
    let robots = parse_robots(input, lobby).context("Failed to parse robots")?;
    info!(
        robots = robots.len(),
        period = lobby.period(),
        "Searching for the tightest formation"
    );

    let seconds = tightest_formation(&robots, lobby);
    debug!(
        "Formation after {seconds}s:\n{}",
        lobby.render(&positions_at(&robots, lobby, seconds))
    );

    Ok(seconds.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test_log::test]
    fn test_process() -> miette::Result<()> {
        let lobby = Lobby::new(11, 7)?;

        // three robots that only ever share a tile at t=23
        let input = [IVec2::new(1, 1), IVec2::new(2, 3), IVec2::new(-4, 2)]
            .into_iter()
            .map(|velocity| {
                let start = lobby.wrap((IVec2::new(8, 1) - velocity * 23).as_i64vec2());
                format!("p={},{} v={},{}", start.x, start.y, velocity.x, velocity.y)
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!("23", process(&input, lobby)?);
        Ok(())
    }

    #[test]
    fn test_process_stationary_robots() -> miette::Result<()> {
        let lobby = Lobby::new(11, 7)?;
        assert_eq!("0", process("p=1,1 v=0,0\np=9,5 v=0,0", lobby)?);
        Ok(())
    }
}
