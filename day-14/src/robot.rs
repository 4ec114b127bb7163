use glam::{I64Vec2, IVec2};
use tracing::debug;

use crate::error::RobotError;
use crate::lobby::Lobby;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub position: IVec2,
    pub velocity: IVec2,
}

impl Robot {
    pub fn new(position: IVec2, velocity: IVec2) -> Self {
        Self { position, velocity }
    }

    /// Position after `seconds`, without simulating each tick.
    ///
    /// Worked in 64-bit: the wrapped velocity and the reduced elapsed time
    /// are each below the lobby size, so their product can exceed `i32`.
    pub fn position_after(&self, seconds: usize, lobby: Lobby) -> IVec2 {
        let size = lobby.size().as_i64vec2();
        let elapsed = I64Vec2::new(
            (seconds % lobby.width() as usize) as i64,
            (seconds % lobby.height() as usize) as i64,
        );
        let velocity = self.velocity.as_i64vec2().rem_euclid(size);

        lobby.wrap(self.position.as_i64vec2() + velocity * elapsed)
    }
}

/// Parses one robot per line and checks that each starts inside `lobby`.
#[tracing::instrument(skip(input))]
pub fn parse_robots(input: &str, lobby: Lobby) -> Result<Vec<Robot>, RobotError> {
    let source = input.trim_end();
    if source.is_empty() {
        return Err(RobotError::EmptyInput);
    }

    let robots = parser::parse_lines(source)?;

    if let Some((line, robot)) = robots
        .iter()
        .enumerate()
        .find(|(_, robot)| !lobby.contains(robot.position))
    {
        return Err(RobotError::OutsideLobby {
            line: line + 1,
            x: robot.position.x,
            y: robot.position.y,
            width: lobby.width(),
            height: lobby.height(),
        });
    }

    debug!(robots = robots.len(), "parsed robots");
    Ok(robots)
}

// region: nom parser
mod parser {
    use glam::IVec2;
    use nom::{
        bytes::complete::tag,
        character::complete::{i32, line_ending, space1},
        sequence::{preceded, separated_pair, tuple},
        IResult, Parser,
    };
    use nom_locate::LocatedSpan;

    use super::Robot;
    use crate::error::RobotError;

    type Span<'a> = LocatedSpan<&'a str>;

    fn parse_vector(input: Span) -> IResult<Span, IVec2> {
        separated_pair(i32, tag(","), i32)
            .map(|(x, y)| IVec2::new(x, y))
            .parse(input)
    }

    fn parse_robot(input: Span) -> IResult<Span, Robot> {
        tuple((
            preceded(tag("p="), parse_vector),
            preceded(tuple((space1, tag("v="))), parse_vector),
        ))
        .map(|(position, velocity)| Robot::new(position, velocity))
        .parse(input)
    }

    /// Parses robots line by line so that a failure is reported on the line
    /// it happens on.
    pub(super) fn parse_lines(source: &str) -> Result<Vec<Robot>, RobotError> {
        let mut robots = Vec::new();
        let mut input = Span::new(source);

        loop {
            let (rest, robot) = parse_robot(input).map_err(|e| failure(source, e))?;
            robots.push(robot);

            if rest.fragment().is_empty() {
                return Ok(robots);
            }

            let (rest, _) = line_ending(rest).map_err(|e| failure(source, e))?;
            input = rest;
        }
    }

    fn failure(source: &str, err: nom::Err<nom::error::Error<Span>>) -> RobotError {
        match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => RobotError::Parse {
                src: source.to_string(),
                span: e.input.location_offset().into(),
                line: e.input.location_line(),
            },
            nom::Err::Incomplete(_) => RobotError::Parse {
                src: source.to_string(),
                span: source.len().into(),
                line: source.lines().count() as u32,
            },
        }
    }
}
// endregion
