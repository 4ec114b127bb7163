use std::fmt;

use tracing::debug;

use crate::error::PatrolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    #[default]
    North, // ^
    South, // v
    East,  // >
    West,  // <
}

impl Direction {
    pub fn turn_right(&self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '^' => Some(Self::North),
            'v' => Some(Self::South),
            '>' => Some(Self::East),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    fn glyph(&self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'v',
            Self::East => '>',
            Self::West => '<',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: usize,
    pub y: usize,
}

impl Location {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Where the guard stands and which way they face. Two equal guards mean the
/// patrol has reached the same state twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Guard {
    pub location: Location,
    pub direction: Direction,
}

impl Guard {
    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }
}

const OBSTACLE: char = '#';
const FLOOR: char = '.';

/// The lab floor plan with the guard's starting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lab {
    obstacles: Vec<bool>,
    xdim: usize,
    ydim: usize,
    guard: Guard,
}

impl Lab {
    pub fn parse(input: &str) -> Result<Self, PatrolError> {
        let source = input.trim_end();
        if source.is_empty() {
            return Err(PatrolError::EmptyInput);
        }

        let rows = parser::parse_rows(source)?;
        let xdim = rows[0].len();
        let ydim = rows.len();

        let mut obstacles = Vec::with_capacity(xdim * ydim);
        let mut guard: Option<(Guard, usize)> = None;

        for (y, tiles) in rows.iter().enumerate() {
            if tiles.len() != xdim {
                return Err(PatrolError::RaggedRow {
                    src: source.to_string(),
                    span: (tiles[0].position.location_offset(), tiles.len()).into(),
                    row: y + 1,
                    expected: xdim,
                    found: tiles.len(),
                });
            }

            for (x, tile) in tiles.iter().enumerate() {
                obstacles.push(tile.glyph == OBSTACLE);

                let Some(direction) = Direction::from_glyph(tile.glyph) else {
                    continue;
                };

                let offset = tile.position.location_offset();
                if let Some((_, first)) = guard {
                    return Err(PatrolError::MultipleGuards {
                        src: source.to_string(),
                        first: (first, 1).into(),
                        second: (offset, 1).into(),
                    });
                }

                guard = Some((
                    Guard {
                        location: Location::new(x, y),
                        direction,
                    },
                    offset,
                ));
            }
        }

        let (guard, _) = guard.ok_or(PatrolError::MissingGuard)?;
        debug!(xdim, ydim, ?guard, "parsed lab");

        Ok(Self {
            obstacles,
            xdim,
            ydim,
            guard,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }

    pub fn guard(&self) -> Guard {
        self.guard
    }

    pub fn is_obstacle(&self, location: Location) -> bool {
        location.x < self.xdim
            && location.y < self.ydim
            && self.obstacles[location.y * self.xdim + location.x]
    }

    /// The cell in front of the guard, or `None` if the next step leaves the lab.
    pub fn ahead(&self, guard: &Guard) -> Option<Location> {
        let Location { x, y } = guard.location;
        let next = match guard.direction {
            Direction::North => Location::new(x, y.checked_sub(1)?),
            Direction::South => Location::new(x, y + 1),
            Direction::East => Location::new(x + 1, y),
            Direction::West => Location::new(x.checked_sub(1)?, y),
        };

        (next.x < self.xdim && next.y < self.ydim).then_some(next)
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.ydim {
            for x in 0..self.xdim {
                let location = Location::new(x, y);
                if location == self.guard.location {
                    write!(f, "{}", self.guard.direction.glyph())?;
                } else if self.is_obstacle(location) {
                    write!(f, "{OBSTACLE}")?;
                } else {
                    write!(f, "{FLOOR}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: nom parser
mod parser {
    use nom::{
        character::complete::{line_ending, one_of},
        multi::{many1, separated_list1},
        IResult, Parser,
    };
    use nom_locate::LocatedSpan;

    use crate::error::PatrolError;

    type Span<'a> = LocatedSpan<&'a str>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct LocatedTile<'a> {
        pub glyph: char,
        pub position: Span<'a>,
    }

    fn parse_tile(input: Span) -> IResult<Span, LocatedTile> {
        one_of(".#^>v<")
            .map(|glyph| LocatedTile {
                glyph,
                position: input,
            })
            .parse(input)
    }

    fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<LocatedTile>>> {
        separated_list1(line_ending, many1(parse_tile))(input)
    }

    pub(super) fn parse_rows(source: &str) -> Result<Vec<Vec<LocatedTile>>, PatrolError> {
        match parse_grid(Span::new(source)) {
            Ok((rest, rows)) if rest.fragment().is_empty() => Ok(rows),
            Ok((rest, _)) => Err(unexpected_tile(source, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(unexpected_tile(source, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(PatrolError::EmptyInput),
        }
    }

    fn unexpected_tile(source: &str, at: Span) -> PatrolError {
        let tile = at.fragment().chars().next().unwrap_or_default();
        PatrolError::UnexpectedTile {
            src: source.to_string(),
            span: (at.location_offset(), tile.len_utf8()).into(),
            tile,
            line: at.location_line(),
            column: at.get_utf8_column(),
        }
    }
}
// endregion
