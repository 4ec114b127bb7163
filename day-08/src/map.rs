use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use crate::error::AntennaError;

pub const EMPTY: char = '.';
pub const ANTINODE: char = '#';

/// A cell on the map. Signed, since antinodes can fall off the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: isize,
    pub y: isize,
}

impl Location {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }
}

/// Antenna positions grouped by frequency. Frequencies are kept sorted so
/// that iteration and rendering are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntennaMap {
    xdim: usize,
    ydim: usize,
    antennas: BTreeMap<char, Vec<Location>>,
}

impl AntennaMap {
    #[tracing::instrument(skip(input), fields(bytes = input.len()))]
    pub fn parse(input: &str) -> Result<Self, AntennaError> {
        let source = input.trim_end();
        if source.is_empty() {
            return Err(AntennaError::EmptyInput);
        }

        let rows = parser::parse_rows(source)?;
        let xdim = rows[0].len();
        let mut antennas: BTreeMap<char, Vec<Location>> = BTreeMap::new();

        for (y, cells) in rows.iter().enumerate() {
            if cells.len() != xdim {
                return Err(AntennaError::RaggedRow {
                    src: source.to_string(),
                    span: (cells[0].position.location_offset(), cells.len()).into(),
                    row: y + 1,
                    expected: xdim,
                    found: cells.len(),
                });
            }

            for (x, cell) in cells.iter().enumerate() {
                if cell.character != EMPTY {
                    antennas
                        .entry(cell.character)
                        .or_default()
                        .push(Location::new(x as isize, y as isize));
                }
            }
        }

        let ydim = rows.len();
        debug!(xdim, ydim, frequencies = antennas.len(), "parsed antenna map");

        Ok(Self {
            xdim,
            ydim,
            antennas,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }

    pub fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as usize) < self.xdim
            && (location.y as usize) < self.ydim
    }

    /// Every frequency with the antennas tuned to it.
    pub fn frequencies(&self) -> impl Iterator<Item = (char, &[Location])> {
        self.antennas
            .iter()
            .map(|(&frequency, antennas)| (frequency, antennas.as_slice()))
    }

    /// Draws the map with `#` on every antinode that is not covered by an
    /// antenna.
    pub fn render(&self, antinodes: &HashSet<Location>) -> String {
        let mut cells = vec![vec![EMPTY; self.xdim]; self.ydim];

        for location in antinodes.iter().filter(|&&location| self.contains(location)) {
            cells[location.y as usize][location.x as usize] = ANTINODE;
        }
        for (frequency, antennas) in self.frequencies() {
            for location in antennas {
                cells[location.y as usize][location.x as usize] = frequency;
            }
        }

        cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .join("\n")
    }
}

// region: nom parser
mod parser {
    use nom::{
        character::complete::{line_ending, satisfy},
        multi::{many1, separated_list1},
        IResult, Parser,
    };
    use nom_locate::LocatedSpan;

    use super::EMPTY;
    use crate::error::AntennaError;

    type CharSpan<'a> = LocatedSpan<&'a str>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(super) struct LocatedChar<'a> {
        pub character: char,
        pub position: CharSpan<'a>,
    }

    fn parse_alphanumeric(input: CharSpan) -> IResult<CharSpan, LocatedChar> {
        satisfy(|c: char| c.is_ascii_alphanumeric() || c == EMPTY)
            .map(|c| LocatedChar {
                character: c,
                position: input,
            })
            .parse(input)
    }

    fn parse_grid(input: CharSpan) -> IResult<CharSpan, Vec<Vec<LocatedChar>>> {
        separated_list1(line_ending, many1(parse_alphanumeric))(input)
    }

    pub(super) fn parse_rows(source: &str) -> Result<Vec<Vec<LocatedChar>>, AntennaError> {
        match parse_grid(CharSpan::new(source)) {
            Ok((rest, rows)) if rest.fragment().is_empty() => Ok(rows),
            Ok((rest, _)) => Err(invalid_symbol(source, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(invalid_symbol(source, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(AntennaError::EmptyInput),
        }
    }

    fn invalid_symbol(source: &str, at: CharSpan) -> AntennaError {
        let symbol = at.fragment().chars().next().unwrap_or_default();
        AntennaError::InvalidSymbol {
            src: source.to_string(),
            span: (at.location_offset(), symbol.len_utf8()).into(),
            symbol,
            line: at.location_line(),
            column: at.get_utf8_column(),
        }
    }
}
// endregion
