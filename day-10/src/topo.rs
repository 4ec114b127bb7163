use std::fmt;

use itertools::iproduct;
use tracing::debug;

use crate::error::TrailError;

pub mod constants {
    pub const TRAILHEAD: u8 = 0;
    pub const PEAK: u8 = 9;
}

use constants::*;

/// A passable cell of the map with its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    pub x: usize,
    pub y: usize,
    pub height: u8,
}

impl Node {
    pub fn is_trailhead(&self) -> bool {
        self.height == TRAILHEAD
    }

    pub fn is_peak(&self) -> bool {
        self.height == PEAK
    }
}

/// Rectangular height map; `None` cells are impassable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoMap {
    cells: Vec<Option<u8>>,
    xdim: usize,
    ydim: usize,
}

impl TopoMap {
    pub fn parse(input: &str) -> Result<Self, TrailError> {
        let source = input.trim_end();
        if source.is_empty() {
            return Err(TrailError::EmptyInput);
        }

        let rows = parser::parse_rows(source)?;
        let xdim = rows[0].len();

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != xdim {
                return Err(TrailError::RaggedRow {
                    src: source.to_string(),
                    span: (cells[0].position.location_offset(), cells.len()).into(),
                    row: row + 1,
                    expected: xdim,
                    found: cells.len(),
                });
            }
        }

        let ydim = rows.len();
        let cells = rows
            .into_iter()
            .flatten()
            .map(|cell| cell.height)
            .collect();

        debug!("Parsed topographic map {}x{}", xdim, ydim);
        Ok(Self { cells, xdim, ydim })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.xdim, self.ydim)
    }

    /// Height at `(x, y)`, `None` when impassable or off the map.
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.xdim || y >= self.ydim {
            return None;
        }
        self.cells[y * self.xdim + x]
    }

    pub fn row(&self, y: usize) -> Option<&[Option<u8>]> {
        (y < self.ydim).then(|| &self.cells[y * self.xdim..(y + 1) * self.xdim])
    }

    /// Every passable cell in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        iproduct!(0..self.ydim, 0..self.xdim)
            .filter_map(|(y, x)| self.get(x, y).map(|height| Node { x, y, height }))
    }
}

impl fmt::Display for TopoMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.ydim).filter_map(|y| self.row(y)) {
            for cell in row {
                match cell {
                    Some(height) => write!(f, "{height}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: parser module
mod parser {
    use nom::{
        character::complete::{line_ending, satisfy},
        multi::{many1, separated_list1},
        IResult, Parser,
    };
    use nom_locate::LocatedSpan;

    use crate::error::TrailError;

    type Span<'a> = LocatedSpan<&'a str>;

    const IMPASSABLE: char = '.';

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct LocatedCell<'a> {
        pub height: Option<u8>,
        pub position: Span<'a>,
    }

    fn parse_cell(input: Span) -> IResult<Span, LocatedCell> {
        satisfy(|c: char| c.is_ascii_digit() || c == IMPASSABLE)
            .map(|c| LocatedCell {
                height: c.to_digit(10).map(|digit| digit as u8),
                position: input,
            })
            .parse(input)
    }

    fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<LocatedCell>>> {
        separated_list1(line_ending, many1(parse_cell))(input)
    }

    pub(super) fn parse_rows(source: &str) -> Result<Vec<Vec<LocatedCell>>, TrailError> {
        match parse_grid(Span::new(source)) {
            Ok((rest, rows)) if rest.fragment().is_empty() => Ok(rows),
            Ok((rest, _)) => Err(invalid_height(source, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(invalid_height(source, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(TrailError::EmptyInput),
        }
    }

    fn invalid_height(source: &str, at: Span) -> TrailError {
        let symbol = at.fragment().chars().next().unwrap_or_default();
        TrailError::InvalidHeight {
            src: source.to_string(),
            span: (at.location_offset(), symbol.len_utf8()).into(),
            symbol,
            line: at.location_line(),
            column: at.get_utf8_column(),
        }
    }
}
// endregion
