use std::fmt;

use itertools::iproduct;
use tracing::debug;

use crate::error::GardenError;

/// A plot coordinate. Signed so that neighbours of edge plots can be
/// expressed and then rejected by [`Grid::is_valid`].
///
/// [`Grid::parse`] refuses maps whose dimensions do not fit in `i32`, so
/// every valid position converts to a `usize` index and back losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

/// Immutable, rectangular garden map stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    plots: Vec<char>,
}

impl Grid {
    /// Parses one row per line. Trailing line breaks are ignored, both `\n`
    /// and `\r\n` separate rows.
    ///
    /// # Errors
    /// * [`GardenError::EmptyInput`] if there is nothing to parse
    /// * [`GardenError::InvalidSymbol`] if a plot is not an ASCII letter or digit
    /// * [`GardenError::RaggedRow`] if rows differ in length
    /// * [`GardenError::TooLarge`] if a dimension does not fit in [`Position`]
    #[tracing::instrument(skip(input), fields(bytes = input.len()))]
    pub fn parse(input: &str) -> Result<Self, GardenError> {
        let source = input.trim_end();
        if source.is_empty() {
            return Err(GardenError::EmptyInput);
        }

        let rows = parser::parse_rows(source)?;
        let width = rows[0].len();

        if let Some((row, plots)) = rows
            .iter()
            .enumerate()
            .find(|(_, plots)| plots.len() != width)
        {
            let offset = plots[0].position.location_offset();
            return Err(GardenError::RaggedRow {
                src: source.to_string(),
                span: (offset, plots.len()).into(),
                row: row + 1,
                expected: width,
                found: plots.len(),
            });
        }

        let height = rows.len();
        check_dimensions(width, height)?;

        let plots: Vec<char> = rows
            .into_iter()
            .flatten()
            .map(|plot| plot.symbol)
            .collect();

        debug!(width, height, "parsed garden map");

        Ok(Self {
            width,
            height,
            plots,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_valid(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width
            && (position.y as usize) < self.height
    }

    pub fn get(&self, position: Position) -> Result<char, GardenError> {
        self.index(position)
            .map(|index| self.plots[index])
            .ok_or(GardenError::OutOfRange {
                x: position.x,
                y: position.y,
                width: self.width,
                height: self.height,
            })
    }

    /// Read-only view of row `y`.
    pub fn row(&self, y: usize) -> Option<&[char]> {
        (y < self.height).then(|| &self.plots[y * self.width..(y + 1) * self.width])
    }

    /// Every coordinate of the map in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| Position::new(x as i32, y as i32))
    }

    pub(crate) fn index(&self, position: Position) -> Option<usize> {
        self.is_valid(position)
            .then(|| position.y as usize * self.width + position.x as usize)
    }
}

/// Width and height must be addressable by an `i32` [`Position`].
fn check_dimensions(width: usize, height: usize) -> Result<(), GardenError> {
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(GardenError::TooLarge { width, height });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.plots.chunks(self.width) {
            for plot in row {
                write!(f, "{plot}")?;
            }
            writeln!(f)?;
        }
        Ok(())
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

    use crate::error::GardenError;

    type Span<'a> = LocatedSpan<&'a str>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct LocatedPlot<'a> {
        pub symbol: char,
        pub position: Span<'a>,
    }

    fn parse_plot(input: Span) -> IResult<Span, LocatedPlot> {
        satisfy(|c: char| c.is_ascii_alphanumeric())
            .map(|symbol| LocatedPlot {
                symbol,
                position: input,
            })
            .parse(input)
    }

    fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<LocatedPlot>>> {
        separated_list1(line_ending, many1(parse_plot))(input)
    }

    /// Parses the whole source, reporting the first byte that is not part of
    /// a row of plots.
    pub(super) fn parse_rows(source: &str) -> Result<Vec<Vec<LocatedPlot>>, GardenError> {
        match parse_grid(Span::new(source)) {
            Ok((rest, rows)) if rest.fragment().is_empty() => Ok(rows),
            Ok((rest, _)) => Err(invalid_symbol(source, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(invalid_symbol(source, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(GardenError::EmptyInput),
        }
    }

    fn invalid_symbol(source: &str, at: Span) -> GardenError {
        let symbol = at.fragment().chars().next().unwrap_or_default();
        GardenError::InvalidSymbol {
            src: source.to_string(),
            span: (at.location_offset(), symbol.len_utf8()).into(),
            symbol,
            line: at.location_line(),
            column: at.get_utf8_column(),
        }
    }
}
// endregion

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_grid() -> miette::Result<()> {
        let grid = Grid::parse("AB\nCD")?;

        assert_eq!((2, 2), grid.dimensions());
        assert_eq!('A', grid.get(Position::new(0, 0))?);
        assert_eq!('B', grid.get(Position::new(1, 0))?);
        assert_eq!('C', grid.get(Position::new(0, 1))?);
        assert_eq!('D', grid.get(Position::new(1, 1))?);
        Ok(())
    }

    #[test]
    fn test_parse_crlf_and_trailing_newline() -> miette::Result<()> {
        let grid = Grid::parse("AAB\r\nCC9\r\n")?;

        assert_eq!((3, 2), grid.dimensions());
        assert_eq!(Some(&['C', 'C', '9'][..]), grid.row(1));
        Ok(())
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank_lines("\n\n")]
    fn test_parse_empty(#[case] input: &str) {
        assert!(matches!(Grid::parse(input), Err(GardenError::EmptyInput)));
    }

    #[test]
    fn test_parse_ragged() {
        let result = Grid::parse("AAAA\nBBB\nCCCC");

        match result {
            Err(GardenError::RaggedRow {
                row,
                expected,
                found,
                span,
                ..
            }) => {
                assert_eq!(2, row);
                assert_eq!(4, expected);
                assert_eq!(3, found);
                assert_eq!(5, span.offset());
                assert_eq!(3, span.len());
            }
            other => panic!("expected a ragged row error, got {other:?}"),
        }
    }

    #[rstest]
    #[case::mid_row("AB\nC-", '-', 2, 2)]
    #[case::first_plot("#A\nBB", '#', 1, 1)]
    #[case::blank_row("AB\n\nCD", '\n', 1, 3)]
    fn test_parse_invalid_symbol(
        #[case] input: &str,
        #[case] expected_symbol: char,
        #[case] expected_line: u32,
        #[case] expected_column: usize,
    ) {
        match Grid::parse(input) {
            Err(GardenError::InvalidSymbol {
                symbol,
                line,
                column,
                ..
            }) => {
                assert_eq!(expected_symbol, symbol);
                assert_eq!(expected_line, line);
                assert_eq!(expected_column, column);
            }
            other => panic!("expected an invalid symbol error, got {other:?}"),
        }
    }

    #[rstest]
    #[case(0, 0, true)]
    #[case(2, 1, true)]
    #[case(3, 0, false)]
    #[case(0, 2, false)]
    #[case(-1, 0, false)]
    #[case(0, -1, false)]
    fn test_is_valid(#[case] x: i32, #[case] y: i32, #[case] valid: bool) -> miette::Result<()> {
        let grid = Grid::parse("ABC\nDEF")?;
        assert_eq!(valid, grid.is_valid(Position::new(x, y)));
        assert_eq!(valid, grid.get(Position::new(x, y)).is_ok());
        Ok(())
    }

    #[rstest]
    #[case(140, 140, true)]
    #[case(i32::MAX as usize, 1, true)]
    #[case(i32::MAX as usize + 1, 1, false)]
    #[case(1, i32::MAX as usize + 1, false)]
    fn test_check_dimensions(#[case] width: usize, #[case] height: usize, #[case] fits: bool) {
        let result = check_dimensions(width, height);

        assert_eq!(fits, result.is_ok());
        if !fits {
            assert!(matches!(result, Err(GardenError::TooLarge { .. })));
        }
    }

    #[test]
    fn test_get_out_of_range() -> miette::Result<()> {
        let grid = Grid::parse("ABC\nDEF")?;

        assert!(matches!(
            grid.get(Position::new(3, 1)),
            Err(GardenError::OutOfRange {
                x: 3,
                y: 1,
                width: 3,
                height: 2
            })
        ));
        Ok(())
    }

    #[test]
    fn test_row_view() -> miette::Result<()> {
        let grid = Grid::parse("ABC\nDEF")?;

        assert_eq!(Some(&['A', 'B', 'C'][..]), grid.row(0));
        assert_eq!(Some(&['D', 'E', 'F'][..]), grid.row(1));
        assert_eq!(None, grid.row(2));
        Ok(())
    }

    #[test]
    fn test_positions_row_major() -> miette::Result<()> {
        let grid = Grid::parse("AB\nCD\nEF")?;
        let positions: Vec<_> = grid.positions().collect();

        assert_eq!(6, positions.len());
        assert_eq!(Position::new(0, 0), positions[0]);
        assert_eq!(Position::new(1, 0), positions[1]);
        assert_eq!(Position::new(0, 1), positions[2]);
        assert_eq!(Position::new(1, 2), positions[5]);
        Ok(())
    }

    #[test]
    fn test_grid_display() -> miette::Result<()> {
        let grid = Grid::parse("AAB\nC1C")?;
        assert_eq!("AAB\nC1C\n", format!("{}", grid));
        Ok(())
    }
}
