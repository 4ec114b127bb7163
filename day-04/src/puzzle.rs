use std::fmt;

use tracing::debug;

use crate::error::SearchError;

/// The four straight lines a word can lie along. Each is read in one
/// direction only, so a backwards word is found by reversing the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,          // →
    Column,       // ↓
    Diagonal,     // ↘
    AntiDiagonal, // ↙
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Row,
        Orientation::Column,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Self::Row => (1, 0),
            Self::Column => (0, 1),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (-1, 1),
        }
    }
}

/// Rectangular letter matrix stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearch {
    width: usize,
    height: usize,
    letters: Vec<u8>,
}

impl WordSearch {
    #[tracing::instrument(skip(input), fields(bytes = input.len()))]
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let source = input.trim_end();
        if source.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        let rows = parser::parse_rows(source)?;
        let width = rows[0].len();

        if let Some((row, letters)) = rows
            .iter()
            .enumerate()
            .find(|(_, letters)| letters.len() != width)
        {
            return Err(SearchError::RaggedRow {
                src: source.to_string(),
                span: (letters[0].position.location_offset(), letters.len()).into(),
                row: row + 1,
                expected: width,
                found: letters.len(),
            });
        }

        let height = rows.len();
        let letters = rows
            .into_iter()
            .flatten()
            .map(|letter| letter.letter)
            .collect();

        debug!(width, height, "parsed word search");
        Ok(Self {
            width,
            height,
            letters,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width && y < self.height).then(|| self.letters[y * self.width + x])
    }

    /// Every complete line of the matrix along `orientation`, each read from
    /// its first cell to its last.
    pub fn lines(&self, orientation: Orientation) -> Vec<Vec<u8>> {
        let top = (0..self.width).map(|x| (x, 0));
        let starts: Vec<(usize, usize)> = match orientation {
            Orientation::Row => (0..self.height).map(|y| (0, y)).collect(),
            Orientation::Column => top.collect(),
            Orientation::Diagonal => top.chain((1..self.height).map(|y| (0, y))).collect(),
            Orientation::AntiDiagonal => top
                .chain((1..self.height).map(|y| (self.width - 1, y)))
                .collect(),
        };

        starts
            .into_iter()
            .map(|start| self.walk(start, orientation.step()))
            .collect()
    }

    fn walk(&self, (mut x, mut y): (usize, usize), (dx, dy): (isize, isize)) -> Vec<u8> {
        let mut line = Vec::new();

        while let Some(letter) = self.get(x, y) {
            line.push(letter);
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                break;
            };
            (x, y) = (nx, ny);
        }

        line
    }
}

impl fmt::Display for WordSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.letters.chunks(self.width) {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
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

    use crate::error::SearchError;

    type Span<'a> = LocatedSpan<&'a str>;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct LocatedLetter<'a> {
        pub letter: u8,
        pub position: Span<'a>,
    }

    fn parse_letter(input: Span) -> IResult<Span, LocatedLetter> {
        satisfy(|c: char| c.is_ascii_alphabetic())
            .map(|c| LocatedLetter {
                letter: c as u8,
                position: input,
            })
            .parse(input)
    }

    fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<LocatedLetter>>> {
        separated_list1(line_ending, many1(parse_letter))(input)
    }

    pub(super) fn parse_rows(source: &str) -> Result<Vec<Vec<LocatedLetter>>, SearchError> {
        match parse_grid(Span::new(source)) {
            Ok((rest, rows)) if rest.fragment().is_empty() => Ok(rows),
            Ok((rest, _)) => Err(invalid_letter(source, rest)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(invalid_letter(source, e.input)),
            Err(nom::Err::Incomplete(_)) => Err(SearchError::EmptyInput),
        }
    }

    fn invalid_letter(source: &str, at: Span) -> SearchError {
        let symbol = at.fragment().chars().next().unwrap_or_default();
        SearchError::InvalidLetter {
            src: source.to_string(),
            span: (at.location_offset(), symbol.len_utf8()).into(),
            symbol,
            line: at.location_line(),
            column: at.get_utf8_column(),
        }
    }
}
// endregion
