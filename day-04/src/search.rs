use memchr::memmem::Finder;
use rayon::prelude::*;
use tracing::debug;

use crate::error::SearchError;
use crate::puzzle::{Orientation, WordSearch};

/// Counts every placement of `word` along a row, column or diagonal, read
/// forwards or backwards. Placements may overlap. A palindrome is counted
/// once per placement, not once per reading direction.
#[tracing::instrument(skip(search))]
pub fn count_word(search: &WordSearch, word: &str) -> Result<usize, SearchError> {
    if word.is_empty() {
        return Err(SearchError::EmptyWord);
    }

    let forward = word.as_bytes().to_vec();
    let backward: Vec<u8> = forward.iter().rev().copied().collect();

    let total = Orientation::ALL
        .par_iter()
        .map(|&orientation| {
            let lines = search.lines(orientation);
            let mut count = count_in_lines(&lines, &forward);
            if backward != forward {
                count += count_in_lines(&lines, &backward);
            }
            debug!(?orientation, count, "counted placements");
            count
        })
        .sum();

    Ok(total)
}

fn count_in_lines(lines: &[Vec<u8>], needle: &[u8]) -> usize {
    let finder = Finder::new(needle);
    lines.iter().map(|line| count_overlapping(&finder, line)).sum()
}

fn count_overlapping(finder: &Finder, haystack: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;

    while let Some(idx) = finder.find(&haystack[pos..]) {
        count += 1;
        pos += idx + 1;
    }
    count
}

/// Counts the cells where `word` crosses itself: both diagonals through the
/// cell spell the word, each in either direction, sharing its middle letter.
#[tracing::instrument(skip(search))]
pub fn count_crosses(search: &WordSearch, word: &str) -> Result<usize, SearchError> {
    let word = word.as_bytes();
    if word.is_empty() {
        return Err(SearchError::EmptyWord);
    }
    if word.len() % 2 == 0 {
        return Err(SearchError::EvenCrossWord {
            word: String::from_utf8_lossy(word).into_owned(),
            length: word.len(),
        });
    }

    let arm = word.len() / 2;
    let (width, height) = search.dimensions();
    if width <= 2 * arm || height <= 2 * arm {
        return Ok(0);
    }

    let crosses = (arm..height - arm)
        .into_par_iter()
        .map(|y| {
            (arm..width - arm)
                .filter(|&x| {
                    let diagonal: Vec<u8> = (0..word.len())
                        .filter_map(|i| search.get(x - arm + i, y - arm + i))
                        .collect();
                    let anti_diagonal: Vec<u8> = (0..word.len())
                        .filter_map(|i| search.get(x + arm - i, y - arm + i))
                        .collect();

                    spells(&diagonal, word) && spells(&anti_diagonal, word)
                })
                .count()
        })
        .sum();

    Ok(crosses)
}

fn spells(line: &[u8], word: &[u8]) -> bool {
    line == word || line.iter().rev().eq(word.iter())
}
