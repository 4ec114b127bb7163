pub mod error;
pub mod puzzle;
pub mod search;

pub mod part1;
pub mod part2;
