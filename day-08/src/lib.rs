pub mod antinode;
pub mod error;
pub mod map;

pub mod part1;
pub mod part2;
