pub mod error;
pub mod garden;
pub mod grid;
pub mod region;

pub mod part1;
pub mod part2;
