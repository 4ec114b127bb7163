pub mod error;
pub mod topo;
pub mod trails;

pub mod part1;
pub mod part2;
