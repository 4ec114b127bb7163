pub mod error;
pub mod formation;
pub mod lobby;
pub mod robot;

pub mod part1;
pub mod part2;
