use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::error::PatrolError;
use crate::lab::{Guard, Lab, Location};

/// How a patrol ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patrol {
    /// The guard stepped off the map after visiting these cells.
    Exited(HashSet<Location>),
    /// The guard reached a (location, facing) state seen before.
    Looped(HashSet<Location>),
}

impl Patrol {
    pub fn visited(&self) -> &HashSet<Location> {
        match self {
            Self::Exited(visited) | Self::Looped(visited) => visited,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, Self::Looped(_))
    }
}

/// Walks the guard from their starting state, optionally with one extra
/// obstruction placed on the map.
///
/// Each step the guard turns right if the cell ahead is blocked, otherwise
/// moves into it. The walk ends when the guard leaves the map or repeats a
/// state, which proves a cycle.
pub fn walk(lab: &Lab, obstruction: Option<Location>) -> Patrol {
    let mut guard = lab.guard();
    let mut states: HashSet<Guard> = HashSet::from([guard]);

    loop {
        let Some(next) = lab.ahead(&guard) else {
            return Patrol::Exited(locations(&states));
        };

        if lab.is_obstacle(next) || obstruction == Some(next) {
            guard.turn_right();
        } else {
            guard.location = next;
        }

        if !states.insert(guard) {
            return Patrol::Looped(locations(&states));
        }
    }
}

fn locations(states: &HashSet<Guard>) -> HashSet<Location> {
    states.iter().map(|state| state.location).collect()
}

/// Every cell where a single new obstruction sends the guard into a loop.
///
/// Only cells on the unobstructed route are candidates, since an obstruction
/// anywhere else is never reached. The guard's starting cell is excluded.
pub fn obstruction_spots(lab: &Lab) -> Result<Vec<Location>, PatrolError> {
    let route = match walk(lab, None) {
        Patrol::Exited(visited) => visited,
        Patrol::Looped(_) => return Err(PatrolError::Trapped),
    };

    let start = lab.guard().location;
    let candidates: Vec<Location> = route.into_iter().filter(|&cell| cell != start).collect();
    debug!(candidates = candidates.len(), "testing obstruction candidates");

    Ok(candidates
        .into_par_iter()
        .filter(|&cell| walk(lab, Some(cell)).is_loop())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...";

    #[test]
    fn test_walk_exits() -> miette::Result<()> {
        let lab = Lab::parse(SAMPLE)?;
        let patrol = walk(&lab, None);

        assert!(!patrol.is_loop());
        assert_eq!(41, patrol.visited().len());
        assert!(patrol.visited().contains(&lab.guard().location));
        Ok(())
    }

    #[test]
    fn test_walk_loops_with_obstruction() -> miette::Result<()> {
        let lab = Lab::parse(SAMPLE)?;
        assert!(walk(&lab, Some(Location::new(3, 6))).is_loop());
        assert!(!walk(&lab, Some(Location::new(0, 0))).is_loop());
        Ok(())
    }

    #[test]
    fn test_boxed_in_guard_loops() -> miette::Result<()> {
        let lab = Lab::parse(".#.\n#^#\n.#.")?;
        let patrol = walk(&lab, None);

        assert!(patrol.is_loop());
        assert_eq!(1, patrol.visited().len());
        Ok(())
    }

    #[test]
    fn test_obstruction_spots() -> miette::Result<()> {
        let lab = Lab::parse(SAMPLE)?;

        let mut expected = vec![
            Location::new(3, 6),
            Location::new(6, 7),
            Location::new(7, 7),
            Location::new(1, 8),
            Location::new(3, 8),
            Location::new(7, 9),
        ];
        let mut spots = obstruction_spots(&lab)?;

        expected.sort();
        spots.sort();

        assert_eq!(expected, spots);
        Ok(())
    }

    #[test]
    fn test_obstruction_spots_when_already_trapped() -> miette::Result<()> {
        let lab = Lab::parse(".#.\n#^#\n.#.")?;
        assert!(matches!(obstruction_spots(&lab), Err(PatrolError::Trapped)));
        Ok(())
    }
}
