use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::map::{AntennaMap, Location};

/// `(rise, run)` from `a` to `b`.
pub fn slope(a: Location, b: Location) -> (isize, isize) {
    (b.y - a.y, b.x - a.x)
}

/// The two points in line with `a` and `b` that are twice as far from one
/// antenna as from the other: one step of the slope beyond each antenna.
pub fn antinode_pair(a: Location, b: Location) -> (Location, Location) {
    let (rise, run) = slope(a, b);

    (
        Location::new(a.x - run, a.y - rise),
        Location::new(b.x + run, b.y + rise),
    )
}

/// Every on-map point reached from `a` by whole steps of the slope towards
/// `b`, in both directions, `a` and `b` included.
pub fn resonant_line(map: &AntennaMap, a: Location, b: Location) -> Vec<Location> {
    let (rise, run) = slope(a, b);
    let step =
        |location: Location, k: isize| Location::new(location.x + k * run, location.y + k * rise);

    let mut line = Vec::new();
    for direction in [-1, 1] {
        let mut current = if direction < 0 { a } else { step(a, 1) };
        while map.contains(current) {
            line.push(current);
            current = step(current, direction);
        }
    }
    line
}

/// Distinct on-map antinodes over every pair of same-frequency antennas.
#[tracing::instrument(skip(map))]
pub fn antinodes(map: &AntennaMap) -> HashSet<Location> {
    let found: HashSet<Location> = map
        .frequencies()
        .flat_map(|(_, antennas)| antennas.iter().copied().tuple_combinations())
        .flat_map(|(a, b)| {
            let (first, second) = antinode_pair(a, b);
            [first, second]
        })
        .filter(|&location| map.contains(location))
        .collect();

    debug!(antinodes = found.len(), "found antinodes");
    found
}

/// Distinct on-map points in line with at least two antennas of one
/// frequency, the antennas themselves included.
#[tracing::instrument(skip(map))]
pub fn resonant_antinodes(map: &AntennaMap) -> HashSet<Location> {
    let found: HashSet<Location> = map
        .frequencies()
        .flat_map(|(_, antennas)| antennas.iter().copied().tuple_combinations())
        .flat_map(|(a, b)| resonant_line(map, a, b))
        .collect();

    debug!(antinodes = found.len(), "found resonant antinodes");
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope() {
        assert_eq!((4, 3), slope(Location::new(0, 0), Location::new(3, 4)));
        assert_eq!((-4, 3), slope(Location::new(0, 4), Location::new(3, 0)));
    }

    #[test]
    fn test_antinode_pair() {
        assert_eq!(
            (Location::new(0, 0), Location::new(3, 3)),
            antinode_pair(Location::new(1, 1), Location::new(2, 2))
        );
        assert_eq!(
            (Location::new(3, 1), Location::new(6, 7)),
            antinode_pair(Location::new(4, 3), Location::new(5, 5))
        );
    }

    #[test]
    fn test_antinodes_off_map_are_dropped() -> miette::Result<()> {
        let map = AntennaMap::parse("a...\n.a..\n....\n....")?;

        assert_eq!(
            HashSet::from([Location::new(2, 2)]),
            antinodes(&map)
        );
        Ok(())
    }

    #[test]
    fn test_antinodes_need_matching_frequency() -> miette::Result<()> {
        let map = AntennaMap::parse("a...\n.b..\n....\n....")?;
        assert!(antinodes(&map).is_empty());
        assert!(resonant_antinodes(&map).is_empty());
        Ok(())
    }

    #[test]
    fn test_resonant_line() -> miette::Result<()> {
        let map = AntennaMap::parse("......\n......\n......\n......\n......\n......")?;
        let mut line = resonant_line(&map, Location::new(2, 2), Location::new(3, 3));
        line.sort();

        assert_eq!(
            (0..6).map(|i| Location::new(i, i)).collect::<Vec<_>>(),
            line
        );
        Ok(())
    }

    #[test]
    fn test_lone_antenna_is_not_resonant() -> miette::Result<()> {
        let map = AntennaMap::parse("...\n.A.\n...")?;
        assert!(resonant_antinodes(&map).is_empty());
        Ok(())
    }
}
