use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::GardenError;
use crate::grid::{Direction, Grid, Position};

/// The four direction pairs that meet at a plot's corners.
const CORNERS: [(Direction, Direction); 4] = [
    (Direction::Up, Direction::Right),
    (Direction::Up, Direction::Left),
    (Direction::Down, Direction::Left),
    (Direction::Down, Direction::Right),
];

/// A maximal 4-connected set of plots sharing one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    symbol: char,
    plots: HashSet<Position>,
}

impl Region {
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn plots(&self) -> &HashSet<Position> {
        &self.plots
    }

    pub fn contains(&self, position: Position) -> bool {
        self.plots.contains(&position)
    }

    pub fn area(&self) -> usize {
        self.plots.len()
    }

    /// Number of plot edges facing something outside the region, the map
    /// border included.
    pub fn perimeter(&self) -> usize {
        self.plots
            .iter()
            .map(|&plot| {
                Direction::ALL
                    .iter()
                    .filter(|&&direction| !self.contains(plot.step(direction)))
                    .count()
            })
            .sum()
    }

    /// Number of straight fence sides, counted as the number of corners of
    /// the region's outline (holes included).
    pub fn sides(&self) -> usize {
        self.plots.iter().map(|&plot| self.corners_at(plot)).sum()
    }

    pub fn perimeter_price(&self) -> usize {
        self.area() * self.perimeter()
    }

    pub fn side_price(&self) -> usize {
        self.area() * self.sides()
    }

    fn corners_at(&self, plot: Position) -> usize {
        CORNERS
            .iter()
            .filter(|&&(vertical, horizontal)| {
                let first = self.contains(plot.step(vertical));
                let second = self.contains(plot.step(horizontal));
                let diagonal = self.contains(plot.step(vertical).step(horizontal));

                // convex: both sides open; concave: both sides closed, diagonal open
                (!first && !second) || (first && second && !diagonal)
            })
            .count()
    }
}

/// Splits the grid into regions, seeding a breadth-first flood fill from
/// every plot not yet assigned, in row-major order.
///
/// Every plot ends up in exactly one region.
#[tracing::instrument(skip(grid), fields(width = grid.width(), height = grid.height()))]
pub fn segment(grid: &Grid) -> Result<Vec<Region>, GardenError> {
    let mut assigned = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for seed in grid.positions() {
        let index = grid.index(seed).ok_or(GardenError::OutOfRange {
            x: seed.x,
            y: seed.y,
            width: grid.width(),
            height: grid.height(),
        })?;

        if assigned[index] {
            continue;
        }

        assigned[index] = true;
        regions.push(flood_fill(grid, seed, &mut assigned)?);
    }

    debug!(regions = regions.len(), "segmented garden");
    Ok(regions)
}

fn flood_fill(grid: &Grid, seed: Position, assigned: &mut [bool]) -> Result<Region, GardenError> {
    let symbol = grid.get(seed)?;
    let mut plots = HashSet::new();
    let mut queue = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        plots.insert(current);

        for direction in Direction::ALL {
            let next = current.step(direction);
            let Some(index) = grid.index(next) else {
                continue;
            };

            if assigned[index] || grid.get(next)? != symbol {
                continue;
            }

            assigned[index] = true;
            queue.push_back(next);
        }
    }

    Ok(Region { symbol, plots })
}
