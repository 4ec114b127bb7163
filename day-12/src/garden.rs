use tracing::debug;

use crate::error::GardenError;
use crate::grid::Grid;
use crate::region::{segment, Region};

/// A garden map together with its regions, segmented once at construction.
#[derive(Debug, Clone)]
pub struct Garden {
    grid: Grid,
    regions: Vec<Region>,
}

impl Garden {
    pub fn new(grid: Grid) -> Result<Self, GardenError> {
        let regions = segment(&grid)?;
        Ok(Self { grid, regions })
    }

    pub fn parse(input: &str) -> Result<Self, GardenError> {
        Self::new(Grid::parse(input)?)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Σ area × perimeter over every region.
    pub fn price_by_perimeter(&self) -> usize {
        let price: usize = self.regions.iter().map(Region::perimeter_price).sum();
        debug!(price, "priced fences by perimeter");
        price
    }

    /// Σ area × sides over every region.
    pub fn price_by_sides(&self) -> usize {
        let price: usize = self.regions.iter().map(Region::side_price).sum();
        debug!(price, "priced fences by sides");
        price
    }
}
