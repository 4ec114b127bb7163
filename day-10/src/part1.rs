use miette::{Context, Result};
use tracing::{debug, info};

use crate::topo::TopoMap;
use crate::trails::TrailGraph;

/// Processes a climbing grid and returns the total number of reachable peaks from all trailheads
///
/// # Arguments
/// * `input` - String containing the grid of numbers representing heights
///
/// # Returns
/// * `Result<String>` - The sum of reachable peaks from each trailhead
///
/// # Errors
/// * If the input is empty or malformed
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    info!("Processing climbing grid");
    let map = TopoMap::parse(input).context("Failed to parse input grid")?;

    debug!("Created map with dimensions {:?}", map.dimensions());

    let graph = TrailGraph::new(&map);
    let total = graph.total_score();
    debug!("Found total of {} reachable peaks", total);

    Ok(total.to_string())
}
