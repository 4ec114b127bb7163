use miette::{Context, Result};
use tracing::{debug, info};

use crate::topo::TopoMap;
use crate::trails::TrailGraph;

/// Processes a climbing grid and returns the sum of all trailhead ratings,
/// a rating being the number of distinct trails from a trailhead to any peak.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    info!("Processing climbing grid");
    let map = TopoMap::parse(input).context("Failed to parse input grid")?;

    debug!("Created map with dimensions {:?}", map.dimensions());

    let graph = TrailGraph::new(&map);
    let total = graph.total_rating();
    debug!("Found total of {} distinct trails", total);

    Ok(total.to_string())
}
