use miette::Context;
use tracing::info;

use crate::lab::Lab;
use crate::patrol::obstruction_spots;

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let lab = Lab::parse(input).context("Failed to parse lab map")?;

    let spots = obstruction_spots(&lab).context("Failed to search obstruction spots")?;
    info!(spots = spots.len(), "Found looping obstructions");

    Ok(spots.len().to_string())
}
