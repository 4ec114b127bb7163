use miette::Context;
use tracing::info;

use crate::garden::Garden;

/// Total fencing price where each region costs area × number of sides.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let garden = Garden::parse(input).context("Failed to read garden map")?;
    info!(regions = garden.regions().len(), "Pricing fences by sides");

    Ok(garden.price_by_sides().to_string())
}
