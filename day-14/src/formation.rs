use glam::IVec2;
use rayon::prelude::*;
use tracing::debug;

use crate::lobby::Lobby;
use crate::robot::Robot;

pub fn positions_at(robots: &[Robot], lobby: Lobby, seconds: usize) -> Vec<IVec2> {
    robots
        .iter()
        .map(|robot| robot.position_after(seconds, lobby))
        .collect()
}

/// Positional spread of a formation: `n²` times the summed variance of the
/// x and y coordinates, kept in integers.
///
/// Squared coordinates of a large lobby overflow `i64` once multiplied by the
/// robot count, so the sums are kept in `i128`.
pub fn spread(positions: &[IVec2]) -> i128 {
    let n = positions.len() as i128;
    let (sum_x, sum_y, sum_xx, sum_yy) = positions.iter().fold(
        (0i128, 0i128, 0i128, 0i128),
        |(sx, sy, sxx, syy), p| {
            let (x, y) = (i128::from(p.x), i128::from(p.y));
            (sx + x, sy + y, sxx + x * x, syy + y * y)
        },
    );

    n * sum_xx - sum_x * sum_x + n * sum_yy - sum_y * sum_y
}

/// The earliest second within one period at which the robots huddle closest
/// together. A picture drawn by the robots is far less spread out than the
/// noise around it.
#[tracing::instrument(skip(robots), fields(robots = robots.len()))]
pub fn tightest_formation(robots: &[Robot], lobby: Lobby) -> usize {
    let (best_spread, seconds) = (0..lobby.period())
        .into_par_iter()
        .map(|seconds| (spread(&positions_at(robots, lobby, seconds)), seconds))
        .min()
        .unwrap_or((0, 0));

    debug!(seconds, best_spread, "found tightest formation");
    seconds
}
