use std::time::Duration;

use rand::Rng;

use crate::chain::{EntityChain, GridPosition};
use crate::clock::Clock;
use crate::config::{GridSize, PLACEMENT_TIMEOUT};
use crate::error::{Result, SnekError};

/// Picks a random interior cell that the chain does not occupy.
///
/// Gives up with `PlacementTimeout` once [`PLACEMENT_TIMEOUT`] has elapsed on
/// `clock`, which only happens when the chain has (nearly) filled the interior.
pub fn place_food<R, C>(
    rng: &mut R,
    clock: &C,
    chain: &EntityChain,
    bounds: GridSize,
) -> Result<GridPosition>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    place_food_within(rng, clock, chain, bounds, PLACEMENT_TIMEOUT)
}

/// [`place_food`] with an explicit time budget.
pub fn place_food_within<R, C>(
    rng: &mut R,
    clock: &C,
    chain: &EntityChain,
    bounds: GridSize,
    timeout: Duration,
) -> Result<GridPosition>
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    if bounds.interior_rows().is_empty() || bounds.interior_columns().is_empty() {
        log::error!(
            "{}x{} grid has no interior to place food in",
            bounds.columns,
            bounds.rows
        );
        return Err(SnekError::PlacementTimeout(timeout));
    }

    let budget_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    let started = clock.now_ms();
    let mut attempts: u64 = 0;

    loop {
        let candidate = GridPosition {
            row: rng.gen_range(bounds.interior_rows()),
            column: rng.gen_range(bounds.interior_columns()),
        };
        attempts += 1;

        if !chain.occupies(candidate) {
            log::debug!("food placed at {candidate:?} after {attempts} attempt(s)");
            return Ok(candidate);
        }

        if clock.now_ms().saturating_sub(started) > budget_ms {
            log::error!(
                "gave up placing food after {attempts} attempts; chain length {}",
                chain.len()
            );
            return Err(SnekError::PlacementTimeout(timeout));
        }
    }
}
