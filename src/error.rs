use std::collections::TryReserveError;
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by the game core and its terminal runtime.
///
/// Wall and self collisions are gameplay outcomes, not errors; see
/// [`crate::game::TickOutcome`].
#[derive(Debug, Error)]
pub enum SnekError {
    #[error("out of memory: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("initialization failed: {0}")]
    InitializationFailure(String),

    #[error("entity chain is empty")]
    InvalidChain,

    #[error("no free cell for food found within {0:?}")]
    PlacementTimeout(Duration),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = SnekError> = std::result::Result<T, E>;
