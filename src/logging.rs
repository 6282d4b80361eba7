use std::fs::File;
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::{Result, SnekError};

/// Routes `log` records to `path`. The terminal belongs to the UI, so logs
/// never go to stdout or stderr while a game is running.
pub fn init(path: &Path, debug: bool) -> Result<()> {
    let file = File::create(path).map_err(|error| {
        SnekError::InitializationFailure(format!("log file {}: {error}", path.display()))
    })?;

    WriteLogger::init(level(debug), Config::default(), file)
        .map_err(|error| SnekError::InitializationFailure(format!("logger: {error}")))
}

fn level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
