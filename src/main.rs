use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snek::clock::MonotonicClock;
use snek::config::{Difficulty, GridSize, FRAME_YIELD};
use snek::error::Result;
use snek::game::{GameState, Phase};
use snek::input::TerminalInput;
use snek::logging;
use snek::terminal_runtime::{cleanup_terminal_best_effort, TerminalSession};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Difficulty preselected on the start menu.
    #[arg(long, value_enum, default_value_t = Difficulty::Regular)]
    difficulty: Difficulty,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostics to this file.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level (requires --log-file).
    #[arg(long, requires = "log_file")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        if let Err(error) = logging::init(path, cli.debug) {
            eprintln!("snek: {error}");
            return ExitCode::FAILURE;
        }
    }

    install_panic_hook();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("fatal: {error}");
            eprintln!("snek: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = GameState::with_rng(GridSize::DEFAULT, rng, MonotonicClock::start())?;
    state.difficulty = cli.difficulty;
    log::info!(
        "starting on a {}x{} grid, difficulty {}",
        state.bounds().columns,
        state.bounds().rows,
        state.difficulty.label()
    );

    let mut session = TerminalSession::enter()?;
    let mut input = TerminalInput;

    loop {
        thread::sleep(FRAME_YIELD);

        state.step(&mut input)?;
        if state.phase == Phase::Quit {
            break;
        }

        session.present(&state.view())?;
    }

    log::info!("quit with score {}", state.score);
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
