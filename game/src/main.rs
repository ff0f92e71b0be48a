use std::{io, process::ExitCode};

use minesweeper_game::{config::Config, session::Session};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let rng = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), rng, config.params);
    match session.run() {
        Ok(end) => {
            info!("Session finished: {:?}", end);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Session failed: {}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
