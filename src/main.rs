//! Mastermind console runner (default binary).
//!
//! Interactive play goes through the crossterm console presenter; `--script`
//! switches to line-delimited JSON on stdin/stdout. Logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mastermind::app;
use mastermind::cli::Cli;
use mastermind::core::SecretGenerator;
use mastermind::script::run_script;
use mastermind::term::{Console, Line, Screen};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = cli.seed_or_clock();
    info!(seed, script = cli.script, "starting");
    let mut generator = SecretGenerator::new(seed);

    if cli.script {
        let config = cli.config_or_default()?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        run_script(stdin.lock(), stdout.lock(), config, &mut generator)?;
        return Ok(());
    }

    let mut console = Console::new();
    app::run(&mut console, cli.length, cli.max_digit, &mut generator)?;
    console.show(&[Line::blank(), Line::plain("End of the game.")])?;
    Ok(())
}
