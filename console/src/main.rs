//! Terminal UNO: you against three automated players.
mod agent;
mod config;
mod log;
mod render;
mod tally;

use std::io::{self, Write};
use std::path::PathBuf;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use uno_engine::{
    agent::{AutomatedAgent, PlayerAgent},
    constants::NUM_PLAYERS,
    uno::TurnEngine,
};

use crate::agent::{prompt, ConsoleAgent, LineSource};
use crate::config::ConsoleConfig;
use crate::log::ConsoleLog;
use crate::tally::Tally;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig::from_env();
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();

    let save_file = match config.save_file {
        Some(path) => path,
        None => prompt(&mut stdin, &mut stdout, "Please enter save file: ")?
            .map(PathBuf::from)
            .ok_or_else(|| eyre!("No save file given"))?,
    };
    let mut tally = Tally::load(&save_file)
        .wrap_err_with(|| format!("Failed to read {}", save_file.display()))?;

    let mut agents: Vec<Box<dyn PlayerAgent>> =
        vec![Box::new(ConsoleAgent::new(io::stdin(), io::stdout()))];
    agents.extend(
        (1..NUM_PLAYERS).map(|_| Box::new(AutomatedAgent::new()) as Box<dyn PlayerAgent>),
    );
    let mut engine = TurnEngine::new(agents, config.round)?;

    // Rounds already finished are saved even if a later one fails.
    let session = play_session(&mut engine, &mut tally, &mut stdin, &mut stdout);

    tally
        .save(&save_file)
        .wrap_err_with(|| format!("Failed to save {}", save_file.display()))?;
    session?;

    writeln!(stdout, "Wins: {}, Losses: {}", tally.wins, tally.losses)?;
    Ok(())
}

fn play_session(
    engine: &mut TurnEngine,
    tally: &mut Tally,
    input: &mut impl LineSource,
    output: &mut impl Write,
) -> Result<()> {
    let mut log = ConsoleLog::new(io::stdout());

    loop {
        writeln!(output, "Starting Game...")?;
        let winner = engine.start(&mut log).wrap_err("Round aborted")?;
        tally.record(winner);

        let answer = prompt(input, output, "Play Again (N/Y)?: ")?;
        if answer.map_or(true, |answer| answer.trim().eq_ignore_ascii_case("n")) {
            return Ok(());
        }
    }
}
