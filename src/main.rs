//! Terminal front end for the 2048 engine.
//!
//! Reads one command per line: a direction (`left`, `a`, `h`, ...), `n` to
//! start or restart, `q` to quit.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use rust_2048::{Direction, Game, GameConfig, Status};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 2048 in the terminal", long_about = None)]
struct Args {
    /// Path to a TOML game configuration
    #[arg(long, value_name = "FILE", value_parser = clap::value_parser!(PathBuf))]
    config: Option<PathBuf>,

    /// Seed for tile placement
    #[arg(long)]
    seed: Option<u64>,

    /// Initial board as JSON rows, e.g. '[[2,0,0,0],[0,0,0,0],[0,0,0,0],[0,0,0,2]]'
    #[arg(long, value_name = "JSON")]
    initial: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut builder = Game::builder().config(config);
    if let Some(json) = &args.initial {
        let rows: Vec<Vec<u32>> =
            serde_json::from_str(json).context("--initial must be a JSON array of rows")?;
        builder = builder.initial_state(&rows);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    let mut game = builder.build().context("failed to set up game")?;
    info!("seed {}", game.rng_state().seed);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim();

        match command {
            "" => continue,
            "q" | "quit" => break,
            "n" | "start" | "restart" => {
                // one button: start when idle, restart otherwise
                if game.status() == Status::Idle {
                    game.start()?;
                } else {
                    game.restart();
                }
            }
            _ => match command.parse::<Direction>() {
                Ok(direction) => {
                    let report = game.play_turn(direction)?;
                    if report.moved && report.status != Status::Playing {
                        info!("game over: {} with score {}", report.status, game.score());
                    }
                }
                Err(err) => {
                    writeln!(stdout, "{err}")?;
                    continue;
                }
            },
        }

        render(&mut stdout, &game)?;
    }

    Ok(())
}

fn render<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    writeln!(out, "score: {}  status: {}", game.score(), game.status())?;
    match game.status() {
        Status::Idle => writeln!(out, "press n to start")?,
        Status::Win => writeln!(out, "You win! press n to restart")?,
        Status::Lose => writeln!(out, "You lose! press n to restart")?,
        Status::Playing => {}
    }
    out.flush()
}
