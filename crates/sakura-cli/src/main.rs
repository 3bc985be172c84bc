//! Terminal front end for the Sakura rotation puzzle.
//!
//! Reads one command per line from standard input and prints the board after
//! every change. Set `RUST_LOG=debug` to follow generation and shuffles.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin sakura -- --width 9 --height 7 --toroidal
//! cargo run --bin sakura -- --config round.json --phrase "cherry blossom"
//! ```

use std::{
    fs,
    io::{self, BufRead as _, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use sakura_core::Topology;
use sakura_game::{AutoShuffle, Game, GameError, RoundConfig};
use sakura_generator::RoundSeed;

use crate::{
    action::{Action, ActionParseError},
    action_handler::Flow,
};

mod action;
mod action_handler;
mod board;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with a round configuration. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of columns.
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows.
    #[arg(long)]
    height: Option<usize>,

    /// Forbidden-cell density in [0, 0.7].
    #[arg(long)]
    relax: Option<f64>,

    /// Wrap the board edges around.
    #[arg(long)]
    toroidal: bool,

    /// Seed of the first round (64 hex digits).
    #[arg(long, conflicts_with = "phrase")]
    seed: Option<RoundSeed>,

    /// Phrase the seed of the first round is derived from.
    #[arg(long)]
    phrase: Option<String>,

    /// Do not shuffle new rounds automatically.
    #[arg(long)]
    no_auto_shuffle: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },
    #[display("invalid configuration file {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("{_0}")]
    Game(#[from] GameError),
    #[display("{_0}")]
    Io(#[from] io::Error),
}

impl Args {
    fn round_config(&self) -> Result<RoundConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
                    path: path.clone(),
                    source,
                })?
            }
            None => RoundConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(relax) = self.relax {
            config.relax_factor = relax;
        }
        if self.toroidal {
            config.topology = Topology::Toroidal;
        }
        if self.no_auto_shuffle {
            config.auto_shuffle = AutoShuffle::DISABLED;
        }
        Ok(config)
    }

    fn first_seed(&self) -> RoundSeed {
        match (&self.seed, &self.phrase) {
            (Some(seed), _) => *seed,
            (None, Some(phrase)) => RoundSeed::from_phrase(phrase),
            (None, None) => RoundSeed::random(),
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = args.round_config()?;
    let mut game = Game::new_round_with_seed(config, args.first_seed())?;
    log::info!(
        "starting {}x{} {:?} round, relax factor {}",
        config.width,
        config.height,
        config.topology,
        config.relax_factor
    );
    board::print(&game);
    action_handler::auto_shuffle(&mut game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(ActionParseError::Empty) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if action_handler::handle(&mut game, action) == Flow::Quit {
            break;
        }
    }
    Ok(())
}
