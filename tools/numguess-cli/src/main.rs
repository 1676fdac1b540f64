use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use numguess_domain::Difficulty;
use numguess_game::{GameError, GameFlow, GuessFeedback, RandomSecret, Screen};
use numguess_stats::{resolve_stats_path, StatisticsStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play the number guessing game in a terminal")]
struct Cli {
    /// Statistics file; falls back to $NUMGUESS_STATS_FILE, then game_stats_ngg.json
    #[arg(long, global = true)]
    stats_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print lifetime statistics
    Stats,
    /// Play one game on stdin/stdout
    Play {
        /// easy, medium or hard; asked interactively when omitted
        #[arg(short, long, value_parser = parse_difficulty)]
        difficulty: Option<Difficulty>,
    },
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    raw.parse().map_err(|err: numguess_domain::DomainError| err.user_message())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = resolve_stats_path(cli.stats_file);
    let store = StatisticsStore::load(&path)
        .with_context(|| format!("cannot open statistics file {}", path.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Stats => {
            writeln!(out, "{}", store.snapshot())?;
        }
        Command::Play { difficulty } => {
            let mut flow = GameFlow::new(store, Box::new(RandomSecret));
            let stdin = io::stdin();
            play(&mut flow, difficulty, stdin.lock(), &mut out)?;
        }
    }
    Ok(())
}

/// Run one game. Returns `false` when input ran out before the game finished.
fn play(
    flow: &mut GameFlow,
    difficulty: Option<Difficulty>,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    flow.start_game()?;
    let difficulty = match difficulty {
        Some(difficulty) => difficulty,
        None => match ask_difficulty(&mut input, out)? {
            Some(difficulty) => difficulty,
            None => {
                flow.cancel()?;
                return Ok(false);
            }
        },
    };
    flow.choose_difficulty(difficulty)?;

    let mut line = String::new();
    loop {
        let prompt = match flow.screen() {
            Screen::Guessing(session) => session.prompt(),
            _ => break,
        };
        writeln!(out, "{prompt}")?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("input closed mid-game");
            flow.cancel()?;
            return Ok(false);
        }
        match flow.submit_guess(&line) {
            Ok(GuessFeedback::Hint { hint, .. }) => writeln!(out, "{}", hint.message())?,
            Ok(GuessFeedback::Lost { hint, .. }) => writeln!(out, "{}", hint.message())?,
            Ok(GuessFeedback::Won { .. }) => {}
            Err(GameError::Input(err)) => writeln!(out, "{}: {}", err.title(), err.user_message())?,
            Err(GameError::Unsaved { feedback, source }) => {
                if let GuessFeedback::Lost { hint, .. } = feedback {
                    writeln!(out, "{}", hint.message())?;
                }
                warn!(error = %source, "result not saved");
                writeln!(out, "Warning: {source}")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Screen::Result(summary) = flow.screen() {
        writeln!(out, "{} {}", summary.title(), summary.message())?;
    }
    flow.acknowledge()?;
    Ok(true)
}

fn ask_difficulty(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<Difficulty>> {
    let mut line = String::new();
    loop {
        writeln!(out, "Select Difficulty Level")?;
        for difficulty in Difficulty::ALL {
            writeln!(out, "  {}", difficulty.label())?;
        }
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(err) => writeln!(out, "{}", err.user_message())?,
        }
    }
}
