use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use twenty48_core::*;

use command::{Command, HELP};

mod command;

/// Play 2048 in the terminal, one command per line.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for tile spawning, defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Grid width and height
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE)]
    size: Coord,

    /// Tile value that wins the game
    #[arg(long, default_value_t = GameConfig::DEFAULT_TARGET)]
    target: Tile,

    #[command(flatten)]
    verbosity: Verbosity,
}

fn render(session: &GameSession<RandomSpawner>, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\nScore: {}  High: {}\n",
        session.score(),
        session.high_score()
    )?;
    write!(out, "{}", session.grid())?;

    let phase = session.phase();
    if let Some(reason) = phase.reason() {
        writeln!(out, "\nGame over, {reason}.")?;
        if phase == Phase::Won {
            writeln!(out, "k to keep playing, r to restart, q to exit")?;
        } else {
            writeln!(out, "u to undo, r to restart, q to exit")?;
        }
    }
    out.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as u64,
    };
    log::info!("Using seed {}", seed);

    let config = GameConfig::new(args.size, args.target)?;
    let mut session = GameSession::new(config, RandomSpawner::new(seed))?;

    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;
    render(&session, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(command) = Command::parse(&line) else {
            writeln!(out, "Unknown command {:?}: {HELP}", line.trim())?;
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Restart => session.restart()?,
            Command::Undo => {
                if !session.undo().has_update() {
                    writeln!(out, "Nothing to undo")?;
                    continue;
                }
            }
            Command::KeepPlaying => {
                if let Err(err) = session.keep_playing() {
                    writeln!(out, "{err}")?;
                    continue;
                }
            }
            Command::Move(direction) => match session.apply_move(direction) {
                Ok(status) if !status.has_update() => {
                    writeln!(out, "Cannot move {direction}")?;
                    continue;
                }
                Ok(_) => {}
                Err(GameError::AlreadyEnded) => {
                    writeln!(out, "Game over, restart or undo to continue")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            },
        }

        render(&session, &mut out)?;
    }

    Ok(())
}
