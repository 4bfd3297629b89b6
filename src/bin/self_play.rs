use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use twin_chess::board::SearchParams;
use twin_chess::GameController;

/// Let the machine play both sides of a two-board game.
#[derive(Parser, Debug)]
#[command(name = "self_play")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Replies searched below each root move
    #[arg(short, long, default_value_t = 2)]
    depth: u32,

    /// Candidate destinations kept per piece
    #[arg(long, default_value_t = 5)]
    candidates: usize,

    /// Random opening moves before searching
    #[arg(long, default_value_t = 5)]
    opening_random: u32,

    /// Stop after this many plies
    #[arg(long, default_value_t = 60)]
    max_plies: u32,

    /// Fix the RNG seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the log to a file instead of the terminal
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Log every committed move and search summary
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let params = SearchParams {
        depth: args.depth,
        candidate_limit: args.candidates,
        opening_random_turns: args.opening_random,
        seed: args.seed,
        ..SearchParams::default()
    };
    let mut game = GameController::new(params);

    while !game.is_game_over() && game.plies_played() < args.max_plies {
        let side = game.side_to_move();
        game.set_machine_color(side);
        if game.is_in_check(side) && !game.has_resolving_move(side) {
            info!("{side} is in check with no resolving move");
            break;
        }
        if game.machine_turn().is_none() {
            info!("{side} has no playable move");
            break;
        }
    }

    println!("{}", game.board());
    println!(
        "{} plies, game over: {}",
        game.plies_played(),
        game.is_game_over()
    );
    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }

    Ok(args)
}
