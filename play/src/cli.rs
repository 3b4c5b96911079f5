use clap::{Args, Parser, Subcommand, ValueEnum};
use rchess::Color;

#[derive(Parser)]
#[command(name = "rchess", version, about = "Play chess in the terminal")]
pub struct Cli {
    /// Draw pieces as FEN letters instead of chess symbols
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive game on stdin/stdout
    Play(PlayArgs),
    /// Show the legal destinations of a square
    Legal {
        /// Square to inspect, e.g. `g1`
        square: String,
        /// Moves to play first, in coordinate notation (`e2e4 e7e5`)
        #[arg(long, num_args = 0.., value_delimiter = ' ')]
        moves: Vec<String>,
    },
    /// Let the computer play both sides
    Selfplay {
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        level: Option<u8>,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
    },
}

#[derive(Args)]
pub struct PlayArgs {
    /// Side played by the computer
    #[arg(long, value_enum)]
    pub computer: Option<Side>,
    /// Computer strength: 1 random, 2 greedy
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub level: Option<u8>,
    /// Clock, e.g. `3m` or `2m+5s`
    #[arg(long)]
    pub clock: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}
