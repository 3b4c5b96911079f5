mod cli;
mod clock;
mod config;
mod opponent;
mod session;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rchess::ui::renderer::history_lines;
use rchess::ui::{BoardRenderer, Glyphs};
use rchess::{Game, Move, Position};

use crate::config::ClockConfig;
use crate::opponent::Level;
use crate::session::{Session, SessionOptions};

fn main() -> Result<()> {
    // Initialize logger
    let env = Env::default().filter_or("RCHESS_LOG_LEVEL", "info");
    env_logger::Builder::from_env(env).init();

    let cli = cli::Cli::parse();
    let cfg_path = std::env::var_os("RCHESS_CONFIG_PATH").map(|s| s.into());
    let cfg = config::Config::load(cfg_path.as_ref())?;
    let glyphs = if cli.ascii || !cfg.unicode {
        Glyphs::Ascii
    } else {
        Glyphs::Unicode
    };

    match cli.command {
        Some(cli::Commands::Play(args)) => {
            let clock = match args.clock.as_deref() {
                Some(spec) => ClockConfig::from_spec(spec),
                None => cfg.clock,
            };
            let opts = SessionOptions {
                computer: args.computer.map(Into::into).or(cfg.computer),
                level: Level::from_number(args.level.unwrap_or(cfg.level)),
                glyphs,
                time_control: clock.time_control()?,
                seed: None,
            };
            let stdin = io::stdin();
            Session::new(opts, stdin.lock(), io::stdout()).run()?;
        }
        Some(cli::Commands::Legal { square, moves }) => {
            let mut game = Game::new();
            game.new_game();
            for text in moves.iter().filter(|m| !m.is_empty()) {
                game.apply(text.parse::<Move>()?)?;
            }
            let from: Position = square.parse()?;
            let targets = game.legal_moves_from(from);
            print!("{}", BoardRenderer::render_marked(game.board(), glyphs, &targets));
            let names: Vec<String> = targets.iter().map(Position::to_string).collect();
            println!("{}: {}", from, names.join(" "));
        }
        Some(cli::Commands::Selfplay {
            level,
            seed,
            max_plies,
        }) => {
            let level = Level::from_number(level.unwrap_or(cfg.level));
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut game = Game::new();
            game.new_game();
            while game.history().len() < max_plies {
                let Some(mv) = opponent::choose_move(&game, level, &mut rng) else {
                    break;
                };
                game.apply(mv)?;
            }
            print!("{}", BoardRenderer::render(game.board(), glyphs));
            for line in history_lines(game.history()) {
                println!("{}", line);
            }
            info!("selfplay finished after {} plies: {:?}", game.history().len(), game.status());
        }
        None => {
            // If no subcommand, print help
            cli::Cli::command().print_help()?;
        }
    }
    Ok(())
}
