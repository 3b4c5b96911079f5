//! Interactive game loop over any line reader and writer.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rchess::ui::renderer::history_lines;
use rchess::ui::{BoardRenderer, Glyphs};
use rchess::{Color, Game, GameStatus, Move, PieceKind, Position};

use crate::clock::Clock;
use crate::config::TimeControl;
use crate::opponent::{self, Level};

const HELP: &str = "\
commands:
  e2e4 | e7e8q     play a move (coordinate notation, optional promotion piece)
  moves <square>   show legal destinations of a square
  board            redraw the board
  history          list the moves played
  new              start a new game
  quit             leave";

pub struct SessionOptions {
    pub computer: Option<Color>,
    pub level: Level,
    pub glyphs: Glyphs,
    pub time_control: TimeControl,
    pub seed: Option<u64>,
}

pub struct Session<R, W> {
    game: Game,
    clock: Clock,
    /// When the side to move was last charged.
    last_tick: Instant,
    opts: SessionOptions,
    rng: StdRng,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(opts: SessionOptions, input: R, out: W) -> Self {
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            game: Game::new(),
            clock: Clock::new(opts.time_control),
            last_tick: Instant::now(),
            opts,
            rng,
            input,
            out,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        loop {
            if self.computer_to_move() {
                self.computer_move()?;
                continue;
            }

            write!(self.out, "{}> ", self.game.side_to_move())?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            self.tick()?;
            let mut words = line.split_whitespace();
            match (words.next(), words.next()) {
                (None, _) => {}
                (Some("quit" | "exit"), _) => break,
                (Some("help"), _) => writeln!(self.out, "{}", HELP)?,
                (Some("board"), _) => self.show()?,
                (Some("history"), _) => self.show_history()?,
                (Some("new"), _) => self.start()?,
                (Some("moves"), Some(square)) => self.show_moves(square)?,
                (Some("moves"), None) => writeln!(self.out, "usage: moves <square>")?,
                (Some(text), _) => match text.parse::<Move>() {
                    Ok(mv) => self.human_move(mv)?,
                    Err(e) => writeln!(self.out, "{} (type `help`)", e)?,
                },
            }
        }
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.game.new_game();
        self.clock = Clock::new(self.opts.time_control);
        self.last_tick = Instant::now();
        info!(
            "session started, computer plays {}",
            self.opts
                .computer
                .map_or_else(|| "nobody".to_string(), |c| c.to_string())
        );
        self.show()
    }

    fn in_play(&self) -> bool {
        self.clock.flagged().is_none() && self.game.status() == GameStatus::InProgress
    }

    fn computer_to_move(&self) -> bool {
        self.in_play() && self.opts.computer == Some(self.game.side_to_move())
    }

    fn computer_move(&mut self) -> Result<()> {
        let Some(mv) = opponent::choose_move(&self.game, self.opts.level, &mut self.rng) else {
            return Ok(());
        };
        debug!("computer chose {}", mv);
        self.commit(mv)
    }

    fn human_move(&mut self, mut mv: Move) -> Result<()> {
        if !self.in_play() {
            writeln!(self.out, "the game is over, type `new` to play again")?;
            return Ok(());
        }
        if mv.promotion.is_none()
            && self.game.is_promotion(mv.from, mv.to)
            && self.game.legal_moves_from(mv.from).contains(&mv.to)
        {
            mv.promotion = Some(self.ask_promotion()?);
        }
        self.commit(mv)
    }

    /// Charge the side to move for the time since the last tick. Returns
    /// false when the game is not (or no longer) running.
    fn tick(&mut self) -> Result<bool> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        if !self.in_play() {
            return Ok(false);
        }
        let side = self.game.side_to_move();
        if !self.clock.charge(side, elapsed) {
            writeln!(self.out, "time is up! {} wins on time.", side.opponent())?;
            return Ok(false);
        }
        Ok(true)
    }

    fn commit(&mut self, mv: Move) -> Result<()> {
        if !self.tick()? {
            return Ok(());
        }
        let side = self.game.side_to_move();

        match self.game.apply(mv) {
            Ok(notation) => {
                self.clock.add_increment(side);
                writeln!(self.out, "{} plays {}", side, notation)?;
                self.show()?;
                self.announce_end()?;
            }
            Err(e) => writeln!(self.out, "{}", e)?,
        }
        Ok(())
    }

    fn ask_promotion(&mut self) -> Result<PieceKind> {
        write!(self.out, "promote to (q/r/b/n) [q]: ")?;
        self.out.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        let kind = answer
            .trim()
            .chars()
            .next()
            .and_then(PieceKind::from_symbol)
            .filter(|k| k.is_promotion_target())
            .unwrap_or(PieceKind::Queen);
        Ok(kind)
    }

    fn announce_end(&mut self) -> Result<()> {
        match self.game.status() {
            GameStatus::Checkmate { winner } => {
                writeln!(self.out, "checkmate! {} wins.", winner)?;
            }
            GameStatus::Stalemate => writeln!(self.out, "stalemate, the game is drawn.")?,
            _ => {}
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        write!(self.out, "{}", BoardRenderer::render(self.game.board(), self.opts.glyphs))?;
        self.status_line()
    }

    fn status_line(&mut self) -> Result<()> {
        let side = self.game.side_to_move();
        let check = if self.game.in_check(side) { " - check!" } else { "" };
        writeln!(self.out, "{} to move{}   [{}]", side, check, self.clock.display())?;
        Ok(())
    }

    fn show_history(&mut self) -> Result<()> {
        for line in history_lines(self.game.history()) {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    fn show_moves(&mut self, square: &str) -> Result<()> {
        let from: Position = match square.parse() {
            Ok(pos) => pos,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };
        let targets = self.game.legal_moves_from(from);
        write!(
            self.out,
            "{}",
            BoardRenderer::render_marked(self.game.board(), self.opts.glyphs, &targets)
        )?;
        let names: Vec<String> = targets.iter().map(Position::to_string).collect();
        writeln!(self.out, "{}: {}", from, names.join(" "))?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
