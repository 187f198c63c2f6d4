use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use rand::Rng;

use crate::minimax::best;
use crate::tic_tac_toe::{Board, Line, Player, Point, SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    Human,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Player, line: Line },
    Tie,
}

/// The board currently in play and every board reached so far.
#[derive(Debug, Default)]
pub struct Session {
    current: Board,
    history: Vec<Board>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    fn push(&mut self, board: Board) {
        self.current = board;
        self.history.push(board);
    }

    /// The outcome if the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(line) = self.current.won() {
            return Some(Outcome::Win {
                winner: self.current.opponent(),
                line,
            });
        }
        self.current.no_empty().then_some(Outcome::Tie)
    }
}

/// Runs one game between two seats, the first one moving first.
pub struct Driver<R, W, G> {
    input: R,
    output: W,
    rng: G,
    seats: [(Seat, &'static str); 2],
}

impl<R: BufRead, W: Write, G: Rng> Driver<R, W, G> {
    pub fn new(input: R, output: W, rng: G, bot_vs_bot: bool) -> Self {
        let first = if bot_vs_bot {
            (Seat::Bot, "BotA")
        } else {
            (Seat::Human, "Human")
        };
        Self {
            input,
            output,
            rng,
            seats: [first, (Seat::Bot, "BotB")],
        }
    }

    pub fn run(&mut self) -> Result<Outcome> {
        let mut session = Session::new();
        let outcome = 'game: loop {
            for (seat, name) in self.seats {
                if let Some(outcome) = self.announce(&session, name)? {
                    break 'game outcome;
                }
                self.turn(&mut session, seat)?;
            }
        };

        writeln!(self.output, "\n=== Game history ===")?;
        for board in session.history() {
            writeln!(self.output, "{}", board)?;
        }
        Ok(outcome)
    }

    fn announce(&mut self, session: &Session, name: &str) -> Result<Option<Outcome>> {
        let outcome = session.outcome();
        match outcome {
            Some(Outcome::Win { line, .. }) => {
                writeln!(self.output, "{} lost!", name)?;
                writeln!(self.output, "\n=== Winning move ===")?;
                writeln!(self.output, "{}", session.current().render_winning(&line))?;
            }
            Some(Outcome::Tie) => writeln!(self.output, "Tie!")?,
            None => {}
        }
        Ok(outcome)
    }

    fn turn(&mut self, session: &mut Session, seat: Seat) -> Result<()> {
        let board = *session.current();
        write!(self.output, "{}", board)?;
        let next = match seat {
            Seat::Human => self.human_move(&board)?,
            Seat::Bot => {
                let (x, y) = if session.history().is_empty() {
                    // random move at the start
                    (self.rng.gen_range(0..SIZE), self.rng.gen_range(0..SIZE))
                } else {
                    best(&board)?
                };
                board.step(x, y)?
            }
        };
        info!("{} played, board:\n{}", board.player(), next.render());
        session.push(next);
        Ok(())
    }

    fn human_move(&mut self, board: &Board) -> Result<Board> {
        loop {
            write!(self.output, "Enter your move (x y): ")?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read move")?;
            if read == 0 {
                bail!("input closed before the game ended");
            }

            let result = parse_point(&line).and_then(|(x, y)| Ok(board.step(x, y)?));
            match result {
                Ok(next) => return Ok(next),
                Err(err) => {
                    warn!("rejected move {:?}: {}", line.trim(), err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

fn parse_point(line: &str) -> Result<Point> {
    let mut parts = line.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two numbers, got {:?}", line.trim());
    };
    Ok((x.parse()?, y.parse()?))
}
