//! Line-oriented play loop.
//!
//! The player to move is always the successor of the last player, so the
//! session alternates turns itself and only reports what the engine refuses.

use crate::config::FractalConfig;
use crate::render::{StatusReport, describe_forced, describe_grid, render_grid};
use anyhow::{Context, Result};
use fractal_tictactoe::{Coordinate, GameState, Move, Owner, next_player};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Claim a cell.
    Play(Coordinate),
    /// List legal cells for the player to move.
    Moves,
    /// Render the grid at a coordinate (the whole board by default).
    Show(Coordinate),
    /// Print a status report.
    Status,
    /// Print command help.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one line; `None` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let command = match word.to_lowercase().as_str() {
            "moves" => Command::Moves,
            "show" => Command::Show(rest.parse().context("Bad coordinate for show")?),
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Play(line.parse()?),
        };
        Ok(Some(command))
    }
}

const HELP: &str = "\
Commands:
  <digits>      claim a cell, outermost digit first (e.g. `4 0`, `40` or `center top-left`)
  moves         list legal cells for the player to move
  show [digits] render a grid (the whole board by default)
  status        print the game status
  quit          end the session";

/// A game being played over a text stream.
pub struct Session<R, W> {
    game: GameState,
    config: FractalConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a fresh game of the configured depth.
    #[instrument(skip(input, output))]
    pub fn new(config: FractalConfig, input: R, output: W) -> Result<Self> {
        let game = GameState::new(config.depth)
            .with_context(|| format!("Cannot start a game of depth {}", config.depth))?;
        info!(depth = config.depth, "Session started");
        Ok(Self {
            game,
            config,
            input,
            output,
        })
    }

    /// Reads commands until the game is decided, input ends, or `quit`.
    ///
    /// Returns the overall outcome, [`Owner::None`] if unfinished.
    pub fn run(&mut self) -> Result<Owner> {
        writeln!(self.output, "{}", HELP)?;
        let mut line = String::new();
        loop {
            self.prompt()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                return Ok(self.game.victor());
            }

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "{:#}", err)?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(self.game.victor()),
                Command::Help => writeln!(self.output, "{}", HELP)?,
                Command::Moves => self.list_moves()?,
                Command::Show(at) => self.show(&at)?,
                Command::Status => self.status()?,
                Command::Play(at) => {
                    let victor = self.play(at)?;
                    if victor.is_resolved() {
                        writeln!(self.output, "{} has won!", victor)?;
                        return Ok(victor);
                    }
                }
            }
        }
    }

    fn prompt(&mut self) -> Result<()> {
        let player = next_player(self.game.last_player());
        let forced = self.game.forced_prefix().map(Coordinate::from);
        write!(
            self.output,
            "{} to move ({})> ",
            player,
            describe_forced(forced.as_ref())
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Plays one move for the player to move and reports its effects.
    #[instrument(skip(self))]
    fn play(&mut self, at: Coordinate) -> Result<Owner> {
        let player = next_player(self.game.last_player());
        let victor = match self.game.play(Move::new(player, at.clone())) {
            Ok(victor) => victor,
            Err(err) => {
                warn!(%err, "Move refused");
                writeln!(self.output, "Illegal move: {}", err)?;
                return Ok(Owner::None);
            }
        };

        // Report every enclosing sub-board that this move resolved.
        let mut enclosing = at.parent();
        while let Some(grid) = enclosing {
            if grid.is_empty() {
                break;
            }
            let owner = self.game.grid_owner(&grid)?;
            if owner.is_resolved() {
                let verdict = match owner {
                    Owner::Draw => "drawn".to_string(),
                    claimed => format!("won by {}", claimed),
                };
                writeln!(self.output, "{} {}", describe_grid(&grid), verdict)?;
            }
            enclosing = grid.parent();
        }

        if self.config.show_board
            && let Some(grid) = at.parent()
            && let Some(node) = self.game.root().node_at(grid.as_slice())
        {
            writeln!(self.output, "{}", render_grid(node))?;
        }
        Ok(victor)
    }

    fn list_moves(&mut self) -> Result<()> {
        let player = next_player(self.game.last_player());
        let moves = self.game.legal_moves(player);
        let listed = moves
            .iter()
            .map(|c| c.indices().iter().map(|d| d.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "{} legal move(s): {}", moves.len(), listed)?;
        Ok(())
    }

    fn show(&mut self, at: &Coordinate) -> Result<()> {
        match self.game.root().node_at(at.as_slice()) {
            Some(node) => writeln!(self.output, "{}", render_grid(node))?,
            None => writeln!(self.output, "No grid at {}", at)?,
        }
        Ok(())
    }

    fn status(&mut self) -> Result<()> {
        self.game.victor();
        let report = StatusReport::capture(&self.game);
        if self.config.json {
            writeln!(self.output, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(self.output, "{}", report)?;
        }
        Ok(())
    }
}
