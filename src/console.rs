//! Interactive console game: a human against the engine.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;

use crate::board::Player;
use crate::config::EngineConfig;
use crate::constants::COLS;
use crate::game::{Game, GameError};
use crate::rules::Outcome;
use crate::search::choose_move;

/// Parse a 1-based column number typed by a human into a column index.
pub fn parse_column(input: &str) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=COLS).contains(&n) => Some(n - 1),
        _ => None,
    }
}

/// Play `game` to the end on `input`/`output` with the human as `human`.
///
/// Bad input and full columns re-prompt. Returns the final outcome, or an
/// error if the input ends before the game does.
pub fn run_console<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &EngineConfig,
    human: Player,
    mut game: Game,
) -> Result<Outcome> {
    let engine = human.opponent();
    let mut lines = input.lines();

    writeln!(output, "{}", game.board())?;

    while !game.outcome().is_over() {
        if game.to_move() == human {
            write!(output, "{human}, choose a column (1-{COLS}): ")?;
            output.flush()?;
            let line = lines
                .next()
                .context("input closed before the game ended")?
                .context("failed to read a move")?;

            let Some(col) = parse_column(&line) else {
                writeln!(output, "Invalid input, enter a number from 1 to {COLS}.")?;
                continue;
            };
            match game.apply_move(col) {
                Ok(_) => {}
                Err(GameError::Move(err)) => {
                    writeln!(output, "Invalid move: {err}. Try again.")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let col = choose_move(game.board(), engine, config)?;
            game.apply_move(col)?;
            writeln!(output, "{engine} dropped a piece in column {}", col + 1)?;
        }
        writeln!(output)?;
        writeln!(output, "{}", game.board())?;
    }

    let outcome = game.outcome();
    match outcome {
        Outcome::Win(player) => writeln!(output, "{player} wins!")?,
        Outcome::Draw => writeln!(output, "It's a draw!")?,
        Outcome::Ongoing => {}
    }
    info!("console game finished after {} moves: {outcome:?}", game.history().len());
    Ok(outcome)
}
