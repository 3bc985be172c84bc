use std::thread;

use sakura_core::Position;
use sakura_game::{Game, GameError, RotateOutcome};

use crate::{
    action::{Action, HELP},
    board,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn handle(game: &mut Game, action: Action) -> Flow {
    match action {
        Action::Rotate { pos, rotation } => {
            if let Some(pos) = target(game, pos) {
                let result = game.rotate(pos, rotation);
                report_move(game, result);
            }
        }
        Action::PutInPlace(pos) => {
            if let Some(pos) = target(game, pos) {
                let result = game.put_in_place(pos);
                report_move(game, result);
            }
        }
        Action::MoveFocus(dir) => {
            if game.is_input_blocked() {
                println!("{}", blocked_reason(game));
            } else {
                game.move_focus(dir);
                board::print(game);
            }
        }
        Action::Shuffle => shuffle(game),
        Action::Peek(on) => {
            if game.set_peek(on) == on {
                board::print(game);
            } else {
                println!("nothing to peek at, the board is solved");
            }
        }
        Action::NewRound => {
            game.regenerate();
            board::print(game);
            auto_shuffle(game);
        }
        Action::Show => board::print(game),
        Action::Help => println!("{HELP}"),
        Action::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Shuffles a freshly generated round if the configuration asks for it.
pub(crate) fn auto_shuffle(game: &mut Game) {
    if !game.should_auto_shuffle() {
        return;
    }
    let Some(delay) = game.config().auto_shuffle.delay() else {
        return;
    };
    if !delay.is_zero() {
        println!("shuffling in {} ms...", delay.as_millis());
        thread::sleep(delay);
    }
    shuffle(game);
}

fn shuffle(game: &mut Game) {
    match game.shuffle() {
        Ok(_) => board::print(game),
        Err(err) => {
            log::warn!("shuffle failed: {err}");
            println!("{err}; try `new`");
        }
    }
}

fn target(game: &Game, pos: Option<Position>) -> Option<Position> {
    if game.is_input_blocked() {
        println!("{}", blocked_reason(game));
        return None;
    }
    let pos = pos.or(game.focus());
    if pos.is_none() {
        println!("no cell is focused");
    }
    pos
}

fn blocked_reason(game: &Game) -> &'static str {
    if game.is_peeking() {
        "peeking, type `peek off` first"
    } else {
        "the board is solved, type `shuffle` or `new`"
    }
}

fn report_move(game: &Game, result: Result<RotateOutcome, GameError>) {
    match result {
        Ok(outcome) => {
            board::print(game);
            if outcome.solved {
                println!("solved!");
            }
        }
        Err(err) => println!("{err}"),
    }
}
