use std::str::FromStr;

use sakura_core::{Direction, Position, Rotation};

/// One command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    /// Rotate a cell, or the focused cell if no position is given.
    Rotate {
        pos: Option<Position>,
        rotation: Rotation,
    },
    /// Restore a cell, or the focused cell, to its original orientation.
    PutInPlace(Option<Position>),
    MoveFocus(Direction),
    Shuffle,
    Peek(bool),
    NewRound,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum ActionParseError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {command:?}, type `help` for a list")]
    UnknownCommand {
        command: String,
    },
    #[display("invalid argument {arg:?} for `{command}`")]
    InvalidArgument {
        command: &'static str,
        arg: String,
    },
}

pub(crate) const HELP: &str = "\
commands:
  cw [X Y]       rotate a cell clockwise (the focused cell by default)
  ccw [X Y]      rotate a cell counter-clockwise
  place [X Y]    put a cell back in place
  h | j | k | l  move the focus left, down, up or right
  shuffle        scramble the board and start playing
  peek [on|off]  show the original orientation
  new            generate a new round
  show           print the board again
  help           print this list
  quit           leave";

impl FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(command) = words.next() else {
            return Err(ActionParseError::Empty);
        };
        let args: Vec<&str> = words.collect();
        let action = match command {
            "cw" | "r" => Action::Rotate {
                pos: parse_position("cw", &args)?,
                rotation: Rotation::Clockwise,
            },
            "ccw" | "e" => Action::Rotate {
                pos: parse_position("ccw", &args)?,
                rotation: Rotation::CounterClockwise,
            },
            "place" | "p" => Action::PutInPlace(parse_position("place", &args)?),
            "h" | "left" => Action::MoveFocus(Direction::Left),
            "k" | "up" => Action::MoveFocus(Direction::Top),
            "l" | "right" => Action::MoveFocus(Direction::Right),
            "j" | "down" => Action::MoveFocus(Direction::Bottom),
            "shuffle" | "s" => Action::Shuffle,
            "peek" => match args.as_slice() {
                [] | ["on"] => Action::Peek(true),
                ["off"] => Action::Peek(false),
                [arg, ..] => {
                    return Err(ActionParseError::InvalidArgument {
                        command: "peek",
                        arg: (*arg).to_owned(),
                    });
                }
            },
            "new" | "n" => Action::NewRound,
            "show" => Action::Show,
            "help" | "?" => Action::Help,
            "quit" | "q" | "exit" => Action::Quit,
            _ => {
                return Err(ActionParseError::UnknownCommand {
                    command: command.to_owned(),
                });
            }
        };
        Ok(action)
    }
}

fn parse_position(
    command: &'static str,
    args: &[&str],
) -> Result<Option<Position>, ActionParseError> {
    let invalid = |arg: &str| ActionParseError::InvalidArgument {
        command,
        arg: arg.to_owned(),
    };
    match args {
        [] => Ok(None),
        [x, y] => {
            let x = x.parse().map_err(|_| invalid(*x))?;
            let y = y.parse().map_err(|_| invalid(*y))?;
            Ok(Some(Position::new(x, y)))
        }
        [arg] | [_, _, arg, ..] => Err(invalid(*arg)),
    }
}
