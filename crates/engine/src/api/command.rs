//! Terminal command parsing.

use std::str::FromStr;

use deeper_domain::{CategoryId, DragRelease, QuestionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the card stack
    Queue,
    Right,
    Left,
    /// Release a drag with the given offset and velocity
    Drag(DragRelease),
    Toggle(CategoryId),
    All,
    Clear,
    Journal,
    Requeue(QuestionId),
    Categories,
    /// Retry a failed progress write
    Flush,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("Type a command, or `help` for the list")]
    Empty,

    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),

    #[error("`{command}` needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{command}`: invalid {argument} `{value}`")]
    InvalidArgument {
        command: &'static str,
        argument: &'static str,
        value: String,
    },

    #[error("`{0}` takes no further arguments")]
    UnexpectedArgument(&'static str),
}

pub const HELP: &str = "\
Commands:
  queue                       show the card stack
  right | r                   discuss the front card
  left | l                    save the front card for later
  drag <offset> <velocity>    release a drag gesture on the front card
  toggle <category-id>        switch a category on or off
  all                         select every category
  clear                       deselect every category
  categories                  list categories and quota use
  journal                     saved and discussed questions
  requeue <question-id>       move a saved question back into the stack
  flush                       retry a failed progress write
  reset                       forget all progress
  help                        this list
  quit                        exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "queue" | "q" => Self::Queue,
            "right" | "r" => Self::Right,
            "left" | "l" => Self::Left,
            "drag" => {
                let offset_x = argument(&mut words, "drag", "offset")?;
                let velocity_x = argument(&mut words, "drag", "velocity")?;
                Self::Drag(DragRelease::new(offset_x, velocity_x))
            }
            "toggle" | "t" => Self::Toggle(argument(&mut words, "toggle", "category id")?),
            "all" => Self::All,
            "clear" => Self::Clear,
            "journal" | "j" => Self::Journal,
            "requeue" => Self::Requeue(argument(&mut words, "requeue", "question id")?),
            "categories" | "c" => Self::Categories,
            "flush" => Self::Flush,
            "reset" => Self::Reset,
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(name.to_string())),
        };

        if words.next().is_some() {
            return Err(CommandError::UnexpectedArgument(command.name()));
        }
        Ok(command)
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Queue => "queue",
            Self::Right => "right",
            Self::Left => "left",
            Self::Drag(_) => "drag",
            Self::Toggle(_) => "toggle",
            Self::All => "all",
            Self::Clear => "clear",
            Self::Journal => "journal",
            Self::Requeue(_) => "requeue",
            Self::Categories => "categories",
            Self::Flush => "flush",
            Self::Reset => "reset",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn argument<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<T, CommandError> {
    let raw = words.next().ok_or(CommandError::MissingArgument { command, argument })?;
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        argument,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let cases = [
            ("queue", Command::Queue),
            ("R", Command::Right),
            ("left", Command::Left),
            ("drag -150 0", Command::Drag(DragRelease::new(-150.0, 0.0))),
            ("toggle 3", Command::Toggle(CategoryId::new(3))),
            ("all", Command::All),
            ("clear", Command::Clear),
            ("journal", Command::Journal),
            ("requeue 12", Command::Requeue(QuestionId::new(12))),
            ("categories", Command::Categories),
            ("flush", Command::Flush),
            ("reset", Command::Reset),
            ("?", Command::Help),
            ("  quit  ", Command::Quit),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>(), Ok(expected), "line: {line:?}");
        }
    }

    #[test]
    fn reports_argument_problems() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".into()))
        );
        assert_eq!(
            "drag 10".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "drag",
                argument: "velocity"
            })
        );
        assert_eq!(
            "toggle 0".parse::<Command>(),
            Err(CommandError::InvalidArgument {
                command: "toggle",
                argument: "category id",
                value: "0".into()
            })
        );
        assert_eq!(
            "right now".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("right"))
        );
    }
}
