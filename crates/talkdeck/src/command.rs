use crate::catalog::DepartmentId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    // 0-based slide index.
    GoTo(usize),
    Open(DepartmentId),
    Close,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("'{0}' takes no argument")]
    UnexpectedArgument(&'static str),
    #[error("invalid slide index '{0}'")]
    InvalidIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or(CommandError::Empty)?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(CommandError::Unknown(line.trim().to_string()));
        }

        let no_arg = |name: &'static str, cmd: Command| match arg {
            Some(_) => Err(CommandError::UnexpectedArgument(name)),
            None => Ok(cmd),
        };

        match verb.to_ascii_lowercase().as_str() {
            "next" => no_arg("next", Command::Next),
            "prev" | "previous" => no_arg("prev", Command::Previous),
            "close" => no_arg("close", Command::Close),
            "goto" => {
                let raw = arg.ok_or(CommandError::MissingArgument("goto"))?;
                raw.parse()
                    .map(Command::GoTo)
                    .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
            }
            "open" => arg
                .map(|id| Command::Open(DepartmentId::new(id)))
                .ok_or(CommandError::MissingArgument("open")),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Next => write!(f, "next"),
            Command::Previous => write!(f, "prev"),
            Command::GoTo(index) => write!(f, "goto {}", index),
            Command::Open(id) => write!(f, "open {}", id),
            Command::Close => write!(f, "close"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cases = vec![
            ("next", Command::Next),
            ("  NEXT  ", Command::Next),
            ("prev", Command::Previous),
            ("previous", Command::Previous),
            ("goto 0", Command::GoTo(0)),
            ("goto 12", Command::GoTo(12)),
            ("open management", Command::Open(DepartmentId::new("management"))),
            ("close", Command::Close),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>(), Ok(expected), "{line:?}");
        }
    }

    #[test]
    fn test_display_parses_back() {
        let cases = vec![
            Command::Next,
            Command::Previous,
            Command::GoTo(0),
            Command::GoTo(12),
            Command::Open(DepartmentId::new("management")),
            Command::Close,
        ];

        for cmd in cases {
            let line = cmd.to_string();
            assert_eq!(line.parse::<Command>(), Ok(cmd), "{line:?}");
        }
    }

    #[test]
    fn test_reject_malformed() {
        let cases = vec![
            ("", CommandError::Empty),
            ("jump", CommandError::Unknown("jump".into())),
            ("goto", CommandError::MissingArgument("goto")),
            ("goto -1", CommandError::InvalidIndex("-1".into())),
            ("goto two", CommandError::InvalidIndex("two".into())),
            ("open", CommandError::MissingArgument("open")),
            ("next 3", CommandError::UnexpectedArgument("next")),
            ("goto 1 2", CommandError::Unknown("goto 1 2".into())),
        ];

        for (line, expected) in cases {
            assert_eq!(line.parse::<Command>(), Err(expected), "{line:?}");
        }
    }
}
