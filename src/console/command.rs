use thiserror::Error;

/// One line of user input, parsed.
///
/// Board coordinates are 1-based at the prompt, matching how the board is
/// described to the user; the loop converts to 0-based before touching the
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Live { row: i32, col: i32, name: Option<String> },
    Dead { row: i32, col: i32 },
    Find { name: String },
    Place { pattern: String, row: i32, col: i32 },
    Random { count: usize },
    Show,
    Tick,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command, try `help`")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a number")]
    BadNumber(String),
}

fn number<T: std::str::FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse().map_err(|_| ParseError::BadNumber(word.to_owned()))
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, rest) = words.split_first().ok_or(ParseError::Empty)?;

        match head.to_ascii_lowercase().as_str() {
            "live" => match rest {
                [row, col] => Ok(Command::Live {
                    row: number(row)?,
                    col: number(col)?,
                    name: None,
                }),
                [row, col, name] => Ok(Command::Live {
                    row: number(row)?,
                    col: number(col)?,
                    name: Some((*name).to_owned()),
                }),
                _ => Err(ParseError::Usage("live <row> <col> [name]")),
            },
            "dead" => match rest {
                [row, col] => Ok(Command::Dead {
                    row: number(row)?,
                    col: number(col)?,
                }),
                _ => Err(ParseError::Usage("dead <row> <col>")),
            },
            "find" => match rest {
                [name] => Ok(Command::Find {
                    name: (*name).to_owned(),
                }),
                _ => Err(ParseError::Usage("find <name>")),
            },
            "place" => match rest {
                [pattern, row, col] => Ok(Command::Place {
                    pattern: (*pattern).to_owned(),
                    row: number(row)?,
                    col: number(col)?,
                }),
                _ => Err(ParseError::Usage("place <pattern> <row> <col>")),
            },
            "random" => match rest {
                [count] => Ok(Command::Random {
                    count: number(count)?,
                }),
                _ => Err(ParseError::Usage("random <count>")),
            },
            "show" => Ok(Command::Show),
            "tick" => Ok(Command::Tick),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_owned())),
        }
    }
}
