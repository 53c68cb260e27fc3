//! Terminal input parsing.

/// One user action entered at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title>`; the title is passed through untrimmed to the add form.
    Add(String),
    /// `toggle <n>` with `n` the 1-based list position.
    Toggle(usize),
    /// `delete <n>` with `n` the 1-based list position.
    Delete(usize),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{0}' needs a list number, e.g. '{0} 1'")]
    MissingPosition(&'static str),

    #[error("'{0}' is not a list number")]
    BadPosition(String),
}

pub const HELP: &str = "\
commands:
  add <title>    add a todo
  toggle <n>     flip completion of item n
  delete <n>     delete item n
  list           reload and show the list
  help           show this message
  quit           exit";

impl Command {
    /// Parse a line of input. Blank input yields `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Ok(None),
            "add" | "a" => Self::Add(rest.to_string()),
            "toggle" | "t" => Self::Toggle(position("toggle", rest)?),
            "delete" | "rm" | "d" => Self::Delete(position("delete", rest)?),
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(ParseError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn position(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ParseError::MissingPosition(command));
    }
    arg.parse()
        .map_err(|_| ParseError::BadPosition(arg.to_string()))
}
