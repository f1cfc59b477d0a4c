use std::result;
use std::fmt::{self, Display};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    InvalidInput,
    IllegalCharacter { line: usize, character: char },
    UnterminatedString { line: usize },
    MalformedNumber { line: usize, lexeme: String },
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn invalid_input<S: Into<String>>(message: S) -> Error {
        let kind = ErrorKind::InvalidInput;
        Error { kind, message: message.into() }
    }

    pub fn illegal_character(line: usize, character: char) -> Error {
        let kind = ErrorKind::IllegalCharacter { line, character };
        Error { kind, message: format!("Illegal character '{}'.", character.escape_default()) }
    }

    pub fn unterminated_string(line: usize) -> Error {
        let kind = ErrorKind::UnterminatedString { line };
        Error { kind, message: "Unterminated string.".into() }
    }

    pub fn malformed_number<S: Into<String>>(line: usize, lexeme: S) -> Error {
        let lexeme = lexeme.into();
        let message = format!("Could not convert {} into a number.", lexeme);
        let kind = ErrorKind::MalformedNumber { line, lexeme };
        Error { kind, message }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The line scanning stopped on, for lexical errors.
    pub fn line(&self) -> Option<usize> {
        use ErrorKind::*;
        match self.kind() {
            IllegalCharacter { line, .. }
            | UnterminatedString { line }
            | MalformedNumber { line, .. } => Some(*line),
            InvalidInput | Io(_) => None,
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.line().is_some()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line() {
            Some(line) => write!(f, "[line {}] Error: {}", line, self.message),
            None => write!(f, "Error: {}", self.message),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        match e.kind {
            ErrorKind::Io(inner) => inner,
            ErrorKind::InvalidInput => std::io::Error::new(InvalidInput, e),
            _ => std::io::Error::new(InvalidData, e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        let message = format!("Could not read source: {}", e);
        Error { kind: ErrorKind::Io(e), message }
    }
}
