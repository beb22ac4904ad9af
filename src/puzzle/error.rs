use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid grid: {}", msg)]
pub struct InvalidGridError {
    msg: String,
}

impl InvalidGridError {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum GridFromFileError {
    #[error("error reading grid file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseGridError),
    #[error(transparent)]
    InvalidGrid(#[from] InvalidGridError),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseGridError {
    error_type: ParseGridErrorType,
    token: Option<String>,
    line: Option<usize>,
}

impl ParseGridError {
    pub(crate) fn new(error_type: ParseGridErrorType, token: impl Display, line: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            line: Some(line),
        }
    }

    pub(crate) const fn from_type(error_type: ParseGridErrorType) -> Self {
        Self {
            error_type,
            token: None,
            line: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn error_type(&self) -> &ParseGridErrorType {
        &self.error_type
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseGridErrorType {
    InvalidToken,
    ValueOutOfRange,
    WrongColumnCount,
    WrongRowCount,
}

impl Display for ParseGridErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseGridErrorType::InvalidToken => "Invalid token",
            ParseGridErrorType::ValueOutOfRange => "Value out of range",
            ParseGridErrorType::WrongColumnCount => "Expected 9 values in row",
            ParseGridErrorType::WrongRowCount => "Expected 9 rows",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseGridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": found \"{}\"", token)?;
        }
        if let Some(line) = &self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}
