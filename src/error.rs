use std::fmt;

/// Errors that can occur while parsing, validating, or converting numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Decimal input was empty or held a character outside '0'-'9'
    InvalidNumberFormat {
        char: Option<char>,
        position: usize,
    },
    /// The digit pool is too short or repeats a character
    InvalidPool { reason: String },
    /// The input contains a character not present in the pool
    InvalidDigit { char: char, position: usize },
    /// A zero divisor reached the arithmetic layer
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNumberFormat {
                char: Some(c),
                position,
            } => {
                write!(
                    f,
                    "invalid decimal number: character '{}' at position {}",
                    c, position
                )
            }
            Error::InvalidNumberFormat { char: None, .. } => {
                write!(f, "invalid decimal number: empty input")
            }
            Error::InvalidPool { reason } => write!(f, "invalid digit pool: {}", reason),
            Error::InvalidDigit { char: c, position } => {
                write!(
                    f,
                    "invalid digit '{}' at position {}: not in the pool",
                    c, position
                )
            }
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}
