//! Error types for expression evaluation and preference storage

use std::path::PathBuf;
use thiserror::Error;

/// Why an expression or scientific function could not produce a value.
///
/// These never escape the engine: it records the error, resets its buffer
/// and shows `"Error"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("malformed number '{0}'")]
    MalformedNumber(String),
    #[error("unexpected token '{token}' at {pos}")]
    UnexpectedToken { token: String, pos: usize },
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("{function} is undefined for {operand}")]
    Domain { function: &'static str, operand: f64 },
    #[error("result is not a finite number")]
    NotFinite,
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;
