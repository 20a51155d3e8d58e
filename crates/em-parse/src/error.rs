//! Error types for em-parse

use thiserror::Error;

/// Migration script parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Empty migration id (P001)
    #[error("[P001] Migration id is empty")]
    EmptyId,

    /// Script is not UTF-8 (P002)
    #[error("[P002] Migration script is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// `-- +migrate` with nothing after it (P003)
    #[error("[P003] Incomplete migration command at line {line}")]
    IncompleteCommand { line: usize },

    /// Statement text left without a terminator (P004)
    #[error("[P004] Statement ending at line {line} must be terminated by a semicolon or '-- +migrate StatementEnd' marker")]
    MissingTerminator { line: usize },

    /// StatementBegin never closed (P005)
    #[error("[P005] Saw '-- +migrate StatementBegin' at line {line} with no matching '-- +migrate StatementEnd'")]
    UnterminatedBlock { line: usize },

    /// No direction annotation anywhere in the script (P006)
    #[error("[P006] No Up/Down annotations found, so no statements would be executed")]
    NoAnnotations,
}

/// Result type alias for ParseError
pub type ParseResult<T> = Result<T, ParseError>;
