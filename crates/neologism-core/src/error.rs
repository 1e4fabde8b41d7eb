//! Error types for grammar editing and yacc import.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

use crate::rule::Rule;

/// Errors produced while editing or querying a [`crate::Grammar`].
#[derive(Debug, Error)]
pub enum GrammarError {
    /// The symbol is not part of the grammar.
    #[error("{symbol} not in symbols")]
    SymbolNotFound { symbol: String },

    /// No rule with this lhs and rhs is part of the grammar.
    #[error("{rule} not in rules")]
    RuleNotFound { rule: Rule },

    /// Importing rules from a yacc file failed.
    #[error(transparent)]
    Yacc(#[from] YaccError),
}

/// Errors produced while turning a yacc file into rules.
#[derive(Debug, Error)]
pub enum YaccError {
    /// The bison executable could not be started.
    #[error("bison executable not found: {executable:?}. PATH: {path_var:?}")]
    BisonNotFound {
        executable: PathBuf,
        path_var: OsString,
    },

    /// bison ran but rejected the input.
    #[error("Failed to parse yacc file: {path:?}")]
    Decode { path: PathBuf },

    /// IO error around temporary files or the child process.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML report was not well-formed.
    #[error("invalid bison XML report: {0}")]
    Xml(String),

    /// The XML report parsed but did not have the expected shape.
    #[error("malformed bison XML report: {0}")]
    MalformedReport(String),
}

impl From<roxmltree::Error> for YaccError {
    fn from(err: roxmltree::Error) -> Self {
        YaccError::Xml(err.to_string())
    }
}

/// Convenience result alias for grammar operations.
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;

/// Convenience result alias for yacc import.
pub type YaccResult<T> = std::result::Result<T, YaccError>;
