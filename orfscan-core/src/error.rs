use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrfError {
    #[error("configuration error: {msg}")]
    Configuration { msg: String },

    #[error("invalid base '{ch}' at position {pos}")]
    InvalidBase { ch: char, pos: usize },

    #[error("malformed fasta input at line {line}: {msg}")]
    MalformedInput { msg: &'static str, line: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("table write error: {0}")]
    TableWrite(#[from] csv::Error),
}

impl OrfError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        OrfError::Configuration { msg: msg.into() }
    }

    /// Errors scoped to a single sequence; the stream can continue past them.
    pub fn is_record_local(&self) -> bool {
        matches!(self, OrfError::InvalidBase { .. })
    }
}

pub type OrfResult<T> = Result<T, OrfError>;
