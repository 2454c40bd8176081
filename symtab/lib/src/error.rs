use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading or rendering symbol tables.
#[derive(Debug, Error)]
pub enum SymbolsError {
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to serialize symbol table: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Why a single line could not be read as a symbol table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Line is not a symbol table entry: `{line}`")]
    Malformed { line: String },

    #[error("Invalid hex value for {field}: `{value}`")]
    InvalidHex { field: &'static str, value: String },

    #[error("Invalid flag `{found}` at position {position}")]
    InvalidFlag { position: usize, found: char },

    #[error("Expected 7 flag characters, found {found}")]
    FlagCount { found: usize },
}
