//! Error type for the `triat` binary, following `faxt::error::FaxtError`'s
//! shape: one `thiserror` enum with `#[from]` conversions plus a local
//! `Result` alias.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriatError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("runtime fault: {0}")]
    Runtime(String),

    #[error("input program has no `main` block, nothing to run")]
    EmptyProgram,
}

pub type Result<T> = std::result::Result<T, TriatError>;
