use thiserror::Error;

pub type Result<T> = std::result::Result<T, MiningError>;

#[derive(Error, Debug)]
pub enum MiningError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("database is empty: no sequences were retained")]
    EmptyDatabase,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed database line {line}: {source}")]
    ParseDatabase {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("engine used out of order: expected state {expected}, was in {actual}")]
    OutOfOrder {
        expected: &'static str,
        actual: &'static str,
    },
}
