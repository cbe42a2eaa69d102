//! Error types for the assembly pipeline.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse source document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("operand {value} for {op} out of range (max {max})")]
    OperandOutOfRange {
        op: &'static str,
        value: i64,
        max: u64,
    },

    #[error("operation {0} requires an operand")]
    MissingOperand(&'static str),
}
