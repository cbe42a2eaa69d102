//! Shared error types for the UVM assembler toolchain.

pub mod error;

pub use error::{Error, Result};
