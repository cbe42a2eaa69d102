//! Intermediate representation and binary encoding for UVM programs.
//!
//! This crate implements the two-stage assembly pipeline:
//! - building a validated, typed instruction sequence from a declarative
//!   source document (`source` + `builder`), and
//! - packing that sequence into the variable-width UVM binary encoding
//!   (`encoder`).
//!
//! Both stages are pure: the builder either yields a complete program or
//! the first validation failure in document order, and the encoder cannot
//! fail on a program that passed the builder.

pub mod builder;
pub mod encoder;
pub mod instruction;
pub mod listing;
pub mod program;
pub mod source;

pub use builder::build_program;
pub use encoder::{encode_program, EncodedProgram};
pub use instruction::{Instruction, OpKind};
pub use program::Program;
pub use source::{SourceDoc, SourceRecord};
