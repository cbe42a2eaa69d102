//! IR builder: validates a source document into a typed program.

use crate::instruction::{Instruction, OpKind};
use crate::program::Program;
use crate::source::SourceDoc;
use uvm_core::{Error, Result};

/// Build a validated program from a decoded source document.
///
/// Records are processed in document order and the first violation aborts
/// the whole build; no partial program is returned. Null and empty records
/// are skipped. A record is expected to carry exactly one operation, but a
/// record with extra pairs is tolerated: only the first pair is consulted.
pub fn build_program(doc: &SourceDoc) -> Result<Program> {
    let records = doc
        .program
        .as_ref()
        .ok_or_else(|| Error::MissingField("program".to_string()))?;

    let mut program = Program::new();
    for record in records {
        // Null and empty records contribute nothing.
        let first = record.as_ref().and_then(|pairs| pairs.iter().next());
        let (name, operand) = match first {
            Some(pair) => pair,
            None => continue,
        };

        let kind = OpKind::from_mnemonic(name)
            .ok_or_else(|| Error::UnknownOperation(name.clone()))?;
        program.push(Instruction::new(kind, *operand)?);
    }

    Ok(program)
}
