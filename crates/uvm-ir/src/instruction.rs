//! Instruction set for the UVM machine.

use serde::{Deserialize, Serialize};

use uvm_core::{Error, Result};

/// Operation kind. The instruction set is fixed at these four operations,
/// each bound to its numeric opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    LoadConst,
    ReadMem,
    WriteMem,
    BitReverse,
}

/// All operation kinds, in opcode-table order.
pub const OP_KINDS: [OpKind; 4] = [
    OpKind::LoadConst,
    OpKind::ReadMem,
    OpKind::WriteMem,
    OpKind::BitReverse,
];

impl OpKind {
    /// Numeric opcode, occupying the low 5 bits of the first encoded byte.
    pub const fn opcode(self) -> u8 {
        match self {
            OpKind::LoadConst => 29,
            OpKind::ReadMem => 23,
            OpKind::WriteMem => 20,
            OpKind::BitReverse => 3,
        }
    }

    /// Source mnemonic as written in the `program` document.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            OpKind::LoadConst => "load_const",
            OpKind::ReadMem => "read_mem",
            OpKind::WriteMem => "write_mem",
            OpKind::BitReverse => "bitreverse",
        }
    }

    /// Resolve a source mnemonic. Matching is exact and case-sensitive.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        match name {
            "load_const" => Some(OpKind::LoadConst),
            "read_mem" => Some(OpKind::ReadMem),
            "write_mem" => Some(OpKind::WriteMem),
            "bitreverse" => Some(OpKind::BitReverse),
            _ => None,
        }
    }

    /// Largest accepted operand value, or `None` for operations that take
    /// no operand.
    pub const fn operand_max(self) -> Option<u64> {
        match self {
            OpKind::LoadConst => Some(u32::MAX as u64),
            OpKind::ReadMem | OpKind::BitReverse => Some(u16::MAX as u64),
            OpKind::WriteMem => None,
        }
    }

    /// Returns true if this operation carries an operand.
    pub const fn has_operand(self) -> bool {
        self.operand_max().is_some()
    }

    /// Number of bytes this operation occupies in the packed output.
    pub const fn encoded_width(self) -> usize {
        match self {
            OpKind::LoadConst => 5,
            OpKind::ReadMem | OpKind::BitReverse => 3,
            OpKind::WriteMem => 1,
        }
    }
}

/// A single validated instruction.
///
/// The opcode is derived from the kind and the operand is range-checked at
/// construction, so downstream stages never re-validate. Operand is present
/// iff the kind requires one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Instruction {
    kind: OpKind,
    operand: Option<u32>,
}

impl Instruction {
    /// Build an instruction, validating the operand against the kind's range.
    ///
    /// Operations without an operand discard any supplied value unchecked.
    /// Operations with one reject absent values and values outside the
    /// kind's range, negatives included.
    pub fn new(kind: OpKind, operand: Option<i64>) -> Result<Self> {
        let operand = match kind.operand_max() {
            None => None,
            Some(max) => {
                let value = operand.ok_or(Error::MissingOperand(kind.mnemonic()))?;
                if value < 0 || value as u64 > max {
                    return Err(Error::OperandOutOfRange {
                        op: kind.mnemonic(),
                        value,
                        max,
                    });
                }
                Some(value as u32)
            }
        };
        Ok(Self { kind, operand })
    }

    pub fn kind(&self) -> OpKind {
        self.kind
    }

    pub fn opcode(&self) -> u8 {
        self.kind.opcode()
    }

    pub fn operand(&self) -> Option<u32> {
        self.operand
    }

    pub fn encoded_width(&self) -> usize {
        self.kind.encoded_width()
    }
}
