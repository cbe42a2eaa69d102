//! Binary packing of validated programs into the UVM wire encoding.
//!
//! Every instruction packs its opcode into the low 5 bits of its first
//! byte; the operand, when present, fills the remaining bits low-first,
//! crossing byte boundaries as needed. The combined value is truncated to
//! the kind's fixed width by keeping the low-order bytes of its
//! little-endian representation.

use crate::instruction::{Instruction, OpKind};
use crate::program::Program;

/// Result of packing a program: the raw bytes and the instruction count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedProgram {
    pub bytes: Vec<u8>,
    pub count: usize,
}

/// Pack a validated program into its binary encoding.
///
/// Infallible: every instruction reaching this stage already passed range
/// validation, so the combined value always fits the kind's fixed width.
pub fn encode_program(program: &Program) -> EncodedProgram {
    let mut bytes = Vec::with_capacity(program.encoded_len());
    for instr in program.instructions() {
        encode_instruction(instr, &mut bytes);
    }
    EncodedProgram {
        bytes,
        count: program.len(),
    }
}

/// Append one instruction's encoding to `out`.
pub fn encode_instruction(instr: &Instruction, out: &mut Vec<u8>) {
    let operand = instr.operand().unwrap_or(0);
    match instr.kind() {
        OpKind::LoadConst => {
            // A 32-bit operand shifted by 5 needs up to 37 bits; the
            // encoding keeps 5 bytes regardless.
            let value = ((operand as u64) << 5) | instr.opcode() as u64;
            out.extend_from_slice(&value.to_le_bytes()[..5]);
        }
        OpKind::ReadMem | OpKind::BitReverse => {
            // 16-bit operand, 21 combined bits, 3 bytes.
            let value = (operand << 5) | instr.opcode() as u32;
            out.extend_from_slice(&value.to_le_bytes()[..3]);
        }
        OpKind::WriteMem => out.push(instr.opcode()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn instr(kind: OpKind, operand: Option<i64>) -> Instruction {
        Instruction::new(kind, operand).unwrap()
    }

    #[test]
    fn test_reference_program_bytes() {
        let program = Program::with_instructions(vec![
            instr(OpKind::LoadConst, Some(5)),
            instr(OpKind::WriteMem, None),
            instr(OpKind::ReadMem, Some(10)),
        ]);

        let encoded = encode_program(&program);
        assert_eq!(encoded.count, 3);
        assert_eq!(
            encoded.bytes,
            vec![
                0xBD, 0x00, 0x00, 0x00, 0x00, // (5 << 5) | 29
                0x14, // opcode 20
                0x57, 0x01, 0x00, // (10 << 5) | 23
            ]
        );
    }

    #[test]
    fn test_empty_program_encodes_to_nothing() {
        let encoded = encode_program(&Program::new());
        assert_eq!(encoded.count, 0);
        assert!(encoded.bytes.is_empty());
    }

    #[test]
    fn test_max_operands() {
        let mut out = Vec::new();
        encode_instruction(&instr(OpKind::LoadConst, Some(u32::MAX as i64)), &mut out);
        // (0xFFFF_FFFF << 5) | 29 = 0x1F_FFFF_FFFD
        assert_eq!(out, vec![0xFD, 0xFF, 0xFF, 0xFF, 0x1F]);

        out.clear();
        encode_instruction(&instr(OpKind::ReadMem, Some(u16::MAX as i64)), &mut out);
        // (0xFFFF << 5) | 23 = 0x1F_FFF7
        assert_eq!(out, vec![0xF7, 0xFF, 0x1F]);
    }

    #[test]
    fn test_zero_operands_still_carry_opcode() {
        let mut out = Vec::new();
        encode_instruction(&instr(OpKind::LoadConst, Some(0)), &mut out);
        assert_eq!(out, vec![29, 0, 0, 0, 0]);

        out.clear();
        encode_instruction(&instr(OpKind::BitReverse, Some(0)), &mut out);
        assert_eq!(out, vec![3, 0, 0]);
    }

    #[test]
    fn test_encoding_is_idempotent() {
        let program = Program::with_instructions(vec![
            instr(OpKind::BitReverse, Some(1234)),
            instr(OpKind::WriteMem, None),
        ]);
        assert_eq!(encode_program(&program), encode_program(&program));
    }

    fn arb_instruction() -> impl Strategy<Value = Instruction> {
        prop_oneof![
            any::<u32>().prop_map(|v| instr(OpKind::LoadConst, Some(v as i64))),
            any::<u16>().prop_map(|v| instr(OpKind::ReadMem, Some(v as i64))),
            Just(instr(OpKind::WriteMem, None)),
            any::<u16>().prop_map(|v| instr(OpKind::BitReverse, Some(v as i64))),
        ]
    }

    proptest! {
        #[test]
        fn prop_output_length_matches_widths(
            instrs in proptest::collection::vec(arb_instruction(), 0..64)
        ) {
            let program = Program::with_instructions(instrs.clone());
            let encoded = encode_program(&program);
            prop_assert_eq!(encoded.count, instrs.len());
            prop_assert_eq!(encoded.bytes.len(), program.encoded_len());
        }

        #[test]
        fn prop_opcode_and_operand_recoverable(
            instrs in proptest::collection::vec(arb_instruction(), 0..64)
        ) {
            let program = Program::with_instructions(instrs);
            let encoded = encode_program(&program);

            let mut offset = 0;
            for instr in program.instructions() {
                let width = instr.encoded_width();
                let chunk = &encoded.bytes[offset..offset + width];
                prop_assert_eq!(chunk[0] & 0x1F, instr.opcode());

                let mut raw = [0u8; 8];
                raw[..width].copy_from_slice(chunk);
                let combined = u64::from_le_bytes(raw);
                if let Some(operand) = instr.operand() {
                    prop_assert_eq!(combined >> 5, operand as u64);
                }

                offset += width;
            }
            prop_assert_eq!(offset, encoded.bytes.len());
        }
    }
}
