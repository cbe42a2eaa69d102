//! Human-readable rendering of IR programs.
//!
//! Presentation only: nothing here validates or mutates, it just shows
//! what the builder produced and what the encoder will emit.

use std::fmt::Write;

use crate::encoder::encode_instruction;
use crate::instruction::Instruction;
use crate::program::Program;

/// Format one instruction as a single diagnostic line.
pub fn format_instruction(instr: &Instruction) -> String {
    match instr.operand() {
        Some(operand) => format!(
            "{} opcode={} operand={} (0x{:X})",
            instr.kind().mnemonic(),
            instr.opcode(),
            operand,
            operand
        ),
        None => format!("{} opcode={}", instr.kind().mnemonic(), instr.opcode()),
    }
}

/// Render a whole program as an indexed listing, one instruction per line,
/// with the packed bytes of each instruction in hex.
pub fn render_listing(program: &Program) -> String {
    let mut out = String::new();
    let mut scratch = Vec::new();

    for (index, instr) in program.instructions().iter().enumerate() {
        scratch.clear();
        encode_instruction(instr, &mut scratch);
        let hex: Vec<String> = scratch.iter().map(|b| format!("{:02X}", b)).collect();
        let _ = writeln!(
            out,
            "{:>4}: {:<40} | {}",
            index,
            format_instruction(instr),
            hex.join(" ")
        );
    }

    out
}
