//! Shared encoders and fixtures.

#![allow(dead_code)]

use rvdis_core::isa::module::{RV32GC, RV32I, RV64GC};
use rvdis_core::{Isa, Xlen};

// ──────────────────────────────────────────────────────────
// Opcodes
// ──────────────────────────────────────────────────────────

pub const OP_LUI: u32 = 0b011_0111;
pub const OP_AUIPC: u32 = 0b001_0111;
pub const OP_JAL: u32 = 0b110_1111;
pub const OP_JALR: u32 = 0b110_0111;
pub const OP_BRANCH: u32 = 0b110_0011;
pub const OP_LOAD: u32 = 0b000_0011;
pub const OP_STORE: u32 = 0b010_0011;
pub const OP_LOAD_FP: u32 = 0b000_0111;
pub const OP_STORE_FP: u32 = 0b010_0111;
pub const OP_IMM: u32 = 0b001_0011;
pub const OP_IMM_32: u32 = 0b001_1011;
pub const OP_REG: u32 = 0b011_0011;
pub const OP_REG_32: u32 = 0b011_1011;
pub const OP_AMO: u32 = 0b010_1111;
pub const OP_FP: u32 = 0b101_0011;
pub const OP_FMADD: u32 = 0b100_0011;
pub const OP_FNMADD: u32 = 0b100_1111;
pub const OP_SYSTEM: u32 = 0b111_0011;

// ──────────────────────────────────────────────────────────
// Encoding helpers (construct raw 32-bit instructions)
// ──────────────────────────────────────────────────────────

/// Encode an R-type instruction.
pub fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an R4-type (fused multiply-add) instruction.
pub fn r4_type(opcode: u32, rd: u32, rm: u32, rs1: u32, rs2: u32, rs3: u32, fmt: u32) -> u32 {
    (rs3 & 0x1F) << 27 | (fmt & 0x3) << 25 | r_type(opcode, rd, rm, rs1, rs2, 0)
}

/// Encode an I-type instruction.
pub fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode an S-type instruction.
pub fn s_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    hi << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | lo << 7
        | (opcode & 0x7F)
}

/// Encode a B-type instruction.
pub fn b_type(opcode: u32, funct3: u32, rs1: u32, rs2: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    bit12 << 31
        | bits10_5 << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | bits4_1 << 8
        | bit11 << 7
        | (opcode & 0x7F)
}

/// Encode a U-type instruction from its 20-bit upper immediate field.
pub fn u_type(opcode: u32, rd: u32, imm20: u32) -> u32 {
    (imm20 & 0xF_FFFF) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Encode a J-type instruction.
pub fn j_type(opcode: u32, rd: u32, imm: i32) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    bit20 << 31 | bits10_1 << 21 | bit11 << 20 | bits19_12 << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

// ──────────────────────────────────────────────────────────
// Compressed encoders
// ──────────────────────────────────────────────────────────

/// Encode a CJ-type jump (C.J / C.JAL) with the given funct3.
pub fn cj_type(funct3: u32, offset: i32) -> u32 {
    let v = offset as u32;
    (funct3 & 0x7) << 13
        | ((v >> 11) & 1) << 12
        | ((v >> 4) & 1) << 11
        | ((v >> 8) & 3) << 9
        | ((v >> 10) & 1) << 8
        | ((v >> 6) & 1) << 7
        | ((v >> 7) & 1) << 6
        | ((v >> 1) & 7) << 3
        | ((v >> 5) & 1) << 2
        | 0b01
}

/// Encode a CB-type branch (C.BEQZ / C.BNEZ); `rs1p` is the 3-bit x8–x15 field.
pub fn cb_branch(funct3: u32, rs1p: u32, offset: i32) -> u32 {
    let v = offset as u32;
    (funct3 & 0x7) << 13
        | ((v >> 8) & 1) << 12
        | ((v >> 3) & 3) << 10
        | (rs1p & 0x7) << 7
        | ((v >> 6) & 3) << 5
        | ((v >> 1) & 3) << 3
        | ((v >> 5) & 1) << 2
        | 0b01
}

/// Encode a CI-type instruction with a signed 6-bit immediate.
pub fn ci_type(funct3: u32, rd: u32, imm: i32, quadrant: u32) -> u32 {
    let v = imm as u32;
    (funct3 & 0x7) << 13 | ((v >> 5) & 1) << 12 | (rd & 0x1F) << 7 | (v & 0x1F) << 2 | quadrant
}

// ──────────────────────────────────────────────────────────
// ISA fixtures
// ──────────────────────────────────────────────────────────

pub fn rv64gc() -> Isa {
    Isa::new(Xlen::Rv64, RV64GC).expect("RV64GC builds")
}

pub fn rv32gc() -> Isa {
    Isa::new(Xlen::Rv32, RV32GC).expect("RV32GC builds")
}

pub fn rv32i() -> Isa {
    Isa::new(Xlen::Rv32, RV32I).expect("RV32I builds")
}

/// Disassembles `word` at `address` and returns only the assembly text.
pub fn asm(isa: &Isa, address: u64, word: u32) -> String {
    isa.disassemble(address, word).assembly
}
