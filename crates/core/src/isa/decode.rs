//! RISC-V Field Decoders.
//!
//! One routine per instruction format. Field positions are architecturally
//! fixed, so these read the raw word directly rather than consulting the
//! layout string a definition was compiled from. Immediates are reassembled
//! from their scattered bit positions and sign-extended at the width the
//! manual declares for that format.
//!
//! Compressed formats use 3-bit register fields (`rd'`, `rs1'`, `rs2'`) that
//! address x8–x15 only; they are returned already remapped.

use crate::isa::abi::REG_SP;
use crate::isa::instruction::{InstructionBits, sign_extend};

/// Bit shift for extracting the I-Type immediate (bits 20-31).
const I_IMM_SHIFT: u32 = 20;

/// Total number of bits in the I-Type and S-Type immediates.
const IS_IMM_BITS: u32 = 12;

/// Total number of bits in the B-Type immediate (13 bits, bit 0 implicit).
const B_IMM_BITS: u32 = 13;

/// Bit mask for extracting the U-Type immediate field (bits 12-31).
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Total number of bits in the J-Type immediate (21 bits, bit 0 implicit).
const J_IMM_BITS: u32 = 21;

/// First register reachable through a compressed 3-bit register field.
const C_REG_BASE: usize = 8;

/// Operand fields produced by a format decoder.
///
/// Each decoder fills only the fields its format defines; the rest stay at
/// their default of zero/false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodedFields {
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Third source register index (R4 only).
    pub rs3: usize,
    /// Sign- or zero-extended immediate, already scaled.
    pub imm: i64,
    /// CSR address (Zicsr instructions).
    pub csr: u32,
    /// Shift amount.
    pub shamt: u32,
    /// Rounding mode (floating-point funct3).
    pub rm: u32,
    /// Acquire ordering bit (atomics).
    pub aq: bool,
    /// Release ordering bit (atomics).
    pub rl: bool,
}

/// Maps a compressed 3-bit register field to x8–x15.
#[inline(always)]
const fn c_reg(field: u32) -> usize {
    C_REG_BASE + field as usize
}

// ──────────────────────────────────────────────────────────
// 32-bit formats
// ──────────────────────────────────────────────────────────

/// Decodes an R-type instruction.
///
/// R-Type format: `funct7 | rs2 | rs1 | funct3/rm | rd | opcode`.
/// For atomics, bits 26 and 25 of funct7 are the aq and rl flags.
pub fn decode_r(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        rm: inst.funct3(),
        aq: inst.bit(26) != 0,
        rl: inst.bit(25) != 0,
        ..DecodedFields::default()
    }
}

/// Decodes an R4-type (fused multiply-add) instruction.
///
/// R4-Type format: `rs3 | fmt | rs2 | rs1 | rm | rd | opcode`.
pub fn decode_r4(inst: u32) -> DecodedFields {
    DecodedFields {
        rs3: inst.rs3(),
        ..decode_r(inst)
    }
}

/// Decodes an I-type instruction with a signed 12-bit immediate.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
pub fn decode_i(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.rd(),
        rs1: inst.rs1(),
        imm: ((inst as i32) >> I_IMM_SHIFT) as i64,
        ..DecodedFields::default()
    }
}

/// Decodes a Zicsr instruction: the I-type immediate is an unsigned CSR address.
///
/// For the immediate forms the `rs1` field holds the 5-bit `zimm`.
pub fn decode_i_csr(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.rd(),
        rs1: inst.rs1(),
        csr: inst.csr(),
        ..DecodedFields::default()
    }
}

/// Decodes a shift-immediate instruction.
///
/// The shift amount is bits 25:20. The W forms fix bit 25 to zero in their
/// layout, so the same extraction serves both. Bits 31:26 select SRLI vs SRAI.
pub fn decode_i_shift(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.rd(),
        rs1: inst.rs1(),
        shamt: inst.bits(25, 20),
        ..DecodedFields::default()
    }
}

/// Decodes an S-type instruction.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
pub fn decode_s(inst: u32) -> DecodedFields {
    let combined = inst.bits(31, 25) << 5 | inst.bits(11, 7);
    DecodedFields {
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: sign_extend(combined, IS_IMM_BITS),
        ..DecodedFields::default()
    }
}

/// Decodes a B-type instruction.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
/// The immediate is an even byte offset.
pub fn decode_b(inst: u32) -> DecodedFields {
    let combined = inst.bit(31) << 12
        | inst.bit(7) << 11
        | inst.bits(30, 25) << 5
        | inst.bits(11, 8) << 1;
    DecodedFields {
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        imm: sign_extend(combined, B_IMM_BITS),
        ..DecodedFields::default()
    }
}

/// Decodes a U-type instruction.
///
/// U-Type format: `imm[31:12] | rd | opcode`. The immediate keeps its position
/// (low 12 bits zero); bit 31 is its natural sign bit.
pub fn decode_u(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.rd(),
        imm: ((inst & U_IMM_MASK) as i32) as i64,
        ..DecodedFields::default()
    }
}

/// Decodes a J-type instruction.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
pub fn decode_j(inst: u32) -> DecodedFields {
    let combined = inst.bit(31) << 20
        | inst.bits(19, 12) << 12
        | inst.bit(20) << 11
        | inst.bits(30, 21) << 1;
    DecodedFields {
        rd: inst.rd(),
        imm: sign_extend(combined, J_IMM_BITS),
        ..DecodedFields::default()
    }
}

// ──────────────────────────────────────────────────────────
// 16-bit formats
// ──────────────────────────────────────────────────────────

/// Decodes a CR-type instruction (`rd/rs1` at 11:7, `rs2` at 6:2).
pub fn decode_cr(inst: u32) -> DecodedFields {
    let rd = inst.bits(11, 7) as usize;
    DecodedFields {
        rd,
        rs1: rd,
        rs2: inst.bits(6, 2) as usize,
        ..DecodedFields::default()
    }
}

/// Decodes a CA-type instruction (`rd'/rs1'` at 9:7, `rs2'` at 4:2).
pub fn decode_ca(inst: u32) -> DecodedFields {
    let rd = c_reg(inst.bits(9, 7));
    DecodedFields {
        rd,
        rs1: rd,
        rs2: c_reg(inst.bits(4, 2)),
        ..DecodedFields::default()
    }
}

/// Decodes a CI-type instruction with a signed 6-bit immediate (C.ADDI, C.LI, C.ADDIW).
pub fn decode_ci(inst: u32) -> DecodedFields {
    let rd = inst.bits(11, 7) as usize;
    DecodedFields {
        rd,
        rs1: rd,
        imm: sign_extend(inst.bit(12) << 5 | inst.bits(6, 2), 6),
        ..DecodedFields::default()
    }
}

/// Decodes C.ADDI16SP: `nzimm[9|4|6|8:7|5]`, a signed multiple of 16.
pub fn decode_ci_addi16sp(inst: u32) -> DecodedFields {
    let combined = inst.bit(12) << 9
        | inst.bit(6) << 4
        | inst.bit(5) << 6
        | inst.bits(4, 3) << 7
        | inst.bit(2) << 5;
    DecodedFields {
        rd: REG_SP,
        rs1: REG_SP,
        imm: sign_extend(combined, 10),
        ..DecodedFields::default()
    }
}

/// Decodes C.LUI: `nzimm[17|16:12]`, kept at its final position.
pub fn decode_ci_lui(inst: u32) -> DecodedFields {
    DecodedFields {
        rd: inst.bits(11, 7) as usize,
        imm: sign_extend(inst.bit(12) << 17 | inst.bits(6, 2) << 12, 18),
        ..DecodedFields::default()
    }
}

/// Decodes C.SLLI: unsigned 6-bit shift amount, full register field.
pub fn decode_ci_shift(inst: u32) -> DecodedFields {
    let rd = inst.bits(11, 7) as usize;
    DecodedFields {
        rd,
        rs1: rd,
        shamt: inst.bit(12) << 5 | inst.bits(6, 2),
        ..DecodedFields::default()
    }
}

/// Decodes C.LWSP / C.FLWSP: `uimm[5|4:2|7:6]`, zero-extended, base sp.
pub fn decode_ci_lwsp(inst: u32) -> DecodedFields {
    let offset = inst.bit(12) << 5 | inst.bits(6, 4) << 2 | inst.bits(3, 2) << 6;
    DecodedFields {
        rd: inst.bits(11, 7) as usize,
        rs1: REG_SP,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes C.LDSP / C.FLDSP: `uimm[5|4:3|8:6]`, zero-extended, base sp.
pub fn decode_ci_ldsp(inst: u32) -> DecodedFields {
    let offset = inst.bit(12) << 5 | inst.bits(6, 5) << 3 | inst.bits(4, 2) << 6;
    DecodedFields {
        rd: inst.bits(11, 7) as usize,
        rs1: REG_SP,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes C.SWSP / C.FSWSP: `uimm[5:2|7:6]`, zero-extended, base sp.
pub fn decode_css_swsp(inst: u32) -> DecodedFields {
    let offset = inst.bits(12, 9) << 2 | inst.bits(8, 7) << 6;
    DecodedFields {
        rs1: REG_SP,
        rs2: inst.bits(6, 2) as usize,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes C.SDSP / C.FSDSP: `uimm[5:3|8:6]`, zero-extended, base sp.
pub fn decode_css_sdsp(inst: u32) -> DecodedFields {
    let offset = inst.bits(12, 10) << 3 | inst.bits(9, 7) << 6;
    DecodedFields {
        rs1: REG_SP,
        rs2: inst.bits(6, 2) as usize,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes C.ADDI4SPN: `nzuimm[5:4|9:6|2|3]`, zero-extended, `rd'`.
pub fn decode_ciw(inst: u32) -> DecodedFields {
    let offset =
        inst.bits(12, 11) << 4 | inst.bits(10, 7) << 6 | inst.bit(6) << 2 | inst.bit(5) << 3;
    DecodedFields {
        rd: c_reg(inst.bits(4, 2)),
        rs1: REG_SP,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes a word-sized CL/CS instruction (C.LW, C.SW, C.FLW, C.FSW).
///
/// Offset `uimm[5:3]` at 12:10 and `uimm[2|6]` at 6:5. The data register field
/// at 4:2 is returned as both `rd` (loads) and `rs2` (stores).
pub fn decode_cl_word(inst: u32) -> DecodedFields {
    let offset = inst.bits(12, 10) << 3 | inst.bit(6) << 2 | inst.bit(5) << 6;
    let data = c_reg(inst.bits(4, 2));
    DecodedFields {
        rd: data,
        rs1: c_reg(inst.bits(9, 7)),
        rs2: data,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes a doubleword-sized CL/CS instruction (C.LD, C.SD, C.FLD, C.FSD).
///
/// Offset `uimm[5:3]` at 12:10 and `uimm[7:6]` at 6:5.
pub fn decode_cl_double(inst: u32) -> DecodedFields {
    let offset = inst.bits(12, 10) << 3 | inst.bits(6, 5) << 6;
    let data = c_reg(inst.bits(4, 2));
    DecodedFields {
        rd: data,
        rs1: c_reg(inst.bits(9, 7)),
        rs2: data,
        imm: offset as i64,
        ..DecodedFields::default()
    }
}

/// Decodes C.SRLI / C.SRAI: unsigned 6-bit shift amount on `rd'`.
pub fn decode_cb_shift(inst: u32) -> DecodedFields {
    let rd = c_reg(inst.bits(9, 7));
    DecodedFields {
        rd,
        rs1: rd,
        shamt: inst.bit(12) << 5 | inst.bits(6, 2),
        ..DecodedFields::default()
    }
}

/// Decodes C.ANDI: signed 6-bit immediate on `rd'`.
pub fn decode_cb_andi(inst: u32) -> DecodedFields {
    let rd = c_reg(inst.bits(9, 7));
    DecodedFields {
        rd,
        rs1: rd,
        imm: sign_extend(inst.bit(12) << 5 | inst.bits(6, 2), 6),
        ..DecodedFields::default()
    }
}

/// Decodes C.BEQZ / C.BNEZ: `imm[8|4:3]` at 12:10, `imm[7:6|2:1|5]` at 6:2.
pub fn decode_cb_branch(inst: u32) -> DecodedFields {
    let combined = inst.bit(12) << 8
        | inst.bits(11, 10) << 3
        | inst.bits(6, 5) << 6
        | inst.bits(4, 3) << 1
        | inst.bit(2) << 5;
    DecodedFields {
        rs1: c_reg(inst.bits(9, 7)),
        imm: sign_extend(combined, 9),
        ..DecodedFields::default()
    }
}

/// Decodes C.J / C.JAL: `imm[11|4|9:8|10|6|7|3:1|5]` at 12:2.
pub fn decode_cj(inst: u32) -> DecodedFields {
    let combined = inst.bit(12) << 11
        | inst.bit(11) << 4
        | inst.bits(10, 9) << 8
        | inst.bit(8) << 10
        | inst.bit(7) << 6
        | inst.bit(6) << 7
        | inst.bits(5, 3) << 1
        | inst.bit(2) << 5;
    DecodedFields {
        imm: sign_extend(combined, 12),
        ..DecodedFields::default()
    }
}
