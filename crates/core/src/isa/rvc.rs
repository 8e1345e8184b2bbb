//! Compressed (16-bit) instruction tables.
//!
//! Several encodings are reserved or hint values carved out of a broader
//! instruction (C.NOP out of C.ADDI, C.JR out of C.MV). The carve-out always
//! appears first so the first-match lookup selects it.

use crate::isa::abi::RegisterClass::{Float, Integer};
use crate::isa::extension::Extension;
use crate::isa::format::{Format, Scale};
use crate::isa::module::IsaModule;
use crate::isa::pattern::InstructionWidth;

/// Compressed instructions common to RV32C and RV64C.
pub static RV32C: IsaModule = IsaModule {
    name: "rv32c",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[
        // Quadrant 0
        ("000 00000000 000 00 C.ILLEGAL", Format::CIllegal),
        ("000 nzuimm[5:4|9:6|2|3] rd0 00 C.ADDI4SPN", Format::CAddi4spn),
        ("010 uimm[5:3] rs10 uimm[2|6] rd0 00 C.LW", Format::CMem(Scale::Word, Integer)),
        ("110 uimm[5:3] rs10 uimm[2|6] rs20 00 C.SW", Format::CMem(Scale::Word, Integer)),
        // Quadrant 1
        ("000 nzimm[5] 00000 nzimm[4:0] 01 C.NOP", Format::CNop),
        ("000 nzimm[5] rs1/rd!=0 nzimm[4:0] 01 C.ADDI", Format::CAddi),
        ("010 imm[5] rd!=0 imm[4:0] 01 C.LI", Format::CLi),
        ("011 nzimm[9] 00010 nzimm[4|6|8:7|5] 01 C.ADDI16SP", Format::CAddi16sp),
        ("011 nzimm[17] rd!={0,2} nzimm[16:12] 01 C.LUI", Format::CLui),
        ("100 nzuimm[5] 00 rs10/rd0 nzuimm[4:0] 01 C.SRLI", Format::CShiftPrime),
        ("100 nzuimm[5] 01 rs10/rd0 nzuimm[4:0] 01 C.SRAI", Format::CShiftPrime),
        ("100 imm[5] 10 rs10/rd0 imm[4:0] 01 C.ANDI", Format::CAndi),
        ("100 0 11 rs10/rd0 00 rs20 01 C.SUB", Format::CArith),
        ("100 0 11 rs10/rd0 01 rs20 01 C.XOR", Format::CArith),
        ("100 0 11 rs10/rd0 10 rs20 01 C.OR", Format::CArith),
        ("100 0 11 rs10/rd0 11 rs20 01 C.AND", Format::CArith),
        ("101 imm[11|4|9:8|10|6|7|3:1|5] 01 C.J", Format::CJump),
        ("110 imm[8|4:3] rs10 imm[7:6|2:1|5] 01 C.BEQZ", Format::CBranch),
        ("111 imm[8|4:3] rs10 imm[7:6|2:1|5] 01 C.BNEZ", Format::CBranch),
        // Quadrant 2
        ("000 nzuimm[5] rs1/rd!=0 nzuimm[4:0] 10 C.SLLI", Format::CShift),
        ("010 uimm[5] rd!=0 uimm[4:2|7:6] 10 C.LWSP", Format::CLoadSp(Scale::Word, Integer)),
        ("100 0 rs1!=0 00000 10 C.JR", Format::CJr),
        ("100 0 rd!=0 rs2!=0 10 C.MV", Format::CMv),
        ("100 1 00000 00000 10 C.EBREAK", Format::Bare),
        ("100 1 rs1!=0 00000 10 C.JALR", Format::CJalr),
        ("100 1 rs1/rd!=0 rs2!=0 10 C.ADD", Format::CAdd),
        ("110 uimm[5:2|7:6] rs2 10 C.SWSP", Format::CStoreSp(Scale::Word, Integer)),
    ],
};

/// C.JAL; RV64C assigns its encoding to C.ADDIW.
pub static RV32C_ONLY: IsaModule = IsaModule {
    name: "rv32c_only",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[("001 imm[11|4|9:8|10|6|7|3:1|5] 01 C.JAL", Format::CJumpLink)],
};

/// Compressed single-precision loads and stores (RV32 only).
pub static RV32FC: IsaModule = IsaModule {
    name: "rv32fc",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[
        ("011 uimm[5:3] rs10 uimm[2|6] rd0 00 C.FLW", Format::CMem(Scale::Word, Float)),
        ("011 uimm[5] rd uimm[4:2|7:6] 10 C.FLWSP", Format::CLoadSp(Scale::Word, Float)),
        ("111 uimm[5:3] rs10 uimm[2|6] rs20 00 C.FSW", Format::CMem(Scale::Word, Float)),
        ("111 uimm[5:2|7:6] rs2 10 C.FSWSP", Format::CStoreSp(Scale::Word, Float)),
    ],
};

/// Compressed double-precision loads and stores.
pub static RV32DC: IsaModule = IsaModule {
    name: "rv32dc",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[
        ("001 uimm[5:3] rs10 uimm[7:6] rd0 00 C.FLD", Format::CMem(Scale::Double, Float)),
        ("001 uimm[5] rd uimm[4:3|8:6] 10 C.FLDSP", Format::CLoadSp(Scale::Double, Float)),
        ("101 uimm[5:3] rs10 uimm[7:6] rs20 00 C.FSD", Format::CMem(Scale::Double, Float)),
        ("101 uimm[5:3|8:6] rs2 10 C.FSDSP", Format::CStoreSp(Scale::Double, Float)),
    ],
};

/// RV64C additions.
pub static RV64C: IsaModule = IsaModule {
    name: "rv64c",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[
        ("001 imm[5] rd!=0 imm[4:0] 01 C.ADDIW", Format::CAddi),
        ("011 uimm[5] rd uimm[4:3|8:6] 10 C.LDSP", Format::CLoadSp(Scale::Double, Integer)),
        ("011 uimm[5:3] rs10 uimm[7:6] rd0 00 C.LD", Format::CMem(Scale::Double, Integer)),
        ("100 1 11 rs10/rd0 00 rs20 01 C.SUBW", Format::CArith),
        ("100 1 11 rs10/rd0 01 rs20 01 C.ADDW", Format::CArith),
        ("111 uimm[5:3] rs10 uimm[7:6] rs20 00 C.SD", Format::CMem(Scale::Double, Integer)),
        ("111 uimm[5:3|8:6] rs2 10 C.SDSP", Format::CStoreSp(Scale::Double, Integer)),
    ],
};

/// RV128C additions.
///
/// Only C.SLLI64 is listed and it has no formatter; the quadword loads and
/// stores are not defined. C.SLLI64 is a carve-out of C.SLLI, so this module
/// must precede `RV32C` when both are selected.
pub static RV128C: IsaModule = IsaModule {
    name: "rv128c",
    extension: Extension::C,
    width: InstructionWidth::Compressed,
    definitions: &[("000 0 rs1/rd!=0 00000 10 C.SLLI64", Format::Unimplemented)],
};
