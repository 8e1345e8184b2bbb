//! 32-bit instructions added by the RV64 base and extensions.

use crate::isa::abi::RegisterClass::Integer;
use crate::isa::extension::Extension;
use crate::isa::format::Format;
use crate::isa::module::IsaModule;
use crate::isa::pattern::InstructionWidth;

/// RV64I additions.
///
/// The 6-bit shift-immediate forms repeat the RV32I layouts so the module can
/// be composed on its own; after RV32I they are dropped as duplicates.
pub static RV64I: IsaModule = IsaModule {
    name: "rv64i",
    extension: Extension::I,
    width: InstructionWidth::Standard,
    definitions: &[
        ("imm[11:0] rs1 110 rd 0000011 LWU", Format::Load(Integer)),
        ("imm[11:0] rs1 011 rd 0000011 LD", Format::Load(Integer)),
        ("imm[11:5] rs2 rs1 011 imm[4:0] 0100011 SD", Format::Store(Integer)),
        ("000000 shamt6 rs1 001 rd 0010011 SLLI", Format::ShiftImm),
        ("000000 shamt6 rs1 101 rd 0010011 SRLI", Format::ShiftImm),
        ("010000 shamt6 rs1 101 rd 0010011 SRAI", Format::ShiftImm),
        ("imm[11:0] rs1 000 rd 0011011 ADDIW", Format::Imm),
        ("0000000 shamt5 rs1 001 rd 0011011 SLLIW", Format::ShiftImm),
        ("0000000 shamt5 rs1 101 rd 0011011 SRLIW", Format::ShiftImm),
        ("0100000 shamt5 rs1 101 rd 0011011 SRAIW", Format::ShiftImm),
        ("0000000 rs2 rs1 000 rd 0111011 ADDW", Format::RegReg),
        ("0100000 rs2 rs1 000 rd 0111011 SUBW", Format::Sub),
        ("0000000 rs2 rs1 001 rd 0111011 SLLW", Format::RegReg),
        ("0000000 rs2 rs1 101 rd 0111011 SRLW", Format::RegReg),
        ("0100000 rs2 rs1 101 rd 0111011 SRAW", Format::RegReg),
    ],
};

/// RV64M additions.
pub static RV64M: IsaModule = IsaModule {
    name: "rv64m",
    extension: Extension::M,
    width: InstructionWidth::Standard,
    definitions: &[
        ("0000001 rs2 rs1 000 rd 0111011 MULW", Format::RegReg),
        ("0000001 rs2 rs1 100 rd 0111011 DIVW", Format::RegReg),
        ("0000001 rs2 rs1 101 rd 0111011 DIVUW", Format::RegReg),
        ("0000001 rs2 rs1 110 rd 0111011 REMW", Format::RegReg),
        ("0000001 rs2 rs1 111 rd 0111011 REMUW", Format::RegReg),
    ],
};

/// RV64A doubleword atomics.
pub static RV64A: IsaModule = IsaModule {
    name: "rv64a",
    extension: Extension::A,
    width: InstructionWidth::Standard,
    definitions: &[
        ("00010 aq rl 00000 rs1 011 rd 0101111 LR.D", Format::LoadReserved),
        ("00011 aq rl rs2 rs1 011 rd 0101111 SC.D", Format::Atomic),
        ("00001 aq rl rs2 rs1 011 rd 0101111 AMOSWAP.D", Format::Atomic),
        ("00000 aq rl rs2 rs1 011 rd 0101111 AMOADD.D", Format::Atomic),
        ("00100 aq rl rs2 rs1 011 rd 0101111 AMOXOR.D", Format::Atomic),
        ("01100 aq rl rs2 rs1 011 rd 0101111 AMOAND.D", Format::Atomic),
        ("01000 aq rl rs2 rs1 011 rd 0101111 AMOOR.D", Format::Atomic),
        ("10000 aq rl rs2 rs1 011 rd 0101111 AMOMIN.D", Format::Atomic),
        ("10100 aq rl rs2 rs1 011 rd 0101111 AMOMAX.D", Format::Atomic),
        ("11000 aq rl rs2 rs1 011 rd 0101111 AMOMINU.D", Format::Atomic),
        ("11100 aq rl rs2 rs1 011 rd 0101111 AMOMAXU.D", Format::Atomic),
    ],
};

/// RV64F conversions to and from 64-bit integers.
pub static RV64F: IsaModule = IsaModule {
    name: "rv64f",
    extension: Extension::F,
    width: InstructionWidth::Standard,
    definitions: &[
        ("1100000 00010 rs1 rm rd 1010011 FCVT.L.S", Format::FpToIntConvert),
        ("1100000 00011 rs1 rm rd 1010011 FCVT.LU.S", Format::FpToIntConvert),
        ("1101000 00010 rs1 rm rd 1010011 FCVT.S.L", Format::IntToFpConvert),
        ("1101000 00011 rs1 rm rd 1010011 FCVT.S.LU", Format::IntToFpConvert),
    ],
};

/// RV64D conversions and doubleword moves.
pub static RV64D: IsaModule = IsaModule {
    name: "rv64d",
    extension: Extension::D,
    width: InstructionWidth::Standard,
    definitions: &[
        ("1100001 00010 rs1 rm rd 1010011 FCVT.L.D", Format::FpToIntConvert),
        ("1100001 00011 rs1 rm rd 1010011 FCVT.LU.D", Format::FpToIntConvert),
        ("1110001 00000 rs1 000 rd 1010011 FMV.X.D", Format::FpToInt),
        ("1101001 00010 rs1 rm rd 1010011 FCVT.D.L", Format::IntToFpConvert),
        ("1101001 00011 rs1 rm rd 1010011 FCVT.D.LU", Format::IntToFpConvert),
        ("1111001 00000 rs1 000 rd 1010011 FMV.D.X", Format::IntToFp),
    ],
};
