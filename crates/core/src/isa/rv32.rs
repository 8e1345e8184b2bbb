//! 32-bit instruction tables shared by RV32 and RV64.
//!
//! Layouts are transcribed from the ISA manual's opcode listings, MSB first.

use crate::isa::abi::RegisterClass::{Float, Integer};
use crate::isa::extension::Extension;
use crate::isa::format::Format;
use crate::isa::module::IsaModule;
use crate::isa::pattern::InstructionWidth;

/// RV32I base integer instructions with fence, trap-return and fence-vma
/// system instructions and Zicsr.
pub static RV32I: IsaModule = IsaModule {
    name: "rv32i",
    extension: Extension::I,
    width: InstructionWidth::Standard,
    definitions: &[
        ("imm[31:12] rd 0110111 LUI", Format::Upper),
        ("imm[31:12] rd 0010111 AUIPC", Format::Upper),
        ("imm[20|10:1|11|19:12] rd 1101111 JAL", Format::Jal),
        ("imm[11:0] rs1 000 rd 1100111 JALR", Format::Jalr),
        ("imm[12|10:5] rs2 rs1 000 imm[4:1|11] 1100011 BEQ", Format::Branch),
        ("imm[12|10:5] rs2 rs1 001 imm[4:1|11] 1100011 BNE", Format::Branch),
        ("imm[12|10:5] rs2 rs1 100 imm[4:1|11] 1100011 BLT", Format::Branch),
        ("imm[12|10:5] rs2 rs1 101 imm[4:1|11] 1100011 BGE", Format::Branch),
        ("imm[12|10:5] rs2 rs1 110 imm[4:1|11] 1100011 BLTU", Format::Branch),
        ("imm[12|10:5] rs2 rs1 111 imm[4:1|11] 1100011 BGEU", Format::Branch),
        ("imm[11:0] rs1 000 rd 0000011 LB", Format::Load(Integer)),
        ("imm[11:0] rs1 001 rd 0000011 LH", Format::Load(Integer)),
        ("imm[11:0] rs1 010 rd 0000011 LW", Format::Load(Integer)),
        ("imm[11:0] rs1 100 rd 0000011 LBU", Format::Load(Integer)),
        ("imm[11:0] rs1 101 rd 0000011 LHU", Format::Load(Integer)),
        ("imm[11:5] rs2 rs1 000 imm[4:0] 0100011 SB", Format::Store(Integer)),
        ("imm[11:5] rs2 rs1 001 imm[4:0] 0100011 SH", Format::Store(Integer)),
        ("imm[11:5] rs2 rs1 010 imm[4:0] 0100011 SW", Format::Store(Integer)),
        ("imm[11:0] rs1 000 rd 0010011 ADDI", Format::AddImm),
        ("imm[11:0] rs1 010 rd 0010011 SLTI", Format::Imm),
        ("imm[11:0] rs1 011 rd 0010011 SLTIU", Format::Imm),
        ("imm[11:0] rs1 100 rd 0010011 XORI", Format::XorImm),
        ("imm[11:0] rs1 110 rd 0010011 ORI", Format::Imm),
        ("imm[11:0] rs1 111 rd 0010011 ANDI", Format::Imm),
        // shamt[5] is reserved on RV32 but decoded here so RV64 can share it.
        ("000000 shamt6 rs1 001 rd 0010011 SLLI", Format::ShiftImm),
        ("000000 shamt6 rs1 101 rd 0010011 SRLI", Format::ShiftImm),
        ("010000 shamt6 rs1 101 rd 0010011 SRAI", Format::ShiftImm),
        ("0000000 rs2 rs1 000 rd 0110011 ADD", Format::RegReg),
        ("0100000 rs2 rs1 000 rd 0110011 SUB", Format::Sub),
        ("0000000 rs2 rs1 001 rd 0110011 SLL", Format::RegReg),
        ("0000000 rs2 rs1 010 rd 0110011 SLT", Format::RegReg),
        ("0000000 rs2 rs1 011 rd 0110011 SLTU", Format::RegReg),
        ("0000000 rs2 rs1 100 rd 0110011 XOR", Format::RegReg),
        ("0000000 rs2 rs1 101 rd 0110011 SRL", Format::RegReg),
        ("0100000 rs2 rs1 101 rd 0110011 SRA", Format::RegReg),
        ("0000000 rs2 rs1 110 rd 0110011 OR", Format::RegReg),
        ("0000000 rs2 rs1 111 rd 0110011 AND", Format::RegReg),
        ("0000 pred succ 00000 000 00000 0001111 FENCE", Format::Bare),
        ("0000 0000 0000 00000 001 00000 0001111 FENCE.I", Format::Bare),
        ("0000000 00000 00000 000 00000 1110011 ECALL", Format::Bare),
        ("0000000 00001 00000 000 00000 1110011 EBREAK", Format::Bare),
        ("0000000 00010 00000 000 00000 1110011 URET", Format::Bare),
        ("0001000 00010 00000 000 00000 1110011 SRET", Format::Bare),
        ("0011000 00010 00000 000 00000 1110011 MRET", Format::Bare),
        ("0001000 00101 00000 000 00000 1110011 WFI", Format::Bare),
        ("0001001 rs2 rs1 000 00000 1110011 SFENCE.VMA", Format::FenceVma),
        ("0010001 rs2 rs1 000 00000 1110011 HFENCE.VVMA", Format::FenceVma),
        ("0110001 rs2 rs1 000 00000 1110011 HFENCE.GVMA", Format::FenceVma),
        ("csr rs1 001 rd 1110011 CSRRW", Format::Csr),
        ("csr rs1 010 rd 1110011 CSRRS", Format::Csr),
        ("csr rs1 011 rd 1110011 CSRRC", Format::Csr),
        ("csr zimm 101 rd 1110011 CSRRWI", Format::CsrImm),
        ("csr zimm 110 rd 1110011 CSRRSI", Format::CsrImm),
        ("csr zimm 111 rd 1110011 CSRRCI", Format::CsrImm),
    ],
};

/// RV32M multiply and divide.
pub static RV32M: IsaModule = IsaModule {
    name: "rv32m",
    extension: Extension::M,
    width: InstructionWidth::Standard,
    definitions: &[
        ("0000001 rs2 rs1 000 rd 0110011 MUL", Format::RegReg),
        ("0000001 rs2 rs1 001 rd 0110011 MULH", Format::RegReg),
        ("0000001 rs2 rs1 010 rd 0110011 MULHSU", Format::RegReg),
        ("0000001 rs2 rs1 011 rd 0110011 MULHU", Format::RegReg),
        ("0000001 rs2 rs1 100 rd 0110011 DIV", Format::RegReg),
        ("0000001 rs2 rs1 101 rd 0110011 DIVU", Format::RegReg),
        ("0000001 rs2 rs1 110 rd 0110011 REM", Format::RegReg),
        ("0000001 rs2 rs1 111 rd 0110011 REMU", Format::RegReg),
    ],
};

/// RV32A word atomics.
pub static RV32A: IsaModule = IsaModule {
    name: "rv32a",
    extension: Extension::A,
    width: InstructionWidth::Standard,
    definitions: &[
        ("00010 aq rl 00000 rs1 010 rd 0101111 LR.W", Format::LoadReserved),
        ("00011 aq rl rs2 rs1 010 rd 0101111 SC.W", Format::Atomic),
        ("00001 aq rl rs2 rs1 010 rd 0101111 AMOSWAP.W", Format::Atomic),
        ("00000 aq rl rs2 rs1 010 rd 0101111 AMOADD.W", Format::Atomic),
        ("00100 aq rl rs2 rs1 010 rd 0101111 AMOXOR.W", Format::Atomic),
        ("01100 aq rl rs2 rs1 010 rd 0101111 AMOAND.W", Format::Atomic),
        ("01000 aq rl rs2 rs1 010 rd 0101111 AMOOR.W", Format::Atomic),
        ("10000 aq rl rs2 rs1 010 rd 0101111 AMOMIN.W", Format::Atomic),
        ("10100 aq rl rs2 rs1 010 rd 0101111 AMOMAX.W", Format::Atomic),
        ("11000 aq rl rs2 rs1 010 rd 0101111 AMOMINU.W", Format::Atomic),
        ("11100 aq rl rs2 rs1 010 rd 0101111 AMOMAXU.W", Format::Atomic),
    ],
};

/// RV32F single-precision floating point.
pub static RV32F: IsaModule = IsaModule {
    name: "rv32f",
    extension: Extension::F,
    width: InstructionWidth::Standard,
    definitions: &[
        ("imm[11:0] rs1 010 rd 0000111 FLW", Format::Load(Float)),
        ("imm[11:5] rs2 rs1 010 imm[4:0] 0100111 FSW", Format::Store(Float)),
        ("rs3 00 rs2 rs1 rm rd 1000011 FMADD.S", Format::FusedMulAdd),
        ("rs3 00 rs2 rs1 rm rd 1000111 FMSUB.S", Format::FusedMulAdd),
        ("rs3 00 rs2 rs1 rm rd 1001011 FNMSUB.S", Format::FusedMulAdd),
        ("rs3 00 rs2 rs1 rm rd 1001111 FNMADD.S", Format::FusedMulAdd),
        ("0000000 rs2 rs1 rm rd 1010011 FADD.S", Format::FpRegReg),
        ("0000100 rs2 rs1 rm rd 1010011 FSUB.S", Format::FpRegReg),
        ("0001000 rs2 rs1 rm rd 1010011 FMUL.S", Format::FpRegReg),
        ("0001100 rs2 rs1 rm rd 1010011 FDIV.S", Format::FpRegReg),
        ("0101100 00000 rs1 rm rd 1010011 FSQRT.S", Format::FpUnary),
        ("0010000 rs2 rs1 000 rd 1010011 FSGNJ.S", Format::FpRegReg),
        ("0010000 rs2 rs1 001 rd 1010011 FSGNJN.S", Format::FpRegReg),
        ("0010000 rs2 rs1 010 rd 1010011 FSGNJX.S", Format::FpRegReg),
        ("0010100 rs2 rs1 000 rd 1010011 FMIN.S", Format::FpRegReg),
        ("0010100 rs2 rs1 001 rd 1010011 FMAX.S", Format::FpRegReg),
        ("1100000 00000 rs1 rm rd 1010011 FCVT.W.S", Format::FpToIntConvert),
        ("1100000 00001 rs1 rm rd 1010011 FCVT.WU.S", Format::FpToIntConvert),
        ("1110000 00000 rs1 000 rd 1010011 FMV.X.W", Format::FpToInt),
        ("1010000 rs2 rs1 010 rd 1010011 FEQ.S", Format::FpCompare),
        ("1010000 rs2 rs1 001 rd 1010011 FLT.S", Format::FpCompare),
        ("1010000 rs2 rs1 000 rd 1010011 FLE.S", Format::FpCompare),
        ("1110000 00000 rs1 001 rd 1010011 FCLASS.S", Format::FpToInt),
        ("1101000 00000 rs1 rm rd 1010011 FCVT.S.W", Format::IntToFpConvert),
        ("1101000 00001 rs1 rm rd 1010011 FCVT.S.WU", Format::IntToFpConvert),
        ("1111000 00000 rs1 000 rd 1010011 FMV.W.X", Format::IntToFp),
    ],
};

/// RV32D double-precision floating point.
pub static RV32D: IsaModule = IsaModule {
    name: "rv32d",
    extension: Extension::D,
    width: InstructionWidth::Standard,
    definitions: &[
        ("imm[11:0] rs1 011 rd 0000111 FLD", Format::Load(Float)),
        ("imm[11:5] rs2 rs1 011 imm[4:0] 0100111 FSD", Format::Store(Float)),
        ("rs3 01 rs2 rs1 rm rd 1000011 FMADD.D", Format::FusedMulAdd),
        ("rs3 01 rs2 rs1 rm rd 1000111 FMSUB.D", Format::FusedMulAdd),
        ("rs3 01 rs2 rs1 rm rd 1001011 FNMSUB.D", Format::FusedMulAdd),
        ("rs3 01 rs2 rs1 rm rd 1001111 FNMADD.D", Format::FusedMulAdd),
        ("0000001 rs2 rs1 rm rd 1010011 FADD.D", Format::FpRegReg),
        ("0000101 rs2 rs1 rm rd 1010011 FSUB.D", Format::FpRegReg),
        ("0001001 rs2 rs1 rm rd 1010011 FMUL.D", Format::FpRegReg),
        ("0001101 rs2 rs1 rm rd 1010011 FDIV.D", Format::FpRegReg),
        ("0101101 00000 rs1 rm rd 1010011 FSQRT.D", Format::FpUnary),
        ("0010001 rs2 rs1 000 rd 1010011 FSGNJ.D", Format::FpRegReg),
        ("0010001 rs2 rs1 001 rd 1010011 FSGNJN.D", Format::FpRegReg),
        ("0010001 rs2 rs1 010 rd 1010011 FSGNJX.D", Format::FpRegReg),
        ("0010101 rs2 rs1 000 rd 1010011 FMIN.D", Format::FpRegReg),
        ("0010101 rs2 rs1 001 rd 1010011 FMAX.D", Format::FpRegReg),
        ("0100000 00001 rs1 rm rd 1010011 FCVT.S.D", Format::FpUnary),
        ("0100001 00000 rs1 rm rd 1010011 FCVT.D.S", Format::FpUnary),
        ("1010001 rs2 rs1 010 rd 1010011 FEQ.D", Format::FpCompare),
        ("1010001 rs2 rs1 001 rd 1010011 FLT.D", Format::FpCompare),
        ("1010001 rs2 rs1 000 rd 1010011 FLE.D", Format::FpCompare),
        ("1110001 00000 rs1 001 rd 1010011 FCLASS.D", Format::FpToInt),
        ("1100001 00000 rs1 rm rd 1010011 FCVT.W.D", Format::FpToIntConvert),
        ("1100001 00001 rs1 rm rd 1010011 FCVT.WU.D", Format::FpToIntConvert),
        ("1101001 00000 rs1 rm rd 1010011 FCVT.D.W", Format::IntToFpConvert),
        ("1101001 00001 rs1 rm rd 1010011 FCVT.D.WU", Format::IntToFpConvert),
    ],
};
