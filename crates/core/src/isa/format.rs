//! Formatter tags.
//!
//! Every instruction definition names one `Format`: which field decoder to run
//! and how to lay the operands out, including the pseudo-instruction rewrites
//! that apply to it. The set is closed, so rendering is a single `match` in
//! `disasm` with `Unimplemented` as the fallback arm.

use crate::isa::abi::RegisterClass;

/// Rounding-mode value meaning "use the `frm` CSR".
pub const RM_DYN: u32 = 0b111;

/// Assembly names of the eight rounding-mode encodings.
const RM_NAMES: [&str; 8] = ["rne", "rtz", "rdn", "rup", "rmm", "rm5", "rm6", "dyn"];

/// Returns the assembly name of a rounding-mode field value.
pub const fn rounding_mode_name(rm: u32) -> &'static str {
    if rm < 8 { RM_NAMES[rm as usize] } else { "rm?" }
}

/// Memory access size of a compressed load/store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scale {
    /// 4-byte access.
    Word,
    /// 8-byte access.
    Double,
}

/// How a matched definition is decoded and rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    // ── 32-bit ────────────────────────────────────────────
    /// `rd,rs1,rs2` integer register-register.
    RegReg,
    /// `sub`/`subw`; `neg`/`negw rd,rs2` when rs1 is x0.
    Sub,
    /// `rd,(rs1)` load-reserved.
    LoadReserved,
    /// `rd,rs2,(rs1)` AMO and store-conditional.
    Atomic,
    /// `fd,fs1,fs2`.
    FpRegReg,
    /// `fd,fs1` (square root, precision conversion).
    FpUnary,
    /// `rd,fs1` bit moves and classification.
    FpToInt,
    /// `fd,rs1` bit moves.
    IntToFp,
    /// `rd,fs1,fs2` comparisons.
    FpCompare,
    /// `rd,fs1[,rm]` conversions to integer; rm omitted when dynamic.
    FpToIntConvert,
    /// `fd,rs1` conversions from integer.
    IntToFpConvert,
    /// `fd,fs1,fs2,fs3` fused multiply-add.
    FusedMulAdd,
    /// `rd,rs1,imm`.
    Imm,
    /// `addi`; becomes `nop`, `li` or `mv` for the special operands.
    AddImm,
    /// `xori`; becomes `not` when imm is -1.
    XorImm,
    /// `rd,rs1,0x<shamt>`.
    ShiftImm,
    /// `rd,imm(rs1)` load into the given register file.
    Load(RegisterClass),
    /// `rs2,imm(rs1)` store from the given register file.
    Store(RegisterClass),
    /// `jalr`, with the `ret` and `jalr rs1` shorthands.
    Jalr,
    /// `rd,0x<imm[31:12]>`.
    Upper,
    /// `jal rd,target`; `j target` when rd is x0.
    Jal,
    /// `rs1,rs2,target`; `<name>z rs1,target` for beq/bne/blt/bge with rs2 x0.
    Branch,
    /// Zicsr register forms with the FP CSR and read/write-only shorthands.
    Csr,
    /// Zicsr immediate forms.
    CsrImm,
    /// Mnemonic only.
    Bare,
    /// `sfence.vma`-style `rs1,rs2`, bare when both are x0.
    FenceVma,

    // ── 16-bit ────────────────────────────────────────────
    /// The all-zero parcel.
    CIllegal,
    /// C.NOP, rendered `nop`.
    CNop,
    /// `rd',sp,uimm`.
    CAddi4spn,
    /// `rd,rd,imm`.
    CAddi,
    /// `rd,imm`.
    CLi,
    /// `sp,sp,imm`.
    CAddi16sp,
    /// `rd,0x<imm[17:12]>`.
    CLui,
    /// `rd,rd,0x<shamt>` on a full register.
    CShift,
    /// `rd',rd',0x<shamt>`.
    CShiftPrime,
    /// `rd',rd',imm`.
    CAndi,
    /// `rd',rd',rs2'`.
    CArith,
    /// `target`.
    CJump,
    /// `ra,target`.
    CJumpLink,
    /// `rs1',target`.
    CBranch,
    /// `rs1`; `ret` when rs1 is ra.
    CJr,
    /// `rs1`.
    CJalr,
    /// `rd,rs2`.
    CMv,
    /// `rd,rd,rs2`.
    CAdd,
    /// `reg',uimm(rs1')` compressed register-based load/store.
    CMem(Scale, RegisterClass),
    /// `rd,uimm(sp)` stack-pointer-based load.
    CLoadSp(Scale, RegisterClass),
    /// `rs2,uimm(sp)` stack-pointer-based store.
    CStoreSp(Scale, RegisterClass),

    /// No formatter; renders the mnemonic with a placeholder.
    Unimplemented,
}
