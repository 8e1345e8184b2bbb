//! Instruction Disassembler.
//!
//! Renders a matched instruction word as assembly text. Operands are joined
//! by `,` without spaces, registers use ABI names, branch and jump targets are
//! absolute addresses in lower-case hex without a prefix, and shift amounts
//! and upper immediates are `0x`-prefixed hex. Every other immediate prints as
//! signed decimal.

use std::fmt;

use crate::isa::abi::{REG_RA, REG_ZERO, freg, register_name, xreg};
use crate::isa::csr::{FCSR, FFLAGS, FRM, csr_name};
use crate::isa::decode::{
    DecodedFields, decode_b, decode_ca, decode_cb_andi, decode_cb_branch, decode_cb_shift,
    decode_ci, decode_ci_addi16sp, decode_ci_ldsp, decode_ci_lui, decode_ci_lwsp,
    decode_ci_shift, decode_ciw, decode_cj, decode_cl_double, decode_cl_word, decode_cr,
    decode_css_sdsp, decode_css_swsp, decode_i, decode_i_csr, decode_i_shift, decode_j, decode_r,
    decode_r4, decode_s, decode_u,
};
use crate::isa::format::{Format, RM_DYN, Scale, rounding_mode_name};

/// Assembly text emitted for words that match no definition.
pub const ILLEGAL: &str = "illegal";

/// One disassembled instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    /// Address of the instruction.
    pub address: u64,
    /// Address width used for display (the ISA's XLEN).
    pub address_bits: u32,
    /// Instruction word, truncated to `length` bytes.
    pub word: u32,
    /// Instruction length in bytes (2 or 4).
    pub length: usize,
    /// Rendered assembly text.
    pub assembly: String,
}

impl Disassembly {
    /// Returns true when no definition matched the word.
    pub fn is_illegal(&self) -> bool {
        self.assembly == ILLEGAL
    }
}

impl fmt::Display for Disassembly {
    /// Listing line: zero-padded address, raw word, tab, assembly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.address_bits / 4) as usize;
        write!(f, "{:0digits$x}: ", self.address)?;
        if self.length == 2 {
            write!(f, "{:04x}     ", self.word)?;
        } else {
            write!(f, "{:08x} ", self.word)?;
        }
        write!(f, "\t{}", self.assembly)
    }
}

/// Returns the address mask for an `xlen`-bit address space.
pub const fn address_mask(xlen: u32) -> u64 {
    if xlen >= 64 { u64::MAX } else { (1u64 << xlen) - 1 }
}

/// Renders `inst` at address `pc` using the definition's `format`.
///
/// `mnemonic` is the lower-case name the definition was compiled with;
/// `addr_mask` bounds computed branch and jump targets.
pub fn render(format: Format, mnemonic: &str, pc: u64, inst: u32, addr_mask: u64) -> String {
    let name = mnemonic;
    let target = |imm: i64| pc.wrapping_add(imm as u64) & addr_mask;

    match format {
        Format::RegReg => {
            let f = decode_r(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rs1), xreg(f.rs2))
        }
        Format::Sub => {
            let f = decode_r(inst);
            if f.rs1 == REG_ZERO {
                let neg = name.replacen("sub", "neg", 1);
                format!("{neg} {},{}", xreg(f.rd), xreg(f.rs2))
            } else {
                format!("{name} {},{},{}", xreg(f.rd), xreg(f.rs1), xreg(f.rs2))
            }
        }
        Format::LoadReserved => {
            let f = decode_r(inst);
            format!("{} {},({})", ordered(name, &f), xreg(f.rd), xreg(f.rs1))
        }
        Format::Atomic => {
            let f = decode_r(inst);
            format!(
                "{} {},{},({})",
                ordered(name, &f),
                xreg(f.rd),
                xreg(f.rs2),
                xreg(f.rs1)
            )
        }
        Format::FpRegReg => {
            let f = decode_r(inst);
            format!("{name} {},{},{}", freg(f.rd), freg(f.rs1), freg(f.rs2))
        }
        Format::FpUnary => {
            let f = decode_r(inst);
            format!("{name} {},{}", freg(f.rd), freg(f.rs1))
        }
        Format::FpToInt => {
            let f = decode_r(inst);
            format!("{name} {},{}", xreg(f.rd), freg(f.rs1))
        }
        Format::IntToFp | Format::IntToFpConvert => {
            let f = decode_r(inst);
            format!("{name} {},{}", freg(f.rd), xreg(f.rs1))
        }
        Format::FpCompare => {
            let f = decode_r(inst);
            format!("{name} {},{},{}", xreg(f.rd), freg(f.rs1), freg(f.rs2))
        }
        Format::FpToIntConvert => {
            let f = decode_r(inst);
            if f.rm == RM_DYN {
                format!("{name} {},{}", xreg(f.rd), freg(f.rs1))
            } else {
                format!(
                    "{name} {},{},{}",
                    xreg(f.rd),
                    freg(f.rs1),
                    rounding_mode_name(f.rm)
                )
            }
        }
        Format::FusedMulAdd => {
            let f = decode_r4(inst);
            format!(
                "{name} {},{},{},{}",
                freg(f.rd),
                freg(f.rs1),
                freg(f.rs2),
                freg(f.rs3)
            )
        }
        Format::Imm => {
            let f = decode_i(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rs1), f.imm)
        }
        Format::AddImm => render_addi(name, &decode_i(inst)),
        Format::XorImm => {
            let f = decode_i(inst);
            if f.imm == -1 {
                format!("not {},{}", xreg(f.rd), xreg(f.rs1))
            } else {
                format!("{name} {},{},{}", xreg(f.rd), xreg(f.rs1), f.imm)
            }
        }
        Format::ShiftImm => {
            let f = decode_i_shift(inst);
            format!("{name} {},{},0x{:x}", xreg(f.rd), xreg(f.rs1), f.shamt)
        }
        Format::Load(class) => {
            let f = decode_i(inst);
            format!(
                "{name} {},{}({})",
                register_name(f.rd, class),
                f.imm,
                xreg(f.rs1)
            )
        }
        Format::Store(class) => {
            let f = decode_s(inst);
            format!(
                "{name} {},{}({})",
                register_name(f.rs2, class),
                f.imm,
                xreg(f.rs1)
            )
        }
        Format::Jalr => render_jalr(name, &decode_i(inst)),
        Format::Upper => {
            let f = decode_u(inst);
            format!("{name} {},0x{:x}", xreg(f.rd), upper_field(f.imm))
        }
        Format::Jal => {
            let f = decode_j(inst);
            if f.rd == REG_ZERO {
                format!("j {:x}", target(f.imm))
            } else {
                format!("{name} {},{:x}", xreg(f.rd), target(f.imm))
            }
        }
        Format::Branch => {
            let f = decode_b(inst);
            let zero_form = matches!(name, "beq" | "bne" | "blt" | "bge");
            if zero_form && f.rs2 == REG_ZERO {
                format!("{name}z {},{:x}", xreg(f.rs1), target(f.imm))
            } else {
                format!(
                    "{name} {},{},{:x}",
                    xreg(f.rs1),
                    xreg(f.rs2),
                    target(f.imm)
                )
            }
        }
        Format::Csr => render_csr(name, &decode_i_csr(inst)),
        Format::CsrImm => render_csr_imm(name, &decode_i_csr(inst)),
        Format::Bare => name.to_owned(),
        Format::FenceVma => {
            let f = decode_r(inst);
            if f.rs1 == REG_ZERO && f.rs2 == REG_ZERO {
                name.to_owned()
            } else {
                format!("{name} {},{}", xreg(f.rs1), xreg(f.rs2))
            }
        }

        Format::CIllegal => ILLEGAL.to_owned(),
        Format::CNop => "nop".to_owned(),
        Format::CAddi4spn => {
            let f = decode_ciw(inst);
            format!("{name} {},sp,{}", xreg(f.rd), f.imm)
        }
        Format::CAddi => {
            let f = decode_ci(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rd), f.imm)
        }
        Format::CLi => {
            let f = decode_ci(inst);
            format!("{name} {},{}", xreg(f.rd), f.imm)
        }
        Format::CAddi16sp => {
            let f = decode_ci_addi16sp(inst);
            format!("{name} sp,sp,{}", f.imm)
        }
        Format::CLui => {
            let f = decode_ci_lui(inst);
            format!("{name} {},0x{:x}", xreg(f.rd), upper_field(f.imm))
        }
        Format::CShift => {
            let f = decode_ci_shift(inst);
            format!("{name} {},{},0x{:x}", xreg(f.rd), xreg(f.rd), f.shamt)
        }
        Format::CShiftPrime => {
            let f = decode_cb_shift(inst);
            format!("{name} {},{},0x{:x}", xreg(f.rd), xreg(f.rd), f.shamt)
        }
        Format::CAndi => {
            let f = decode_cb_andi(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rd), f.imm)
        }
        Format::CArith => {
            let f = decode_ca(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rd), xreg(f.rs2))
        }
        Format::CJump => {
            let f = decode_cj(inst);
            format!("{name} {:x}", target(f.imm))
        }
        Format::CJumpLink => {
            let f = decode_cj(inst);
            format!("{name} ra,{:x}", target(f.imm))
        }
        Format::CBranch => {
            let f = decode_cb_branch(inst);
            format!("{name} {},{:x}", xreg(f.rs1), target(f.imm))
        }
        Format::CJr => {
            let f = decode_cr(inst);
            if f.rs1 == REG_RA {
                "ret".to_owned()
            } else {
                format!("{name} {}", xreg(f.rs1))
            }
        }
        Format::CJalr => {
            let f = decode_cr(inst);
            format!("{name} {}", xreg(f.rs1))
        }
        Format::CMv => {
            let f = decode_cr(inst);
            format!("{name} {},{}", xreg(f.rd), xreg(f.rs2))
        }
        Format::CAdd => {
            let f = decode_cr(inst);
            format!("{name} {},{},{}", xreg(f.rd), xreg(f.rd), xreg(f.rs2))
        }
        Format::CMem(scale, class) => {
            let f = match scale {
                Scale::Word => decode_cl_word(inst),
                Scale::Double => decode_cl_double(inst),
            };
            format!(
                "{name} {},{}({})",
                register_name(f.rd, class),
                f.imm,
                xreg(f.rs1)
            )
        }
        Format::CLoadSp(scale, class) => {
            let f = match scale {
                Scale::Word => decode_ci_lwsp(inst),
                Scale::Double => decode_ci_ldsp(inst),
            };
            format!("{name} {},{}(sp)", register_name(f.rd, class), f.imm)
        }
        Format::CStoreSp(scale, class) => {
            let f = match scale {
                Scale::Word => decode_css_swsp(inst),
                Scale::Double => decode_css_sdsp(inst),
            };
            format!("{name} {},{}(sp)", register_name(f.rs2, class), f.imm)
        }

        Format::Unimplemented => format!("{name} <unimplemented>"),
    }
}

/// Bits 31:12 of a U-type (or C.LUI) immediate, as written in source.
const fn upper_field(imm: i64) -> i64 {
    (imm >> 12) & 0xf_ffff
}

/// Appends the `.aq`/`.rl`/`.aqrl` ordering suffix.
fn ordered(name: &str, f: &DecodedFields) -> String {
    match (f.aq, f.rl) {
        (false, false) => name.to_owned(),
        (true, false) => format!("{name}.aq"),
        (false, true) => format!("{name}.rl"),
        (true, true) => format!("{name}.aqrl"),
    }
}

fn render_addi(name: &str, f: &DecodedFields) -> String {
    if f.rd == REG_ZERO && f.rs1 == REG_ZERO && f.imm == 0 {
        "nop".to_owned()
    } else if f.rs1 == REG_ZERO {
        format!("li {},{}", xreg(f.rd), f.imm)
    } else if f.imm == 0 {
        format!("mv {},{}", xreg(f.rd), xreg(f.rs1))
    } else {
        format!("{name} {},{},{}", xreg(f.rd), xreg(f.rs1), f.imm)
    }
}

fn render_jalr(name: &str, f: &DecodedFields) -> String {
    if f.rd == REG_ZERO && f.rs1 == REG_RA && f.imm == 0 {
        "ret".to_owned()
    } else if f.rd == REG_RA {
        if f.imm == 0 {
            format!("{name} {}", xreg(f.rs1))
        } else {
            format!("{name} {}({})", f.imm, xreg(f.rs1))
        }
    } else if f.imm == 0 {
        format!("{name} {},{}", xreg(f.rd), xreg(f.rs1))
    } else {
        format!("{name} {},{}({})", xreg(f.rd), f.imm, xreg(f.rs1))
    }
}

/// `csrrw` → `csrw`, `csrrsi` → `csrsi`, and so on.
fn write_only(name: &str) -> String {
    name.strip_prefix("csrr")
        .map_or_else(|| name.to_owned(), |op| format!("csr{op}"))
}

fn render_csr(name: &str, f: &DecodedFields) -> String {
    let (rd, rs1) = (xreg(f.rd), xreg(f.rs1));
    let read_only = name == "csrrs" && f.rs1 == REG_ZERO && f.rd != REG_ZERO;

    match (f.csr, name) {
        (FCSR, "csrrw") if f.rd == REG_ZERO => return format!("fscsr {rs1}"),
        (FCSR, "csrrw") => return format!("fscsr {rd},{rs1}"),
        (FCSR, _) if read_only => return format!("frcsr {rd}"),
        (FFLAGS, "csrrw") if f.rd == REG_ZERO => return format!("fsflags {rs1}"),
        (FFLAGS, "csrrw") => return format!("fsflags {rd},{rs1}"),
        (FFLAGS, _) if read_only => return format!("frflags {rd}"),
        _ => {}
    }

    let csr = csr_name(f.csr);
    if f.rd == REG_ZERO {
        format!("{} {csr},{rs1}", write_only(name))
    } else if read_only {
        format!("csrr {rd},{csr}")
    } else {
        format!("{name} {rd},{csr},{rs1}")
    }
}

fn render_csr_imm(name: &str, f: &DecodedFields) -> String {
    // The immediate forms reuse the rs1 field as a 5-bit zero-extended value.
    let (rd, uimm) = (xreg(f.rd), f.rs1);

    match (f.csr, name) {
        (FRM, "csrrwi") if f.rd == REG_ZERO => return format!("fsrmi {uimm}"),
        (FRM, "csrrwi") => return format!("fsrmi {rd},{uimm}"),
        (FFLAGS, "csrrwi") if f.rd == REG_ZERO => return format!("fsflagsi {uimm}"),
        (FFLAGS, "csrrwi") => return format!("fsflagsi {rd},{uimm}"),
        _ => {}
    }

    let csr = csr_name(f.csr);
    if f.rd == REG_ZERO {
        format!("{} {csr},{uimm}", write_only(name))
    } else {
        format!("{name} {rd},{csr},{uimm}")
    }
}
