//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps register indices to the standard ABI names used in assembly output.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;

/// ABI register names for x0–x31.
const XREG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI register names for f0–f31.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Register file a register index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegisterClass {
    /// General-purpose integer registers (x0–x31).
    Integer,
    /// Floating-point registers (f0–f31).
    Float,
}

/// Returns the ABI name for a register index in the given class.
///
/// Indices outside 0..32 render as `x??` / `f??`; the field decoders never
/// produce them.
pub fn register_name(index: usize, class: RegisterClass) -> &'static str {
    match class {
        RegisterClass::Integer => XREG_NAMES.get(index).copied().unwrap_or("x??"),
        RegisterClass::Float => FREG_NAMES.get(index).copied().unwrap_or("f??"),
    }
}

/// Returns the ABI name for an integer register index.
#[inline]
pub fn xreg(index: usize) -> &'static str {
    register_name(index, RegisterClass::Integer)
}

/// Returns the ABI name for a floating-point register index.
#[inline]
pub fn freg(index: usize) -> &'static str {
    register_name(index, RegisterClass::Float)
}
