//! Instruction bit extraction utilities.
//!
//! Provides the fixed-position field extractors shared by every 32-bit format,
//! generic bit-range helpers used by the scattered compressed layouts, the
//! uniform sign-extension rule, and instruction length classification.

/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;

/// Low two bits that mark a 32-bit instruction when both are set.
pub const LENGTH_MASK: u32 = 0b11;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Positions follow the base formats (R, I, S, B, U, J, R4) of the unprivileged
/// ISA manual; every format places shared fields at the same bits.
pub trait InstructionBits {
    /// Extracts bits `hi..=lo` right-aligned.
    fn bits(&self, hi: u32, lo: u32) -> u32;

    /// Extracts a single bit.
    fn bit(&self, n: u32) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 27-31, R4 format).
    fn rs3(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Floating-point operations reuse these bits as the rounding mode.
    fn funct3(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn bits(&self, hi: u32, lo: u32) -> u32 {
        let width = hi - lo + 1;
        if width >= 32 {
            self >> lo
        } else {
            (self >> lo) & ((1 << width) - 1)
        }
    }

    #[inline(always)]
    fn bit(&self, n: u32) -> u32 {
        (self >> n) & 1
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> 27) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }
}

/// Sign extends the low `bits` bits of `val` to a 64-bit signed integer.
///
/// `bits` is the immediate width declared by the manual (12 for I/S, 13 for B,
/// 21 for J, 6 for most compressed immediates), not the instruction length.
///
/// # Arguments
///
/// * `val` - The assembled immediate.
/// * `bits` - The number of valid bits in `val` (1..=32).
pub const fn sign_extend(val: u32, bits: u32) -> i64 {
    let shift = 32 - bits;
    ((val << shift) as i32 >> shift) as i64
}

/// Returns true if `word` is a 32-bit instruction (low two bits both set).
#[inline(always)]
pub const fn is_standard(word: u32) -> bool {
    word & LENGTH_MASK == LENGTH_MASK
}

/// Returns the instruction length in bytes (4 or 2) implied by the low two bits.
#[inline(always)]
pub const fn instruction_length(word: u32) -> usize {
    if is_standard(word) { 4 } else { 2 }
}
