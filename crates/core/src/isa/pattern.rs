//! Bit-layout compiler.
//!
//! Instruction definitions are written the way the ISA manual draws them,
//! most-significant bit first:
//!
//! ```text
//! imm[12|10:5] rs2 rs1 000 imm[4:1|11] 1100011 BEQ
//! ```
//!
//! Each token is either a run of literal `0`/`1` bits, which become fixed bits
//! of the matcher, or a named field, which is a "don't care" for matching. A
//! field's width comes from its bit-range annotation (`imm[4:1|11]` is 5 bits)
//! or, for bare register/function fields, from its architectural width. The
//! final token is the mnemonic.
//!
//! Field positions are not kept: operands are extracted by the per-format
//! decoders in `decode`. The compiler only has to produce the mask/value pair
//! and reject layouts that cannot describe a real instruction.

use crate::common::IsaError;

/// Instruction width class of a definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionWidth {
    /// 16-bit compressed instruction.
    Compressed,
    /// 32-bit standard instruction.
    Standard,
}

impl InstructionWidth {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Compressed => 16,
            Self::Standard => 32,
        }
    }
}

/// Fixed-bit matcher derived from a layout.
///
/// Invariant: `value & !mask == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Bits that must equal `value` for a word to match.
    pub mask: u32,
    /// Required values of the masked bits.
    pub value: u32,
    /// Instruction width the layout describes.
    pub width: InstructionWidth,
}

impl Pattern {
    /// Returns true if `word` carries this pattern's fixed bits.
    #[inline(always)]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.value
    }

    /// Returns true if some word matches both patterns.
    pub const fn intersects(&self, other: &Self) -> bool {
        (self.value ^ other.value) & self.mask & other.mask == 0
    }

    /// Returns true if every bit fixed by `other` is also fixed by `self`.
    pub const fn fixes_all_of(&self, other: &Self) -> bool {
        self.mask & other.mask == other.mask
    }
}

/// A compiled layout: the matcher plus the lower-case mnemonic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledLayout {
    /// Mnemonic as printed in assembly (`beq`, `c.addi`, `fence.i`).
    pub mnemonic: String,
    /// Fixed-bit matcher.
    pub pattern: Pattern,
}

/// One parsed layout token.
#[derive(Debug)]
enum Token<'a> {
    /// Literal bits, most-significant first.
    Literal(&'a str),
    /// A named field of the given width.
    Field(u32),
}

/// Destination bits claimed by each named field, for conflict detection.
#[derive(Debug, Default)]
struct FieldClaims<'a> {
    claims: Vec<(&'a str, u64)>,
}

impl<'a> FieldClaims<'a> {
    /// Records that `name` covers `bits`; fails if any bit was already claimed.
    fn claim(&mut self, name: &'a str, bits: u64) -> Result<(), String> {
        if let Some((_, existing)) = self.claims.iter_mut().find(|(n, _)| *n == name) {
            let overlap = *existing & bits;
            if overlap != 0 {
                return Err(format!(
                    "field `{name}` bit {} is declared more than once",
                    overlap.trailing_zeros()
                ));
            }
            *existing |= bits;
        } else {
            self.claims.push((name, bits));
        }
        Ok(())
    }
}

/// Architectural width of a field written without a bit range.
fn bare_field_width(name: &str) -> Option<u32> {
    let width = match name {
        "rd" | "rs1" | "rs2" | "rs3" | "rs1/rd" | "zimm" | "shamt5" => 5,
        "rd0" | "rs10" | "rs20" | "rs10/rd0" | "rm" => 3,
        "shamt6" => 6,
        "csr" => 12,
        "pred" | "succ" => 4,
        "aq" | "rl" => 1,
        _ => return None,
    };
    Some(width)
}

/// Returns true for field names that take a `[..]` bit-range annotation.
fn is_immediate_field(name: &str) -> bool {
    matches!(name, "imm" | "nzimm" | "uimm" | "nzuimm")
}

/// Parses a range annotation such as `5:4|9:6|2|3` into a destination bit set.
fn parse_ranges(ranges: &str) -> Result<u64, String> {
    let mut bits = 0u64;
    for item in ranges.split('|') {
        let (hi, lo) = match item.split_once(':') {
            Some((hi, lo)) => (parse_bit_index(hi)?, parse_bit_index(lo)?),
            None => {
                let n = parse_bit_index(item)?;
                (n, n)
            }
        };
        if hi < lo {
            return Err(format!("bit range `{item}` is reversed"));
        }
        for n in lo..=hi {
            let bit = 1u64 << n;
            if bits & bit != 0 {
                return Err(format!("bit {n} appears twice in `[{ranges}]`"));
            }
            bits |= bit;
        }
    }
    Ok(bits)
}

/// Parses one bit index of a range annotation.
fn parse_bit_index(text: &str) -> Result<u32, String> {
    match text.parse::<u32>() {
        Ok(n) if n < 64 => Ok(n),
        _ => Err(format!("invalid bit index `{text}`")),
    }
}

/// Parses a field token, recording its claimed bits, and returns its width.
///
/// A `!=` suffix (`rd!=0`, `rd!={0,2}`) documents a reserved operand value; it
/// is not part of the matcher.
fn parse_field<'a>(token: &'a str, claims: &mut FieldClaims<'a>) -> Result<u32, String> {
    let base = token.split_once("!=").map_or(token, |(base, _)| base);
    if let Some((name, rest)) = base.split_once('[') {
        if !is_immediate_field(name) {
            return Err(format!("field `{name}` does not take a bit range"));
        }
        let ranges = rest
            .strip_suffix(']')
            .ok_or_else(|| format!("unterminated bit range in `{token}`"))?;
        let bits = parse_ranges(ranges)?;
        // nzimm/uimm variants name the same immediate.
        claims.claim("imm", bits)?;
        Ok(bits.count_ones())
    } else {
        let width = bare_field_width(base).ok_or_else(|| format!("unknown field `{base}`"))?;
        claims.claim(base, (1u64 << width) - 1)?;
        Ok(width)
    }
}

/// Compiles a layout string into its mnemonic and mask/value matcher.
///
/// # Errors
///
/// Returns `IsaError::MalformedDefinition` if the token widths do not add up
/// to `width`, a field is unknown, a bit range is malformed, a field bit is
/// declared twice, or the mnemonic is missing.
pub fn compile(layout: &str, width: InstructionWidth) -> Result<CompiledLayout, IsaError> {
    let malformed = |reason: String| IsaError::malformed(layout, reason);

    let mut words: Vec<&str> = layout.split_whitespace().collect();
    let mnemonic = match words.pop() {
        Some(m) if m.chars().any(|c| c.is_ascii_alphabetic()) && !m.contains('[') => m,
        _ => return Err(malformed("missing mnemonic".to_string())),
    };
    if words.is_empty() {
        return Err(malformed("no bit fields before the mnemonic".to_string()));
    }

    let mut claims = FieldClaims::default();
    let mut tokens = Vec::with_capacity(words.len());
    for word in words {
        if word.bytes().all(|b| b == b'0' || b == b'1') {
            tokens.push(Token::Literal(word));
        } else {
            tokens.push(Token::Field(parse_field(word, &mut claims).map_err(malformed)?));
        }
    }

    let total: u32 = tokens
        .iter()
        .map(|t| match t {
            Token::Literal(bits) => bits.len() as u32,
            Token::Field(w) => *w,
        })
        .sum();
    if total != width.bits() {
        return Err(malformed(format!(
            "fields cover {total} bits, expected {}",
            width.bits()
        )));
    }

    let mut mask = 0u32;
    let mut value = 0u32;
    let mut cursor = width.bits();
    for token in &tokens {
        match token {
            Token::Literal(bits) => {
                for c in bits.bytes() {
                    cursor -= 1;
                    mask |= 1 << cursor;
                    if c == b'1' {
                        value |= 1 << cursor;
                    }
                }
            }
            Token::Field(w) => cursor -= w,
        }
    }

    Ok(CompiledLayout {
        mnemonic: mnemonic.to_ascii_lowercase(),
        pattern: Pattern { mask, value, width },
    })
}
