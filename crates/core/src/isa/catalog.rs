//! Instruction catalog.
//!
//! Holds the compiled definitions of an ISA in two ordered lists, one per
//! instruction width. Lookup is a linear first-match scan of the list the
//! word's length bits select, so definition order is significant: a more
//! specific definition must precede any broader one it carves out of.

use tracing::debug;

use crate::common::IsaError;
use crate::isa::extension::Extension;
use crate::isa::format::Format;
use crate::isa::instruction::is_standard;
use crate::isa::pattern::{InstructionWidth, Pattern};

/// A compiled instruction definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMeta {
    /// Lower-case mnemonic.
    pub mnemonic: String,
    /// Fixed-bit matcher.
    pub pattern: Pattern,
    /// Formatter used to render matches.
    pub format: Format,
    /// Extension of the module the definition came from.
    pub extension: Extension,
}

/// Result of adding a definition to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The definition was appended.
    Added,
    /// An identical matcher was already present; the definition was dropped.
    Duplicate,
}

/// Ordered 16-bit and 32-bit definition lists.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    ins16: Vec<InstructionMeta>,
    ins32: Vec<InstructionMeta>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub const fn new() -> Self {
        Self {
            ins16: Vec::new(),
            ins32: Vec::new(),
        }
    }

    const fn list(&self, width: InstructionWidth) -> &Vec<InstructionMeta> {
        match width {
            InstructionWidth::Compressed => &self.ins16,
            InstructionWidth::Standard => &self.ins32,
        }
    }

    /// Appends a definition after checking it against the earlier ones of the
    /// same width.
    ///
    /// Two definitions may both match some word only if the earlier one fixes
    /// every bit the later one fixes (a carve-out); a later definition
    /// identical to an earlier one is dropped.
    ///
    /// # Errors
    ///
    /// Returns `IsaError::MalformedDefinition` if the new definition overlaps
    /// an earlier one in any other way, since one of them could then only
    /// ever match partially or not at all.
    pub fn push(&mut self, meta: InstructionMeta) -> Result<Insertion, IsaError> {
        let new = meta.pattern;
        for earlier in self.list(new.width) {
            let old = earlier.pattern;
            if !old.intersects(&new) {
                continue;
            }
            if old == new {
                debug!(
                    mnemonic = %meta.mnemonic,
                    kept = %earlier.mnemonic,
                    "Skipping duplicate instruction definition"
                );
                return Ok(Insertion::Duplicate);
            }
            if old.fixes_all_of(&new) {
                continue;
            }
            return Err(IsaError::malformed(
                &meta.mnemonic,
                format!(
                    "overlaps earlier definition `{}` (mask {:#x}/{:#x}, value {:#x}/{:#x})",
                    earlier.mnemonic, old.mask, new.mask, old.value, new.value
                ),
            ));
        }

        match new.width {
            InstructionWidth::Compressed => self.ins16.push(meta),
            InstructionWidth::Standard => self.ins32.push(meta),
        }
        Ok(Insertion::Added)
    }

    /// Returns the first definition matching `word`, or `None`.
    ///
    /// Words whose low two bits are both set are 32-bit; only the low 16 bits
    /// of any other word are considered.
    pub fn lookup(&self, word: u32) -> Option<&InstructionMeta> {
        let (list, word) = if is_standard(word) {
            (&self.ins32, word)
        } else {
            (&self.ins16, word & 0xffff)
        };
        list.iter().find(|meta| meta.pattern.matches(word))
    }

    /// Number of compiled 16-bit definitions.
    pub fn compressed_len(&self) -> usize {
        self.ins16.len()
    }

    /// Number of compiled 32-bit definitions.
    pub fn standard_len(&self) -> usize {
        self.ins32.len()
    }

    /// Iterates over all definitions, 16-bit first, each in match order.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionMeta> {
        self.ins16.iter().chain(self.ins32.iter())
    }
}
