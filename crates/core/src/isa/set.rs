//! Assembled instruction sets.
//!
//! An `Isa` is built once from an ordered list of modules and is read-only
//! afterwards, so it can be shared across threads for concurrent decoding.

use std::fmt;

use tracing::{debug, trace};

use crate::common::IsaError;
use crate::isa::catalog::{Catalog, Insertion, InstructionMeta};
use crate::isa::disasm::{Disassembly, ILLEGAL, address_mask, render};
use crate::isa::extension::ExtensionSet;
use crate::isa::instruction::instruction_length;
use crate::isa::module::{IsaModule, Module};
use crate::isa::pattern::compile;

/// Native register and address width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Xlen {
    /// 32-bit.
    Rv32,
    /// 64-bit.
    #[default]
    Rv64,
    /// 128-bit.
    Rv128,
}

impl Xlen {
    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
            Self::Rv128 => 128,
        }
    }

    /// Returns the `Xlen` with the given bit width, if it is 32, 64 or 128.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::Rv32),
            64 => Some(Self::Rv64),
            128 => Some(Self::Rv128),
            _ => None,
        }
    }
}

/// A composed instruction set ready for decoding.
#[derive(Clone, Debug)]
pub struct Isa {
    xlen: Xlen,
    extensions: ExtensionSet,
    catalog: Catalog,
}

impl Isa {
    /// Creates an instruction set with no modules.
    pub const fn empty(xlen: Xlen) -> Self {
        Self {
            xlen,
            extensions: ExtensionSet::empty(),
            catalog: Catalog::new(),
        }
    }

    /// Builds an instruction set from `modules`, added in order.
    ///
    /// # Errors
    ///
    /// Returns `IsaError::MalformedDefinition` if a layout fails to compile or
    /// a definition overlaps an earlier one in a way first-match cannot
    /// resolve.
    pub fn new(xlen: Xlen, modules: &[Module]) -> Result<Self, IsaError> {
        let mut isa = Self::empty(xlen);
        for &module in modules {
            isa.add_module(module.definition())?;
        }
        debug!(
            isa = %isa,
            compressed = isa.catalog.compressed_len(),
            standard = isa.catalog.standard_len(),
            "Built instruction set"
        );
        Ok(isa)
    }

    /// Compiles and appends every definition of `module`.
    ///
    /// Definitions are added one at a time; on error the set keeps the
    /// definitions that preceded the failing one.
    ///
    /// # Errors
    ///
    /// See [`Isa::new`].
    pub fn add_module(&mut self, module: &IsaModule) -> Result<(), IsaError> {
        self.extensions = self.extensions.with(module.extension);
        let mut added = 0usize;
        for &(layout, format) in module.definitions {
            let compiled = compile(layout, module.width)?;
            let meta = InstructionMeta {
                mnemonic: compiled.mnemonic,
                pattern: compiled.pattern,
                format,
                extension: module.extension,
            };
            if self.catalog.push(meta)? == Insertion::Added {
                added += 1;
            }
        }
        debug!(
            module = module.name,
            width = module.width.bits(),
            added,
            "Added ISA module"
        );
        Ok(())
    }

    /// Register and address width.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Extensions contributed by the added modules.
    pub const fn extensions(&self) -> ExtensionSet {
        self.extensions
    }

    /// Returns the definition that `word` decodes as, if any.
    pub fn lookup(&self, word: u32) -> Option<&InstructionMeta> {
        self.catalog.lookup(word)
    }

    /// Iterates over the compiled definitions, 16-bit first, in match order.
    pub fn instructions(&self) -> impl Iterator<Item = &InstructionMeta> {
        self.catalog.iter()
    }

    /// Disassembles the instruction `word` located at `address`.
    ///
    /// The low two bits of `word` select its length. For a 16-bit instruction
    /// only the low half is used and recorded; the upper half may hold the
    /// next parcel. Words that match no definition render as `illegal`.
    /// `address` is truncated to XLEN bits.
    pub fn disassemble(&self, address: u64, word: u32) -> Disassembly {
        let length = instruction_length(word);
        let word = if length == 2 { word & 0xffff } else { word };
        let mask = address_mask(self.xlen.bits());
        let address = address & mask;
        let assembly = self.catalog.lookup(word).map_or_else(
            || {
                trace!(address, word, "No matching instruction definition");
                ILLEGAL.to_owned()
            },
            |meta| {
                render(
                    meta.format,
                    &meta.mnemonic,
                    address,
                    word,
                    mask,
                )
            },
        );
        Disassembly {
            address,
            address_bits: self.xlen.bits(),
            word,
            length,
            assembly,
        }
    }
}

impl fmt::Display for Isa {
    /// ISA string such as `rv64imafdc`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rv{}{}", self.xlen.bits(), self.extensions)
    }
}
