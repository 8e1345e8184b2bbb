//! ISA extension identifiers.
//!
//! Extensions are tracked as a bitmask laid out like the `misa` CSR: bit 0 is
//! `A`, bit 25 is `Z`.

use std::fmt;

/// A standard single-letter RISC-V extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Atomic instructions.
    A,
    /// Bit manipulation.
    B,
    /// Compressed (16-bit) instructions.
    C,
    /// Double-precision floating point.
    D,
    /// Reduced register file base (RV32E).
    E,
    /// Single-precision floating point.
    F,
    /// Hypervisor.
    H,
    /// Base integer instruction set.
    I,
    /// Integer multiply and divide.
    M,
    /// User-level interrupts.
    N,
    /// Quad-precision floating point.
    Q,
    /// Supervisor mode.
    S,
    /// User mode.
    U,
    /// Vector.
    V,
    /// Non-standard extensions present.
    X,
}

/// Order in which extensions are spelled in an ISA string (`rv64imafdc`).
const CANONICAL_ORDER: [Extension; 15] = [
    Extension::I,
    Extension::E,
    Extension::M,
    Extension::A,
    Extension::F,
    Extension::D,
    Extension::Q,
    Extension::C,
    Extension::B,
    Extension::V,
    Extension::H,
    Extension::N,
    Extension::S,
    Extension::U,
    Extension::X,
];

impl Extension {
    /// Returns the extension letter in lower case.
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::H => 'h',
            Self::I => 'i',
            Self::M => 'm',
            Self::N => 'n',
            Self::Q => 'q',
            Self::S => 's',
            Self::U => 'u',
            Self::V => 'v',
            Self::X => 'x',
        }
    }

    /// Returns the `misa` bit for this extension.
    pub const fn bit(self) -> u32 {
        1 << (self.letter() as u32 - 'a' as u32)
    }
}

/// Set of extensions accumulated while modules are added to an ISA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtensionSet(u32);

impl ExtensionSet {
    /// Creates an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a copy of the set with `ext` added.
    #[must_use]
    pub const fn with(self, ext: Extension) -> Self {
        Self(self.0 | ext.bit())
    }

    /// Returns true if `ext` is in the set.
    pub const fn contains(self, ext: Extension) -> bool {
        self.0 & ext.bit() != 0
    }

    /// Returns true if no extension is present.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the present extensions in canonical ISA-string order.
    pub fn iter(self) -> impl Iterator<Item = Extension> {
        CANONICAL_ORDER.into_iter().filter(move |ext| self.contains(*ext))
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ext in self.iter() {
            write!(f, "{}", ext.letter())?;
        }
        Ok(())
    }
}
