//! ISA modules and preset module lists.
//!
//! A module is one static table of instruction definitions for a single
//! extension and width. Modules are composed in order into an `Isa`; the
//! order of the presets below matters because lookup is first-match.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::isa::extension::Extension;
use crate::isa::format::Format;
use crate::isa::pattern::InstructionWidth;
use crate::isa::{rv32, rv64, rvc};

/// A layout string and the formatter that renders matches.
pub type Definition = (&'static str, Format);

/// A static table of definitions contributing one extension.
#[derive(Debug)]
pub struct IsaModule {
    /// Configuration name (`rv32c_only`).
    pub name: &'static str,
    /// Extension bit this module contributes.
    pub extension: Extension,
    /// Width every definition in the table declares.
    pub width: InstructionWidth,
    /// Definitions in match order.
    pub definitions: &'static [Definition],
}

/// Identifier of a built-in module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// RV32I base integer instructions, including fence and system.
    Rv32i,
    /// Multiply and divide.
    Rv32m,
    /// Word atomics.
    Rv32a,
    /// Single-precision floating point.
    Rv32f,
    /// Double-precision floating point.
    Rv32d,
    /// Compressed instructions common to RV32C and RV64C.
    Rv32c,
    /// C.JAL, which RV64C reuses for C.ADDIW.
    Rv32cOnly,
    /// Compressed single-precision loads and stores.
    Rv32fc,
    /// Compressed double-precision loads and stores.
    Rv32dc,
    /// RV64I additions.
    Rv64i,
    /// RV64M additions.
    Rv64m,
    /// Doubleword atomics.
    Rv64a,
    /// RV64F conversions.
    Rv64f,
    /// RV64D conversions and moves.
    Rv64d,
    /// RV64C additions.
    Rv64c,
    /// RV128C additions.
    Rv128c,
}

impl Module {
    /// Every built-in module.
    pub const ALL: [Self; 16] = [
        Self::Rv32i,
        Self::Rv32m,
        Self::Rv32a,
        Self::Rv32f,
        Self::Rv32d,
        Self::Rv32c,
        Self::Rv32cOnly,
        Self::Rv32fc,
        Self::Rv32dc,
        Self::Rv64i,
        Self::Rv64m,
        Self::Rv64a,
        Self::Rv64f,
        Self::Rv64d,
        Self::Rv64c,
        Self::Rv128c,
    ];

    /// Returns the module's definition table.
    pub fn definition(self) -> &'static IsaModule {
        match self {
            Self::Rv32i => &rv32::RV32I,
            Self::Rv32m => &rv32::RV32M,
            Self::Rv32a => &rv32::RV32A,
            Self::Rv32f => &rv32::RV32F,
            Self::Rv32d => &rv32::RV32D,
            Self::Rv32c => &rvc::RV32C,
            Self::Rv32cOnly => &rvc::RV32C_ONLY,
            Self::Rv32fc => &rvc::RV32FC,
            Self::Rv32dc => &rvc::RV32DC,
            Self::Rv64i => &rv64::RV64I,
            Self::Rv64m => &rv64::RV64M,
            Self::Rv64a => &rv64::RV64A,
            Self::Rv64f => &rv64::RV64F,
            Self::Rv64d => &rv64::RV64D,
            Self::Rv64c => &rvc::RV64C,
            Self::Rv128c => &rvc::RV128C,
        }
    }

    /// Configuration name of the module (`rv32c_only`).
    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown ISA module `{s}`"))
    }
}

/// RV32I.
pub const RV32I: &[Module] = &[Module::Rv32i];

/// RV32IMAFD.
pub const RV32G: &[Module] = &[
    Module::Rv32i,
    Module::Rv32m,
    Module::Rv32a,
    Module::Rv32f,
    Module::Rv32d,
];

/// RV32IMAFDC.
pub const RV32GC: &[Module] = &[
    Module::Rv32i,
    Module::Rv32m,
    Module::Rv32a,
    Module::Rv32f,
    Module::Rv32d,
    Module::Rv32c,
    Module::Rv32cOnly,
    Module::Rv32fc,
    Module::Rv32dc,
];

/// RV64I.
pub const RV64I: &[Module] = &[Module::Rv32i, Module::Rv64i];

/// RV64IMAFD.
pub const RV64G: &[Module] = &[
    Module::Rv32i,
    Module::Rv32m,
    Module::Rv32a,
    Module::Rv32f,
    Module::Rv32d,
    Module::Rv64i,
    Module::Rv64m,
    Module::Rv64a,
    Module::Rv64f,
    Module::Rv64d,
];

/// RV64IMAFDC.
pub const RV64GC: &[Module] = &[
    Module::Rv32i,
    Module::Rv32m,
    Module::Rv32a,
    Module::Rv32f,
    Module::Rv32d,
    Module::Rv32c,
    Module::Rv32dc,
    Module::Rv64i,
    Module::Rv64m,
    Module::Rv64a,
    Module::Rv64f,
    Module::Rv64d,
    Module::Rv64c,
];
