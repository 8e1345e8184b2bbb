//! ISA selection configuration.
//!
//! This module selects which instruction set a disassembler is built for:
//! 1. **Width:** the XLEN used for address display and target wrap-around.
//! 2. **Preset:** one of the standard module lists (`rv64gc`, ...).
//! 3. **Modules:** extra modules appended after the preset, in order.
//!
//! Configuration is supplied as JSON (the CLI's `--config`) or use `IsaConfig::default()`.

use serde::Deserialize;
use thiserror::Error;

use crate::common::IsaError;
use crate::isa::module::{self, Module};
use crate::isa::set::{Isa, Xlen};

/// Error raised while loading a configuration or building its ISA.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed into an `IsaConfig`.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// `xlen` is not 32, 64 or 128.
    #[error("unsupported xlen {0} (expected 32, 64 or 128)")]
    InvalidXlen(u32),
    /// A selected module failed to compile.
    #[error(transparent)]
    Isa(#[from] IsaError),
}

/// Standard module lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// RV32I base only.
    Rv32i,
    /// RV32IMAFD.
    Rv32g,
    /// RV32IMAFDC.
    Rv32gc,
    /// RV64I base only.
    Rv64i,
    /// RV64IMAFD.
    Rv64g,
    /// RV64IMAFDC.
    #[default]
    Rv64gc,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Self; 6] = [
        Self::Rv32i,
        Self::Rv32g,
        Self::Rv32gc,
        Self::Rv64i,
        Self::Rv64g,
        Self::Rv64gc,
    ];

    /// Modules of the preset, in match order.
    pub const fn modules(self) -> &'static [Module] {
        match self {
            Self::Rv32i => module::RV32I,
            Self::Rv32g => module::RV32G,
            Self::Rv32gc => module::RV32GC,
            Self::Rv64i => module::RV64I,
            Self::Rv64g => module::RV64G,
            Self::Rv64gc => module::RV64GC,
        }
    }

    /// XLEN the preset is defined for.
    pub const fn xlen(self) -> Xlen {
        match self {
            Self::Rv32i | Self::Rv32g | Self::Rv32gc => Xlen::Rv32,
            Self::Rv64i | Self::Rv64g | Self::Rv64gc => Xlen::Rv64,
        }
    }

    /// Lower-case preset name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rv32i => "rv32i",
            Self::Rv32g => "rv32g",
            Self::Rv32gc => "rv32gc",
            Self::Rv64i => "rv64i",
            Self::Rv64g => "rv64g",
            Self::Rv64gc => "rv64gc",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown ISA preset `{s}`"))
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use rvdis_core::config::{IsaConfig, Preset};
/// use rvdis_core::isa::module::Module;
///
/// let json = r#"{ "xlen": 32, "modules": ["rv32i", "rv32m", "rv32c"] }"#;
/// let config = IsaConfig::from_json(json).unwrap();
/// assert_eq!(config.preset, None);
/// assert_eq!(config.modules, vec![Module::Rv32i, Module::Rv32m, Module::Rv32c]);
///
/// let isa = config.build().unwrap();
/// assert_eq!(isa.to_string(), "rv32imc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IsaConfig {
    /// Register width in bits; defaults to the preset's width, else 64.
    #[serde(default)]
    pub xlen: Option<u32>,
    /// Standard module list placed first.
    #[serde(default)]
    pub preset: Option<Preset>,
    /// Modules appended after the preset.
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl IsaConfig {
    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON, unknown keys, or
    /// unknown preset/module names.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration for a preset at its native width.
    pub fn for_preset(preset: Preset) -> Self {
        Self {
            xlen: None,
            preset: Some(preset),
            modules: Vec::new(),
        }
    }

    /// The preset actually applied: the configured one, or `rv64gc` when
    /// neither a preset nor modules are given.
    pub fn effective_preset(&self) -> Option<Preset> {
        self.preset
            .or_else(|| self.modules.is_empty().then_some(Preset::default()))
    }

    /// Resolves the configured XLEN.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidXlen` for widths other than 32, 64 or 128.
    pub fn resolve_xlen(&self) -> Result<Xlen, ConfigError> {
        match self.xlen {
            Some(bits) => Xlen::from_bits(bits).ok_or(ConfigError::InvalidXlen(bits)),
            None => Ok(self.effective_preset().map_or(Xlen::Rv64, Preset::xlen)),
        }
    }

    /// Ordered module list: preset modules, then the explicit ones.
    pub fn module_list(&self) -> Vec<Module> {
        let mut list: Vec<Module> =
            self.effective_preset().map(Preset::modules).unwrap_or_default().to_vec();
        list.extend_from_slice(&self.modules);
        list
    }

    /// Builds the configured instruction set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidXlen` for a bad width and
    /// `ConfigError::Isa` if the module list does not compose.
    pub fn build(&self) -> Result<Isa, ConfigError> {
        let xlen = self.resolve_xlen()?;
        Ok(Isa::new(xlen, &self.module_list())?)
    }
}
