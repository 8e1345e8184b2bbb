//! Table-driven RISC-V disassembler library.
//!
//! This crate turns raw RISC-V instruction words into assembly text:
//! 1. **Pattern compiler:** Textual bit layouts (as printed in the ISA manual) become mask/value matchers.
//! 2. **Catalog:** Extension modules are composed into 16-bit and 32-bit first-match tables.
//! 3. **Field decoders:** Per-format extraction of registers and scattered immediates.
//! 4. **Formatter:** Mnemonic plus operands, with pseudo-instruction canonicalisation.
//! 5. **Configuration:** JSON-selectable ISA presets and module lists.
//!
//! ```
//! use rvdis_core::isa::module::RV32GC;
//! use rvdis_core::{Isa, Xlen};
//!
//! let isa = Isa::new(Xlen::Rv32, RV32GC)?;
//! assert_eq!(isa.disassemble(0x0, 0x0000_8067).assembly, "ret");
//! # Ok::<(), rvdis_core::IsaError>(())
//! ```

/// Common types shared by every layer (errors).
pub mod common;
/// ISA selection configuration (presets, module lists, JSON loading).
pub mod config;
/// Instruction set (pattern compiler, catalog, decoders, formatter, tables).
pub mod isa;

/// Build-time error raised while assembling an ISA.
pub use crate::common::IsaError;
/// Root configuration type; deserialize from JSON or use `IsaConfig::default()`.
pub use crate::config::{ConfigError, IsaConfig};
/// A single disassembled instruction.
pub use crate::isa::disasm::Disassembly;
/// Instruction set ready for decoding; construct with `Isa::new`.
pub use crate::isa::set::{Isa, Xlen};
