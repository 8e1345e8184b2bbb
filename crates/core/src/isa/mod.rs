//! Instruction Set Architecture (ISA) definitions and the decoding engine.
//!
//! The pipeline runs once at setup and then once per instruction:
//!
//! * Setup: `pattern` compiles each layout string of a `module` into a
//!   mask/value pair and `catalog` stores them by width in insertion order.
//! * Per word: `catalog` finds the first matching definition, `disasm`
//!   renders it through the `format` tag, calling the `decode` field
//!   extractors and the `abi`/`csr` name providers.
//!
//! # Extensions
//!
//! * `rv32`: Base integer, M, A, F and D instructions shared by RV32 and RV64.
//! * `rv64`: Instructions added by the 64-bit base and extensions.
//! * `rvc`: 16-bit compressed instructions.

/// Application Binary Interface (ABI) register names.
pub mod abi;

/// Compiled definitions and first-match lookup.
pub mod catalog;

/// Control and status register names.
pub mod csr;

/// Per-format operand field decoders.
pub mod decode;

/// Instruction formatter and the `Disassembly` result record.
pub mod disasm;

/// ISA extension identifiers and the misa-style extension bitmask.
pub mod extension;

/// Formatter tags attached to each instruction definition.
pub mod format;

/// Instruction bit extraction utilities.
pub mod instruction;

/// ISA modules, module identifiers and preset module sets.
pub mod module;

/// Bit-layout compiler (layout string to mask/value matcher).
pub mod pattern;

/// 32-bit instructions common to RV32 and RV64 (I, M, A, F, D).
pub mod rv32;

/// 32-bit instructions added by RV64 (I, M, A, F, D).
pub mod rv64;

/// Compressed (16-bit) instructions.
pub mod rvc;

/// The assembled instruction set and its decode entry point.
pub mod set;
