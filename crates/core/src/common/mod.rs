//! Common types used throughout the disassembler.
//!
//! Holds the build-time error type; decoding itself never fails.

/// Error types raised while building an instruction set.
pub mod error;

pub use error::IsaError;
