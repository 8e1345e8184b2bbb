//! Instruction-set construction errors.
//!
//! Decoding is total over all 16/32-bit inputs, so the only failures live at
//! build time: a static layout string that does not describe a well-formed
//! instruction, or a catalog whose ordering lets one definition hide another.

use thiserror::Error;

/// Error raised while compiling instruction definitions into a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IsaError {
    /// A layout string is inconsistent or a catalog ordering is ambiguous.
    ///
    /// The definition is the offending layout (or the pair of mnemonics for an
    /// overlap); the reason says what is wrong with it.
    #[error("malformed instruction definition `{definition}`: {reason}")]
    MalformedDefinition {
        /// The layout string (or mnemonic pair) that failed to compile.
        definition: String,
        /// Human-readable explanation of the defect.
        reason: String,
    },
}

impl IsaError {
    /// Creates a new `MalformedDefinition` error.
    pub fn malformed(definition: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDefinition {
            definition: definition.into(),
            reason: reason.into(),
        }
    }
}
