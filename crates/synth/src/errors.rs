use alloc::string::String;

use revcirc_core::{BitId, errors::CircuitError};

// COMPOSITION ERROR
// ================================================================================================

/// An invalid composition of circuits, detected at synthesis time.
///
/// Every variant describes a programming error in the caller: synthesis is deterministic, so
/// retrying with the same arguments fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    #[error("operand `{operand}` must be {expected} bits wide, but was {actual}")]
    LengthMismatch {
        operand: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{bit} is used by more than one operand")]
    Overlap { bit: BitId },
    #[error("{bit} must be zero here, but may hold a value")]
    NotZeroed { bit: BitId },
    #[error("{bit} was never allocated; the builder holds {num_bits} bits")]
    UnallocatedBit { bit: BitId, num_bits: usize },
    #[error("'{value}' is not a string of binary digits")]
    InvalidBitString { value: String },
    #[error("value {value} does not fit into a {width}-bit register")]
    ValueTooWide { value: u64, width: usize },
    #[error("emitted gates do not form a valid circuit")]
    Circuit(#[from] CircuitError),
}
