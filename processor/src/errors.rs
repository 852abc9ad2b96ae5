use revcirc_core::BitId;

// EXECUTION ERROR
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    #[error("{bit} is outside of the {num_bits}-bit state")]
    BitOutOfRange { bit: BitId, num_bits: usize },
    #[error("circuit acts on {circuit_bits} bits, but the state only holds {state_bits}")]
    StateTooSmall { circuit_bits: usize, state_bits: usize },
    #[error("exceeded the allowed number of gates {0}")]
    GateLimitExceeded(usize),
    #[error("registers wider than 64 bits cannot be read or loaded as integers, but width was {0}")]
    RegisterTooWide(usize),
    #[error("value {value} does not fit into a {width}-bit register")]
    ValueTooWide { value: u64, width: usize },
}
