use crate::BitId;

// CIRCUIT ERROR
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CircuitError {
    #[error("gate {gate_idx} references {bit}, but the circuit only has {num_bits} bits")]
    BitOutOfRange { gate_idx: usize, bit: BitId, num_bits: usize },
    #[error("gate {gate_idx} uses {bit} both as a control and as its target")]
    TargetIsControl { gate_idx: usize, bit: BitId },
}
