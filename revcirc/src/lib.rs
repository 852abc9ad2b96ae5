#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

// EXPORTS
// ================================================================================================

pub use revcirc_core::{
    BitId, Circuit, Gate, GateCounts, GateKind, Register, errors::CircuitError,
};
pub use revcirc_processor::{BasisState, ExecutionError, ExecutionOptions, Processor, execute};
pub use revcirc_synth::{
    BitStatus, CircuitBuilder, CompositionError, Scratch, SynthesisOptions, adder, aux_size,
    compare, gates, modular, registers,
};

#[cfg(feature = "logging")]
pub use revcirc_synth::init_logging;

/// Executes `circuit` on an all-zero state into which `inputs` have been loaded, and returns the
/// final state.
///
/// See [Processor::execute] for the execution semantics.
pub fn run(circuit: &Circuit, inputs: &[(&Register, u64)]) -> Result<BasisState, ExecutionError> {
    let mut state = BasisState::new(circuit.num_bits());
    for &(register, value) in inputs {
        state.load(register, value)?;
    }
    execute(circuit, &mut state)?;
    Ok(state)
}
