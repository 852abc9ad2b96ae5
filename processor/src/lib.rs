#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use revcirc_core::Circuit;
use tracing::instrument;

mod errors;
pub use errors::ExecutionError;

mod state;
pub use state::BasisState;

// EXECUTION OPTIONS
// ================================================================================================

/// Options that govern circuit execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionOptions {
    max_gates: usize,
}

impl ExecutionOptions {
    /// Default upper bound on the number of gates a single execution may apply.
    pub const DEFAULT_MAX_GATES: usize = 1 << 28;

    /// Sets the maximum number of gates a circuit may contain to be executed.
    pub fn with_max_gates(mut self, max_gates: usize) -> Self {
        self.max_gates = max_gates;
        self
    }

    pub fn max_gates(&self) -> usize {
        self.max_gates
    }
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self { max_gates: Self::DEFAULT_MAX_GATES }
    }
}

// PROCESSOR
// ================================================================================================

/// Applies circuits to basis states, gate by gate and in order.
#[derive(Clone, Debug, Default)]
pub struct Processor {
    options: ExecutionOptions,
}

impl Processor {
    pub fn new(options: ExecutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Applies every gate of `circuit` to `state`.
    ///
    /// # Errors
    /// Returns an error if the circuit is longer than allowed by the execution options, or if it
    /// acts on more bits than `state` holds.
    #[instrument("execute_circuit", skip_all, fields(num_bits = circuit.num_bits(), gates = circuit.len()))]
    pub fn execute(&self, circuit: &Circuit, state: &mut BasisState) -> Result<(), ExecutionError> {
        if circuit.len() > self.options.max_gates {
            return Err(ExecutionError::GateLimitExceeded(self.options.max_gates));
        }
        if circuit.num_bits() > state.num_bits() {
            return Err(ExecutionError::StateTooSmall {
                circuit_bits: circuit.num_bits(),
                state_bits: state.num_bits(),
            });
        }

        for (gate_idx, gate) in circuit.gates().iter().enumerate() {
            tracing::trace!(gate_idx, %gate, "applying gate");
            state.apply(gate)?;
        }

        tracing::debug!(stats = %circuit.stats(), "circuit executed");
        Ok(())
    }
}

// EXECUTORS
// ================================================================================================

/// Executes `circuit` against `state` with the default [ExecutionOptions].
pub fn execute(circuit: &Circuit, state: &mut BasisState) -> Result<(), ExecutionError> {
    Processor::default().execute(circuit, state)
}

// TESTS
// ================================================================================================
