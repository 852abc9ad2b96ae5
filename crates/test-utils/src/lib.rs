#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

use alloc::{format, vec::Vec};

// EXPORTS
// ================================================================================================

pub use pretty_assertions::{assert_eq, assert_ne};
pub use proptest;
pub use revcirc_core::{BitId, Circuit, Gate, GateCounts, GateKind, Register};
pub use revcirc_processor::{BasisState, ExecutionOptions, Processor};
pub use revcirc_synth::{CircuitBuilder, CompositionError, SynthesisOptions, aux_size};

pub mod rand;

// ALLOCATION HELPERS
// ================================================================================================

/// Allocates one register per entry of `widths`, in order.
pub fn alloc_registers<const K: usize>(
    builder: &mut CircuitBuilder,
    widths: [usize; K],
) -> [Register; K] {
    widths.map(|width| builder.alloc(width))
}

// TEST HARNESS
// ================================================================================================

/// A synthesized circuit that can be executed against many inputs.
///
/// The circuit is finalized once, when the test is created; each call to [Test::run] executes it
/// on a fresh all-zero state into which the inputs have been loaded.
pub struct Test {
    circuit: Circuit,
    processor: Processor,
}

impl Test {
    /// Finalizes the builder into a test.
    ///
    /// # Panics
    /// Panics if the builder does not hold a valid circuit.
    #[track_caller]
    pub fn new(builder: CircuitBuilder) -> Self {
        let circuit = match builder.into_circuit() {
            Ok(circuit) => circuit,
            Err(err) => panic!("failed to finalize circuit: {err}"),
        };
        Self { circuit, processor: Processor::default() }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Executes the circuit after loading every `(register, value)` pair of `inputs`.
    ///
    /// # Panics
    /// Panics if an input does not fit its register or execution fails.
    #[track_caller]
    pub fn run(&self, inputs: &[(&Register, u64)]) -> Execution {
        let mut state = BasisState::new(self.circuit.num_bits());
        for &(register, value) in inputs {
            if let Err(err) = state.load(register, value) {
                panic!("failed to load {value} into {register}: {err}");
            }
        }
        if let Err(err) = self.processor.execute(&self.circuit, &mut state) {
            panic!("failed to execute circuit: {err}");
        }
        Execution { state, inputs: inputs.iter().map(|&(r, v)| (r.clone(), v)).collect() }
    }
}

// EXECUTION
// ================================================================================================

/// The final state of one execution of a [Test].
pub struct Execution {
    state: BasisState,
    inputs: Vec<(Register, u64)>,
}

impl Execution {
    pub fn state(&self) -> &BasisState {
        &self.state
    }

    /// Returns the value held by `register`.
    #[track_caller]
    pub fn read(&self, register: &Register) -> u64 {
        match self.state.read(register) {
            Ok(value) => value,
            Err(err) => panic!("failed to read {register}: {err}"),
        }
    }

    /// Asserts that `register` holds `expected`.
    #[track_caller]
    pub fn expect_value(&self, register: &Register, expected: u64) -> &Self {
        let actual = self.read(register);
        assert_eq!(actual, expected, "{}", self.describe(register));
        self
    }

    /// Asserts that every bit of `register` is 0.
    #[track_caller]
    pub fn expect_zero(&self, register: &Register) -> &Self {
        self.expect_value(register, 0)
    }

    /// Asserts that every input register still holds the value it was loaded with.
    #[track_caller]
    pub fn expect_inputs_preserved(&self) -> &Self {
        for (register, value) in self.inputs.iter() {
            self.expect_value(register, *value);
        }
        self
    }

    fn describe(&self, register: &Register) -> alloc::string::String {
        let inputs: Vec<_> =
            self.inputs.iter().map(|(register, value)| format!("{register} = {value}")).collect();
        format!("register {register} after running with inputs {{{}}}", inputs.join(", "))
    }
}
