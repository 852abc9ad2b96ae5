use alloc::{collections::BTreeSet, vec::Vec};

use revcirc_core::{BitId, Circuit, Gate, Register, utils::indexing::IndexVec};
use smallvec::SmallVec;

use crate::{CompositionError, SynthesisOptions};

// BIT STATUS
// ================================================================================================

/// What the builder knows about the value of a bit at the current point of synthesis.
///
/// The builder never simulates the circuit: a freshly allocated or reset bit is known to be
/// [BitStatus::Zero], and any gate that targets a bit makes it [BitStatus::Dirty], even if the gate
/// could not fire on any input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitStatus {
    Zero,
    Dirty,
}

// CIRCUIT BUILDER
// ================================================================================================

/// Accumulates the gate sequence of a circuit over a growing, flat bit space.
///
/// Bits are handed out by [CircuitBuilder::alloc] and gates are appended through `x()`, `cx()`,
/// `ccx()`, `mcx()` and `reset()`. While a [CircuitBuilder::controlled] scope is active, every
/// unitary gate is emitted with the scope's control bits added to its own controls; resets are
/// never controlled.
#[derive(Debug, Default)]
pub struct CircuitBuilder {
    options: SynthesisOptions,
    gates: Vec<Gate>,
    status: IndexVec<BitId, BitStatus>,
    controls: SmallVec<[BitId; 4]>,
}

/// Constructors
impl CircuitBuilder {
    /// Returns an empty builder with default [SynthesisOptions].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SynthesisOptions) -> Self {
        Self { options, ..Self::default() }
    }
}

/// Accessors
impl CircuitBuilder {
    pub fn options(&self) -> &SynthesisOptions {
        &self.options
    }

    /// Returns the number of bits allocated so far.
    pub fn num_bits(&self) -> usize {
        self.status.len()
    }

    /// Returns the gates emitted so far.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Returns the number of gates emitted so far.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Returns the bits every gate emitted at this point is additionally controlled by.
    pub fn active_controls(&self) -> &[BitId] {
        &self.controls
    }

    /// Returns what is known about the value of `bit`, or None if it was never allocated.
    pub fn status(&self, bit: BitId) -> Option<BitStatus> {
        self.status.get(bit).copied()
    }

    /// Consumes the builder and returns the synthesized circuit.
    pub fn into_circuit(self) -> Result<Circuit, CompositionError> {
        let num_bits = self.num_bits();
        log::debug!(target: "synth", "finalized circuit: {num_bits} bits, {} gates", self.len());
        Ok(Circuit::new(num_bits, self.gates)?)
    }
}

/// Allocation
impl CircuitBuilder {
    /// Allocates `len` fresh bits and returns them as a register. New bits are zero.
    pub fn alloc(&mut self, len: usize) -> Register {
        let start = self.num_bits();
        self.status.resize(start + len, BitStatus::Zero);
        Register::range(start as u32, len as u32)
    }

    /// Allocates a single fresh bit.
    pub fn alloc_bit(&mut self) -> BitId {
        self.alloc(1).bit(0)
    }
}

/// Gates
impl CircuitBuilder {
    /// Flips `target`.
    pub fn x(&mut self, target: BitId) -> Result<(), CompositionError> {
        self.push_not(&[], target)
    }

    /// Flips `target` when `control` is 1.
    pub fn cx(&mut self, control: BitId, target: BitId) -> Result<(), CompositionError> {
        self.push_not(&[control], target)
    }

    /// Flips `target` when both controls are 1.
    pub fn ccx(&mut self, c0: BitId, c1: BitId, target: BitId) -> Result<(), CompositionError> {
        self.push_not(&[c0, c1], target)
    }

    /// Flips `target` when all of `controls` are 1.
    pub fn mcx(&mut self, controls: &[BitId], target: BitId) -> Result<(), CompositionError> {
        self.push_not(controls, target)
    }

    /// Drives `target` to 0.
    ///
    /// A reset is emitted unconditionally, even inside a controlled scope.
    pub fn reset(&mut self, target: BitId) -> Result<(), CompositionError> {
        self.check_allocated(target)?;
        if self.controls.contains(&target) {
            return Err(CompositionError::Overlap { bit: target });
        }

        self.gates.push(Gate::Reset(target));
        self.status[target] = BitStatus::Zero;
        Ok(())
    }

    fn push_not(&mut self, controls: &[BitId], target: BitId) -> Result<(), CompositionError> {
        self.check_allocated(target)?;

        let mut all: SmallVec<[BitId; 8]> = SmallVec::new();
        all.extend_from_slice(&self.controls);
        all.extend_from_slice(controls);
        for (i, &control) in all.iter().enumerate() {
            self.check_allocated(control)?;
            if control == target || all[..i].contains(&control) {
                return Err(CompositionError::Overlap { bit: control });
            }
        }

        self.gates.push(Gate::controlled(&all, target));
        self.status[target] = BitStatus::Dirty;
        Ok(())
    }

    fn check_allocated(&self, bit: BitId) -> Result<(), CompositionError> {
        if bit.as_usize() >= self.num_bits() {
            return Err(CompositionError::UnallocatedBit { bit, num_bits: self.num_bits() });
        }
        Ok(())
    }
}

/// Control scopes
impl CircuitBuilder {
    /// Runs `body` with `control` added to the controls of every unitary gate it emits.
    ///
    /// Scopes nest: a gate emitted in the innermost scope is controlled by every enclosing scope's
    /// bit. The scope is closed when `body` returns, whether or not it succeeded.
    pub fn controlled<T, F>(&mut self, control: BitId, body: F) -> Result<T, CompositionError>
    where
        F: FnOnce(&mut Self) -> Result<T, CompositionError>,
    {
        self.check_allocated(control)?;
        if self.controls.contains(&control) {
            return Err(CompositionError::Overlap { bit: control });
        }

        self.controls.push(control);
        let result = body(self);
        self.controls.pop();
        result
    }
}

/// Validation
impl CircuitBuilder {
    /// Checks that `register` is `expected` bits wide.
    pub fn ensure_width(
        &self,
        operand: &'static str,
        register: &Register,
        expected: usize,
    ) -> Result<(), CompositionError> {
        if register.len() != expected {
            return Err(CompositionError::LengthMismatch {
                operand,
                expected,
                actual: register.len(),
            });
        }
        Ok(())
    }

    /// Checks that every named register is `expected` bits wide.
    pub fn ensure_widths(
        &self,
        expected: usize,
        operands: &[(&'static str, &Register)],
    ) -> Result<(), CompositionError> {
        for &(operand, register) in operands {
            self.ensure_width(operand, register, expected)?;
        }
        Ok(())
    }

    /// Checks that no bit appears in more than one operand, or twice in the same operand.
    ///
    /// Skipped when [SynthesisOptions::verify_disjoint] is off.
    pub fn ensure_disjoint(&self, operands: &[&[BitId]]) -> Result<(), CompositionError> {
        if !self.options.verify_disjoint() {
            return Ok(());
        }

        let mut seen = BTreeSet::new();
        for &bit in operands.iter().flat_map(|operand| operand.iter()) {
            if !seen.insert(bit) {
                return Err(CompositionError::Overlap { bit });
            }
        }
        Ok(())
    }

    /// Checks that every bit is known to be zero at this point of the circuit.
    ///
    /// Skipped when [SynthesisOptions::verify_zeroed] is off.
    pub fn ensure_zeroed(&self, bits: &[BitId]) -> Result<(), CompositionError> {
        if !self.options.verify_zeroed() {
            return Ok(());
        }

        for &bit in bits {
            match self.status(bit) {
                Some(BitStatus::Zero) => {},
                Some(BitStatus::Dirty) => return Err(CompositionError::NotZeroed { bit }),
                None => {
                    return Err(CompositionError::UnallocatedBit { bit, num_bits: self.num_bits() });
                },
            }
        }
        Ok(())
    }
}

// TESTS
// ================================================================================================
