use revcirc_core::{BitId, Gate, Register, utils::indexing::IndexVec};

use crate::ExecutionError;

// BASIS STATE
// ================================================================================================

/// A classical assignment of 0/1 to every position of a flat bit space.
///
/// Since every unitary gate of a circuit is a controlled NOT, applying a gate to a basis state
/// yields another basis state; a reset simply clears its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasisState {
    bits: IndexVec<BitId, bool>,
}

/// Constructors
impl BasisState {
    /// Returns an all-zero state over `num_bits` bits.
    pub fn new(num_bits: usize) -> Self {
        Self { bits: IndexVec::from_elem(false, num_bits) }
    }
}

/// Accessors
impl BasisState {
    pub fn num_bits(&self) -> usize {
        self.bits.len()
    }

    /// Returns the value of the specified bit.
    pub fn bit(&self, bit: BitId) -> Result<bool, ExecutionError> {
        self.bits.get(bit).copied().ok_or(ExecutionError::BitOutOfRange {
            bit,
            num_bits: self.num_bits(),
        })
    }

    /// Interprets the register as an unsigned integer, least-significant bit first.
    pub fn read(&self, register: &Register) -> Result<u64, ExecutionError> {
        if register.len() > u64::BITS as usize {
            return Err(ExecutionError::RegisterTooWide(register.len()));
        }

        let mut value = 0;
        for (i, &bit) in register.iter().enumerate() {
            value |= (self.bit(bit)? as u64) << i;
        }
        Ok(value)
    }

    /// Returns true if every bit of the register is 0.
    pub fn is_zero(&self, register: &Register) -> Result<bool, ExecutionError> {
        for &bit in register.iter() {
            if self.bit(bit)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Mutators
impl BasisState {
    /// Overwrites the register with the binary representation of `value`.
    ///
    /// This is an assignment performed by the execution layer, not a gate: it does not appear in
    /// any circuit.
    pub fn load(&mut self, register: &Register, value: u64) -> Result<(), ExecutionError> {
        let width = register.len();
        if width > u64::BITS as usize {
            return Err(ExecutionError::RegisterTooWide(width));
        }
        if width < u64::BITS as usize && value >> width != 0 {
            return Err(ExecutionError::ValueTooWide { value, width });
        }

        for (i, &bit) in register.iter().enumerate() {
            *self.bit_mut(bit)? = (value >> i) & 1 == 1;
        }
        Ok(())
    }

    /// Applies a single gate to this state.
    pub fn apply(&mut self, gate: &Gate) -> Result<(), ExecutionError> {
        match gate {
            Gate::Reset(target) => *self.bit_mut(*target)? = false,
            _ => {
                let mut fire = true;
                for &control in gate.controls() {
                    fire &= self.bit(control)?;
                }
                let target = self.bit_mut(gate.target())?;
                *target ^= fire;
            },
        }
        Ok(())
    }

    fn bit_mut(&mut self, bit: BitId) -> Result<&mut bool, ExecutionError> {
        let num_bits = self.num_bits();
        self.bits.get_mut(bit).ok_or(ExecutionError::BitOutOfRange { bit, num_bits })
    }
}

// TESTS
// ================================================================================================
