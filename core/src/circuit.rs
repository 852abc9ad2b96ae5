use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Gate, GateCounts, errors::CircuitError};

// CIRCUIT
// ================================================================================================

/// An append-only sequence of gates over a flat space of `num_bits` bits.
///
/// Gate order is significant: later gates read bits written by earlier ones, so a circuit is
/// never reordered once built.
///
/// Deserialized circuits go through [Circuit::new], so they are validated like any other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCircuit"))]
pub struct Circuit {
    num_bits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Returns a circuit over `num_bits` bits made of the specified gates.
    ///
    /// # Errors
    /// Returns an error if a gate references a bit outside of `0..num_bits`, or if a gate uses
    /// its target as one of its controls.
    pub fn new(num_bits: usize, gates: Vec<Gate>) -> Result<Self, CircuitError> {
        for (gate_idx, gate) in gates.iter().enumerate() {
            if let Some(bit) = gate.bits().find(|bit| bit.as_usize() >= num_bits) {
                return Err(CircuitError::BitOutOfRange { gate_idx, bit, num_bits });
            }
            if gate.controls().contains(&gate.target()) {
                return Err(CircuitError::TargetIsControl { gate_idx, bit: gate.target() });
            }
        }

        Ok(Self { num_bits, gates })
    }

    /// Returns the size of the bit space this circuit acts on.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Returns the number of gates of each kind.
    pub fn stats(&self) -> GateCounts {
        self.gates.iter().collect()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCircuit {
    num_bits: usize,
    gates: Vec<Gate>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCircuit> for Circuit {
    type Error = CircuitError;

    fn try_from(raw: RawCircuit) -> Result<Self, Self::Error> {
        Self::new(raw.num_bits, raw.gates)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gate in self.gates.iter() {
            writeln!(f, "{gate}")?;
        }
        Ok(())
    }
}

// TESTS
// ================================================================================================
