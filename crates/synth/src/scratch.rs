use core::ops::{Deref, RangeBounds};

use revcirc_core::Register;

use crate::{CircuitBuilder, CompositionError};

// SCRATCH LEASE
// ================================================================================================

/// A register of ancilla bits lent to the body of a composite circuit.
///
/// Every bit of a lease is reset when the lease is taken, and must be known to be zero again when
/// the body returns. A lease can be carved into smaller registers with [Register::slice] and
/// passed on to the circuits the body composes.
#[derive(Debug)]
pub struct Scratch {
    bits: Register,
}

impl Scratch {
    pub fn register(&self) -> &Register {
        &self.bits
    }

    /// Returns the sub-register of this lease covering `range`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    pub fn carve(&self, range: impl RangeBounds<usize>) -> Register {
        self.bits.slice(range)
    }
}

impl Deref for Scratch {
    type Target = Register;

    fn deref(&self) -> &Self::Target {
        &self.bits
    }
}

impl CircuitBuilder {
    /// Lends `aux` to `body` as scratch space.
    ///
    /// A reset of every bit of `aux` is emitted before `body` runs. Once `body` returns, every bit
    /// of `aux` must be zero again; a bit the body left dirty fails the composition with
    /// [CompositionError::NotZeroed], unless zero checks are disabled.
    pub fn with_scratch<T, F>(&mut self, aux: &Register, body: F) -> Result<T, CompositionError>
    where
        F: FnOnce(&mut Self, &Scratch) -> Result<T, CompositionError>,
    {
        log::trace!(target: "synth", "leasing {} scratch bits {aux}", aux.len());
        for &bit in aux.iter() {
            self.reset(bit)?;
        }

        let scratch = Scratch { bits: aux.clone() };
        let result = body(self, &scratch)?;

        self.ensure_zeroed(&scratch)?;
        Ok(result)
    }
}

// TESTS
// ================================================================================================
