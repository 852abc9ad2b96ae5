use alloc::vec::Vec;
use core::{
    fmt,
    ops::{Bound, Deref, RangeBounds},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::newtype_id;

// BIT ID
// ================================================================================================

newtype_id!(BitId);

impl BitId {
    /// Returns the position of this bit in the flat bit space.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

// REGISTER
// ================================================================================================

/// An ordered group of bit positions holding an unsigned binary integer.
///
/// The bit at index 0 is the least-significant one. A register does not own the bits it names:
/// it is a handle into the flat bit space of a circuit, and the same position may appear in many
/// registers (for example a scratch register and the sub-registers carved out of it).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Register {
    bits: SmallVec<[BitId; 8]>,
}

/// Constructors
impl Register {
    /// Returns a register made of the specified bits, least-significant first.
    pub fn new(bits: impl IntoIterator<Item = BitId>) -> Self {
        Self { bits: bits.into_iter().collect() }
    }

    /// Returns a register covering `len` consecutive positions starting at `start`.
    pub fn range(start: u32, len: u32) -> Self {
        Self::new((start..start + len).map(BitId::from))
    }

    /// Returns a single-bit register.
    pub fn single(bit: BitId) -> Self {
        Self::new([bit])
    }
}

/// Accessors
impl Register {
    /// Returns the bits of this register as a slice.
    pub fn as_slice(&self) -> &[BitId] {
        &self.bits
    }

    /// Returns the bit at the specified index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn bit(&self, index: usize) -> BitId {
        self.bits[index]
    }

    /// Returns a new register made of the bits in `range`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let bounds: (Bound<usize>, Bound<usize>) =
            (range.start_bound().cloned(), range.end_bound().cloned());
        Self::new(self.bits[bounds].iter().copied())
    }

    /// Splits this register into the bits below `mid` and the bits from `mid` onwards.
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let (low, high) = self.bits.split_at(mid);
        (Self::new(low.iter().copied()), Self::new(high.iter().copied()))
    }

    /// Returns true if this register and `other` share no bit position.
    pub fn is_disjoint(&self, other: &Register) -> bool {
        self.bits.iter().all(|bit| !other.bits.contains(bit))
    }

    /// Returns the highest bit position named by this register.
    pub fn max_bit(&self) -> Option<BitId> {
        self.bits.iter().copied().max()
    }
}

impl Deref for Register {
    type Target = [BitId];

    fn deref(&self) -> &Self::Target {
        &self.bits
    }
}

impl From<BitId> for Register {
    fn from(bit: BitId) -> Self {
        Self::single(bit)
    }
}

impl From<Vec<BitId>> for Register {
    fn from(bits: Vec<BitId>) -> Self {
        Self::new(bits)
    }
}

impl FromIterator<BitId> for Register {
    fn from_iter<T: IntoIterator<Item = BitId>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Register {
    type Item = &'a BitId;
    type IntoIter = core::slice::Iter<'a, BitId>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{bit}")?;
        }
        f.write_str("]")
    }
}

// TESTS
// ================================================================================================
