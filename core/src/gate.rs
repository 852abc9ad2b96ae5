use core::{fmt, slice};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::BitId;

// GATE
// ================================================================================================

/// An elementary gate of the execution substrate.
///
/// Every variant except [Gate::Reset] is a (multi-)controlled NOT: it flips `target` when all of
/// its controls are 1, and it is its own inverse. [Gate::Reset] forces a bit back to 0 and is the
/// only non-unitary operation a circuit may contain.
///
/// Deserialization narrows a [Gate::Mcx] with fewer than three controls to the matching variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawGate"))]
pub enum Gate {
    /// Flips the target unconditionally.
    Not(BitId),
    /// Flips the target when the control is 1.
    Cnot { control: BitId, target: BitId },
    /// Flips the target when both controls are 1.
    Toffoli { controls: [BitId; 2], target: BitId },
    /// Flips the target when all of three or more controls are 1.
    Mcx { controls: SmallVec<[BitId; 4]>, target: BitId },
    /// Drives the target to 0 regardless of its current value.
    Reset(BitId),
}

impl Gate {
    /// Returns the narrowest NOT gate flipping `target` under all of `controls`.
    pub fn controlled(controls: &[BitId], target: BitId) -> Self {
        match *controls {
            [] => Self::Not(target),
            [control] => Self::Cnot { control, target },
            [c0, c1] => Self::Toffoli { controls: [c0, c1], target },
            _ => Self::Mcx {
                controls: controls.iter().copied().collect(),
                target,
            },
        }
    }

    /// Returns the bit written by this gate.
    pub fn target(&self) -> BitId {
        match self {
            Self::Not(target) | Self::Reset(target) => *target,
            Self::Cnot { target, .. } | Self::Toffoli { target, .. } | Self::Mcx { target, .. } => {
                *target
            },
        }
    }

    /// Returns the bits read (but not written) by this gate.
    pub fn controls(&self) -> &[BitId] {
        match self {
            Self::Not(_) | Self::Reset(_) => &[],
            Self::Cnot { control, .. } => slice::from_ref(control),
            Self::Toffoli { controls, .. } => &controls[..],
            Self::Mcx { controls, .. } => controls.as_slice(),
        }
    }

    /// Returns every bit this gate touches, controls first.
    pub fn bits(&self) -> impl Iterator<Item = BitId> + '_ {
        self.controls().iter().copied().chain(core::iter::once(self.target()))
    }

    /// Returns false only for [Gate::Reset].
    pub fn is_unitary(&self) -> bool {
        !matches!(self, Self::Reset(_))
    }

    pub fn kind(&self) -> GateKind {
        match self {
            Self::Not(_) => GateKind::Not,
            Self::Cnot { .. } => GateKind::Cnot,
            Self::Toffoli { .. } => GateKind::Toffoli,
            Self::Mcx { .. } => GateKind::Mcx,
            Self::Reset(_) => GateKind::Reset,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
enum RawGate {
    Not(BitId),
    Cnot { control: BitId, target: BitId },
    Toffoli { controls: [BitId; 2], target: BitId },
    Mcx { controls: SmallVec<[BitId; 4]>, target: BitId },
    Reset(BitId),
}

#[cfg(feature = "serde")]
impl From<RawGate> for Gate {
    fn from(raw: RawGate) -> Self {
        match raw {
            RawGate::Not(target) => Self::Not(target),
            RawGate::Cnot { control, target } => Self::Cnot { control, target },
            RawGate::Toffoli { controls, target } => Self::Toffoli { controls, target },
            RawGate::Mcx { controls, target } => Self::controlled(&controls, target),
            RawGate::Reset(target) => Self::Reset(target),
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        for (i, bit) in self.bits().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{bit}")?;
        }
        Ok(())
    }
}

// GATE KIND
// ================================================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GateKind {
    Not,
    Cnot,
    Toffoli,
    Mcx,
    Reset,
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Not => "x",
            Self::Cnot => "cx",
            Self::Toffoli => "ccx",
            Self::Mcx => "mcx",
            Self::Reset => "reset",
        };
        f.write_str(name)
    }
}

// GATE COUNTS
// ================================================================================================

/// Number of gates of each kind in a circuit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GateCounts {
    pub not: usize,
    pub cnot: usize,
    pub toffoli: usize,
    pub mcx: usize,
    pub reset: usize,
}

impl GateCounts {
    /// Records one more gate of the specified kind.
    pub fn record(&mut self, kind: GateKind) {
        match kind {
            GateKind::Not => self.not += 1,
            GateKind::Cnot => self.cnot += 1,
            GateKind::Toffoli => self.toffoli += 1,
            GateKind::Mcx => self.mcx += 1,
            GateKind::Reset => self.reset += 1,
        }
    }

    /// Returns the number of controlled-NOT gates of any width.
    pub fn unitary(&self) -> usize {
        self.not + self.cnot + self.toffoli + self.mcx
    }

    pub fn total(&self) -> usize {
        self.unitary() + self.reset
    }
}

impl<'a> FromIterator<&'a Gate> for GateCounts {
    fn from_iter<T: IntoIterator<Item = &'a Gate>>(iter: T) -> Self {
        let mut counts = Self::default();
        for gate in iter {
            counts.record(gate.kind());
        }
        counts
    }
}

impl fmt::Display for GateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, cx: {}, ccx: {}, mcx: {}, reset: {}",
            self.not, self.cnot, self.toffoli, self.mcx, self.reset
        )
    }
}

// TESTS
// ================================================================================================
