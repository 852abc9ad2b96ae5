// SYNTHESIS OPTIONS
// ================================================================================================

/// Controls which caller obligations are verified while circuits are synthesized.
///
/// Width checks and gate well-formedness (no target used as its own control, no unallocated
/// bits) are always enforced. The checks below can be switched off for very large circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthesisOptions {
    verify_disjoint: bool,
    verify_zeroed: bool,
}

impl SynthesisOptions {
    /// Sets whether the operands of every composite circuit are checked for shared bits.
    pub fn with_verify_disjoint(mut self, enabled: bool) -> Self {
        self.verify_disjoint = enabled;
        self
    }

    /// Sets whether output registers and released ancillae are checked to be zero.
    pub fn with_verify_zeroed(mut self, enabled: bool) -> Self {
        self.verify_zeroed = enabled;
        self
    }

    pub fn verify_disjoint(&self) -> bool {
        self.verify_disjoint
    }

    pub fn verify_zeroed(&self) -> bool {
        self.verify_zeroed
    }
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self { verify_disjoint: true, verify_zeroed: true }
    }
}
