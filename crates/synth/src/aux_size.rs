//! Number of ancilla bits each circuit expects for `n`-bit operands.
//!
//! A composite circuit carves its own ancilla into the leases of the circuits it calls, so these
//! sizes are part of every circuit's signature: passing a register of any other width fails with
//! [LengthMismatch](crate::CompositionError::LengthMismatch).

/// Scratch bits of [full_adder](crate::adder::full_adder).
pub const FULL_ADDER: usize = 3;

/// Two rotating carry slots followed by the lease of one full adder.
pub const ADD: usize = 2 + FULL_ADDER;

pub const SUBTRACT: usize = ADD;

/// A scratch difference register followed by a subtractor's ancilla.
pub const fn compare(n: usize) -> usize {
    n + SUBTRACT
}

/// A sum register and a comparison bit, followed by a comparator's ancilla (which the adder and
/// subtractor reuse).
pub const fn add_mod(n: usize) -> usize {
    n + 1 + compare(n)
}

pub const fn controlled_add_mod(n: usize) -> usize {
    add_mod(n)
}

/// A copy of the operand followed by a modular adder's ancilla.
pub const fn times_two_mod(n: usize) -> usize {
    n + add_mod(n)
}

/// The value being doubled followed by a doubler's ancilla.
pub const fn times_two_power_mod(n: usize) -> usize {
    n + times_two_mod(n)
}

/// The scaled operand and the running sum, followed by the ancilla of a power-of-two scaling.
pub const fn multiply_mod(n: usize) -> usize {
    2 * n + times_two_power_mod(n)
}

/// A factor register and a product register, followed by a modular multiplier's ancilla.
pub const fn multiply_mod_power(n: usize) -> usize {
    2 * n + multiply_mod(n)
}
