//! Comparison of unsigned registers, read off the carry of a two's complement subtraction.

use revcirc_core::{BitId, Register};

use crate::{
    CircuitBuilder, CompositionError,
    adder::{carry_slot, subtract_with_carry},
    aux_size,
    registers::reset_bits,
};

/// Computes `r ^= (a > b)`; `r` must be zero on entry.
///
/// Emits `b - a` into scratch: the subtraction carries out exactly when `b >= a`, so `r` receives
/// the negated carry. `aux` must hold [aux_size::compare] bits and is zero on return.
pub fn greater_than(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: BitId,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, a, b, r, aux)?;

    builder.with_scratch(aux, |builder, scratch| {
        let carry = subtract_into_scratch(builder, b, a, scratch)?;
        builder.cx(carry, r)?;
        builder.x(r)?;
        reset_bits(builder, scratch)
    })
}

/// Computes `r ^= (a >= b)`; `r` must be zero on entry.
///
/// Emits `a - b` into scratch and copies its carry into `r`. `aux` must hold
/// [aux_size::compare] bits and is zero on return.
pub fn greater_than_or_equal(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: BitId,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, a, b, r, aux)?;

    builder.with_scratch(aux, |builder, scratch| {
        let carry = subtract_into_scratch(builder, a, b, scratch)?;
        builder.cx(carry, r)?;
        reset_bits(builder, scratch)
    })
}

// HELPERS
// ================================================================================================

/// Subtracts `b` from `a` into the low `n` bits of `aux`, using the rest as adder ancilla, and
/// returns the bit holding the carry.
fn subtract_into_scratch(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    aux: &Register,
) -> Result<BitId, CompositionError> {
    let n = a.len();
    let (difference, adder_aux) = aux.split_at(n);
    log::trace!(target: "synth", "comparing {n}-bit registers {a} and {b}");

    subtract_with_carry(builder, a, b, &difference, &adder_aux)?;
    Ok(carry_slot(&adder_aux, n))
}

fn check_operands(
    builder: &CircuitBuilder,
    a: &Register,
    b: &Register,
    r: BitId,
    aux: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_widths(a.len(), &[("b", b)])?;
    builder.ensure_width("aux", aux, aux_size::compare(a.len()))?;
    builder.ensure_disjoint(&[&a[..], &b[..], &[r][..], &aux[..]])?;
    builder.ensure_zeroed(&[r])
}

// TESTS
// ================================================================================================
