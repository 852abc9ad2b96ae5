//! Ripple-carry addition and two's complement subtraction.
//!
//! The adders keep the carry in two rotating slots, `aux[0]` and `aux[1]`: digit `i` reads its
//! carry-in from `aux[i % 2]` and writes its carry-out to `aux[(i + 1) % 2]`. The remaining three
//! bits of the ancilla are lent to every full adder in turn. A carry out of the last digit is
//! dropped, so all results are taken modulo `2^n`.

use revcirc_core::{BitId, Register};

use crate::{
    CircuitBuilder, CompositionError, aux_size,
    gates::{and, or, xor},
    registers::{copy_unless, reset_bits},
};

// FULL ADDER
// ================================================================================================

/// Computes the sum bit of `a + b + c_in` into `r` and the carry into `c_out`.
///
/// `r` must be zero on entry; `c_out` is reset by the circuit itself. `aux` must hold
/// [aux_size::FULL_ADDER] bits.
pub fn full_adder(
    builder: &mut CircuitBuilder,
    a: BitId,
    b: BitId,
    r: BitId,
    c_in: BitId,
    c_out: BitId,
    aux: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_width("aux", aux, aux_size::FULL_ADDER)?;
    builder.ensure_disjoint(&[&[a, b, r, c_in, c_out][..], &aux[..]])?;
    builder.ensure_zeroed(&[r])?;

    builder.with_scratch(aux, |builder, scratch| {
        let (t0, t1, t2) = (scratch[0], scratch[1], scratch[2]);
        builder.reset(c_out)?;

        xor(builder, a, b, t0)?;
        xor(builder, t0, c_in, r)?;
        and(builder, a, b, t1)?;
        and(builder, t0, c_in, t2)?;
        or(builder, t1, t2, c_out)?;

        reset_bits(builder, scratch)
    })
}

/// Same as [full_adder], with every unitary gate controlled by `control`.
pub fn controlled_full_adder(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: BitId,
    b: BitId,
    r: BitId,
    c_in: BitId,
    c_out: BitId,
    aux: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control][..], &[a, b, r, c_in, c_out][..], &aux[..]])?;
    builder.controlled(control, |builder| full_adder(builder, a, b, r, c_in, c_out, aux))
}

// ADDITION
// ================================================================================================

/// Computes `r = (a + b) mod 2^n`.
///
/// `r` must be zero on entry. `aux` must hold [aux_size::ADD] bits and is zero on return.
pub fn add(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, None, a, b, r, aux)?;

    builder.with_scratch(aux, |builder, scratch| {
        ripple(builder, a, b, r, scratch)?;
        reset_bits(builder, scratch)
    })
}

/// Computes `r = (a + b) mod 2^n` when `control` is 1, and `r = a` otherwise.
pub fn controlled_add(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, Some(control), a, b, r, aux)?;

    builder.controlled(control, |builder| add(builder, a, b, r, aux))?;
    copy_unless(builder, control, a, r)
}

// SUBTRACTION
// ================================================================================================

/// Computes `r = (a - b) mod 2^n`.
///
/// `b` is complemented in place for the duration of the circuit and restored before it returns.
/// `r` must be zero on entry. `aux` must hold [aux_size::SUBTRACT] bits and is zero on return.
pub fn subtract(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, None, a, b, r, aux)?;

    builder.with_scratch(aux, |builder, scratch| {
        subtract_with_carry(builder, a, b, r, scratch)?;
        reset_bits(builder, scratch)
    })
}

/// Computes `r = (a - b) mod 2^n` when `control` is 1, and `r = a` otherwise.
pub fn controlled_subtract(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    check_operands(builder, Some(control), a, b, r, aux)?;

    builder.controlled(control, |builder| subtract(builder, a, b, r, aux))?;
    copy_unless(builder, control, a, r)
}

/// Emits `a + !b + 1` into `r`, leaving the final carry in `aux[n % 2]`.
///
/// The carry is 1 exactly when `a >= b`. `aux` must be a zeroed lease of [aux_size::SUBTRACT] bits;
/// unlike [subtract], the carry slots are left for the caller to read and clear.
pub(crate) fn subtract_with_carry(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    for &bit in b.iter() {
        builder.x(bit)?;
    }
    builder.x(aux[0])?;

    ripple(builder, a, b, r, aux)?;

    for &bit in b.iter() {
        builder.x(bit)?;
    }
    Ok(())
}

/// Returns the slot of a 5-bit adder ancilla holding the carry out of an `n`-digit ripple.
pub(crate) fn carry_slot(aux: &Register, n: usize) -> BitId {
    aux[n % 2]
}

// HELPERS
// ================================================================================================

fn ripple(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let inner = aux.slice(2..aux_size::ADD);
    for i in 0..a.len() {
        full_adder(builder, a[i], b[i], r[i], aux[i % 2], aux[(i + 1) % 2], &inner)?;
    }
    Ok(())
}

fn check_operands(
    builder: &CircuitBuilder,
    control: Option<BitId>,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_widths(a.len(), &[("b", b), ("r", r)])?;
    builder.ensure_width("aux", aux, aux_size::ADD)?;
    builder.ensure_disjoint(&[control.as_slice(), &a[..], &b[..], &r[..], &aux[..]])?;
    builder.ensure_zeroed(r)
}

// TESTS
// ================================================================================================
