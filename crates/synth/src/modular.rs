//! Modular arithmetic over an `n`-bit modulus register.
//!
//! Every circuit here reduces at most once: an intermediate sum is compared against `N` and `N` is
//! subtracted when the sum is not smaller. Sums are computed modulo `2^n` by the ripple adder, so
//! the results are exact when `N <= 2^(n - 1)` and every operand is already below `N`. Outside of
//! that range the reduction decision is taken on a wrapped sum.

use revcirc_core::{BitId, Register};

use crate::{
    CircuitBuilder, CompositionError,
    adder::{add, controlled_subtract},
    aux_size,
    compare::greater_than_or_equal,
    registers::{controlled_copy, copy, copy_unless, reset_bits, set_value, xor_into},
};

// MODULAR ADDITION
// ================================================================================================

/// Computes `r = (a + b) mod N`.
///
/// `r` must be zero on entry. `aux` must hold [aux_size::add_mod] bits and is zero on return.
pub fn add_mod(
    builder: &mut CircuitBuilder,
    modulus: &Register,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let n = a.len();
    builder.ensure_widths(n, &[("N", modulus), ("b", b), ("r", r)])?;
    builder.ensure_width("aux", aux, aux_size::add_mod(n))?;
    builder.ensure_disjoint(&[&modulus[..], &a[..], &b[..], &r[..], &aux[..]])?;
    builder.ensure_zeroed(r)?;

    log::debug!(target: "synth", "add_mod: {n} bits, N = {modulus}");
    builder.with_scratch(aux, |builder, scratch| {
        let sum = scratch.carve(..n);
        let reduce = scratch[n];
        let adder_aux = scratch.carve(n + 1..n + 1 + aux_size::ADD);
        let compare_aux = scratch.carve(n + 1..);

        add(builder, a, b, &sum, &adder_aux)?;
        greater_than_or_equal(builder, &sum, modulus, reduce, &compare_aux)?;
        controlled_subtract(builder, reduce, &sum, modulus, r, &adder_aux)?;

        reset_bits(builder, scratch)
    })
}

/// Computes `r = (a + b) mod N` when `control` is 1, and `r = a` otherwise.
///
/// `aux` must hold [aux_size::controlled_add_mod] bits.
pub fn controlled_add_mod(
    builder: &mut CircuitBuilder,
    control: BitId,
    modulus: &Register,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control][..], &modulus[..], &a[..], &b[..], &r[..], &aux[..]])?;

    builder.controlled(control, |builder| add_mod(builder, modulus, a, b, r, aux))?;
    copy_unless(builder, control, a, r)
}

// MODULAR DOUBLING
// ================================================================================================

/// Computes `r = 2a mod N` by adding `a` to a copy of itself.
///
/// `r` must be zero on entry. `aux` must hold [aux_size::times_two_mod] bits and is zero on
/// return.
pub fn times_two_mod(
    builder: &mut CircuitBuilder,
    modulus: &Register,
    a: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let n = a.len();
    builder.ensure_widths(n, &[("N", modulus), ("r", r)])?;
    builder.ensure_width("aux", aux, aux_size::times_two_mod(n))?;
    builder.ensure_disjoint(&[&modulus[..], &a[..], &r[..], &aux[..]])?;
    builder.ensure_zeroed(r)?;

    builder.with_scratch(aux, |builder, scratch| {
        let twin = scratch.carve(..n);
        let add_mod_aux = scratch.carve(n..);

        copy(builder, a, &twin)?;
        add_mod(builder, modulus, a, &twin, r, &add_mod_aux)?;

        reset_bits(builder, scratch)
    })
}

/// Computes `r = a * 2^k mod N` by doubling `k` times.
///
/// For `k = 0` the circuit still reduces `a` once, so `r = a mod N` for any `a < 2N`.
///
/// `r` must be zero on entry. `aux` must hold [aux_size::times_two_power_mod] bits and is zero on
/// return.
pub fn times_two_power_mod(
    builder: &mut CircuitBuilder,
    modulus: &Register,
    a: &Register,
    k: usize,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let n = a.len();
    builder.ensure_widths(n, &[("N", modulus), ("r", r)])?;
    builder.ensure_width("aux", aux, aux_size::times_two_power_mod(n))?;
    builder.ensure_disjoint(&[&modulus[..], &a[..], &r[..], &aux[..]])?;
    builder.ensure_zeroed(r)?;

    log::debug!(target: "synth", "times_two_power_mod: {n} bits, k = {k}");
    builder.with_scratch(aux, |builder, scratch| {
        if k == 0 {
            let reduce = scratch[0];
            let compare_aux = scratch.carve(1..1 + aux_size::compare(n));
            let subtract_aux = scratch.carve(1..1 + aux_size::SUBTRACT);

            greater_than_or_equal(builder, a, modulus, reduce, &compare_aux)?;
            controlled_subtract(builder, reduce, a, modulus, r, &subtract_aux)?;
        } else {
            let current = scratch.carve(..n);
            let doubling_aux = scratch.carve(n..);

            copy(builder, a, &current)?;
            for i in 0..k {
                times_two_mod(builder, modulus, &current, r, &doubling_aux)?;
                if i + 1 < k {
                    reset_bits(builder, &current)?;
                    copy(builder, r, &current)?;
                    reset_bits(builder, r)?;
                }
            }
        }

        reset_bits(builder, scratch)
    })
}

// MODULAR MULTIPLICATION
// ================================================================================================

/// Computes `r = (a * b) mod N` by shift-and-add over the bits of `b`, least significant first.
///
/// For every bit `b[k]` the circuit scales `a` by `2^k mod N` and adds the result into a running
/// sum, gated on `b[k]`. `r` must be zero on entry. `aux` must hold [aux_size::multiply_mod] bits
/// and is zero on return.
pub fn multiply_mod(
    builder: &mut CircuitBuilder,
    modulus: &Register,
    a: &Register,
    b: &Register,
    r: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let n = a.len();
    builder.ensure_widths(n, &[("N", modulus), ("b", b), ("r", r)])?;
    builder.ensure_width("aux", aux, aux_size::multiply_mod(n))?;
    builder.ensure_disjoint(&[&modulus[..], &a[..], &b[..], &r[..], &aux[..]])?;
    builder.ensure_zeroed(r)?;

    log::debug!(target: "synth", "multiply_mod: {n} bits, N = {modulus}");
    builder.with_scratch(aux, |builder, scratch| {
        let scaled = scratch.carve(..n);
        let acc = scratch.carve(n..2 * n);
        let inner = scratch.carve(2 * n..);
        let add_mod_aux = inner.slice(..aux_size::controlled_add_mod(n));

        for (k, &bit) in b.iter().enumerate() {
            reset_bits(builder, &scaled)?;
            reset_bits(builder, r)?;

            times_two_power_mod(builder, modulus, a, k, &scaled, &inner)?;
            controlled_add_mod(builder, bit, modulus, &acc, &scaled, r, &add_mod_aux)?;

            // r holds the new sum when b[k] is set and acc otherwise; fold it back into acc
            xor_into(builder, &acc, r)?;
            controlled_copy(builder, bit, r, &acc)?;
        }

        reset_bits(builder, r)?;
        copy(builder, &acc, r)?;
        reset_bits(builder, scratch)
    })
}

// MODULAR EXPONENTIATION
// ================================================================================================

/// Replaces `b` with `(b * base^exponent) mod N`, for a classical `base` and `exponent`.
///
/// `base` is loaded into scratch and `b` is multiplied by it `exponent` times, each product being
/// swapped into `b` and the previous value of `b` discarded by a reset. The circuit therefore
/// grows linearly with `exponent`. `b` must be below `N` for the result to be reduced; with a zero
/// exponent `b` is left as is. `aux` must hold [aux_size::multiply_mod_power] bits and is zero on
/// return.
///
/// # Errors
/// Returns [CompositionError::ValueTooWide] if `base` does not fit in `n` bits.
pub fn multiply_mod_power(
    builder: &mut CircuitBuilder,
    modulus: &Register,
    base: u64,
    exponent: u64,
    b: &Register,
    aux: &Register,
) -> Result<(), CompositionError> {
    let n = b.len();
    builder.ensure_width("N", modulus, n)?;
    builder.ensure_width("aux", aux, aux_size::multiply_mod_power(n))?;
    builder.ensure_disjoint(&[&modulus[..], &b[..], &aux[..]])?;
    if n < u64::BITS as usize && base >> n != 0 {
        return Err(CompositionError::ValueTooWide { value: base, width: n });
    }

    log::debug!(target: "synth", "multiply_mod_power: {n} bits, N = {modulus}, {base}^{exponent}");
    builder.with_scratch(aux, |builder, scratch| {
        let factor = scratch.carve(..n);
        let product = scratch.carve(n..2 * n);
        let multiply_aux = scratch.carve(2 * n..);

        set_value(builder, &factor, base)?;
        for _ in 0..exponent {
            multiply_mod(builder, modulus, b, &factor, &product, &multiply_aux)?;
            swap(builder, b, &product)?;
            reset_bits(builder, &product)?;
        }

        reset_bits(builder, scratch)
    })
}

fn swap(builder: &mut CircuitBuilder, a: &Register, b: &Register) -> Result<(), CompositionError> {
    for (&x, &y) in a.iter().zip(b.iter()) {
        builder.cx(x, y)?;
        builder.cx(y, x)?;
        builder.cx(x, y)?;
    }
    Ok(())
}

// TESTS
// ================================================================================================
