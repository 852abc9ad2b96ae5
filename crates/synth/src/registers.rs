//! Loading, clearing and transferring the contents of registers.

use alloc::string::ToString;

use revcirc_core::{BitId, Register};

use crate::{CircuitBuilder, CompositionError};

// CLEARING AND LOADING
// ================================================================================================

/// Drives every listed bit to 0.
pub fn reset_bits(builder: &mut CircuitBuilder, bits: &[BitId]) -> Result<(), CompositionError> {
    for &bit in bits {
        builder.reset(bit)?;
    }
    Ok(())
}

/// Flips the bits of `register` selected by a binary string, written most-significant bit first.
///
/// The last character of `bits` corresponds to `register[0]`. This is a boundary loader for
/// classical inputs: it flips bits rather than assigning them, so `register` is expected to be
/// zero. The string is validated in full before any gate is emitted.
pub fn set_bits(
    builder: &mut CircuitBuilder,
    register: &Register,
    bits: &str,
) -> Result<(), CompositionError> {
    if bits.chars().any(|c| c != '0' && c != '1') {
        return Err(CompositionError::InvalidBitString { value: bits.to_string() });
    }
    builder.ensure_width("bits", register, bits.len())?;

    for (&bit, digit) in register.iter().zip(bits.bytes().rev()) {
        if digit == b'1' {
            builder.x(bit)?;
        }
    }
    Ok(())
}

/// Flips the bits of `register` that are set in the binary representation of `value`.
///
/// Same as [set_bits], with the input given as an integer.
pub fn set_value(
    builder: &mut CircuitBuilder,
    register: &Register,
    value: u64,
) -> Result<(), CompositionError> {
    let width = register.len();
    if width < u64::BITS as usize && value >> width != 0 {
        return Err(CompositionError::ValueTooWide { value, width });
    }

    for (i, &bit) in register.iter().enumerate().take(u64::BITS as usize) {
        if (value >> i) & 1 == 1 {
            builder.x(bit)?;
        }
    }
    Ok(())
}

// TRANSFER
// ================================================================================================

/// Duplicates `a` into `b`, which is expected to be zero.
///
/// This emits one CNOT per bit, so it entangles `b` with `a` rather than overwriting it. The
/// target is not checked to be zero: the copy-back at the end of every controlled arithmetic
/// circuit relies on accumulating into an already written register.
pub fn copy(builder: &mut CircuitBuilder, a: &Register, b: &Register) -> Result<(), CompositionError> {
    builder.ensure_widths(a.len(), &[("b", b)])?;
    builder.ensure_disjoint(&[&a[..], &b[..]])?;

    for (&source, &target) in a.iter().zip(b.iter()) {
        builder.cx(source, target)?;
    }
    Ok(())
}

/// Duplicates `a` into `b` when `control` is 1.
pub fn controlled_copy(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: &Register,
    b: &Register,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control][..], &a[..], &b[..]])?;
    builder.controlled(control, |builder| copy(builder, a, b))
}

/// Computes `b ^= a` bit by bit.
///
/// Emits the same gates as [copy], for use where `b` is known to hold a value.
pub fn xor_into(
    builder: &mut CircuitBuilder,
    a: &Register,
    b: &Register,
) -> Result<(), CompositionError> {
    copy(builder, a, b)
}

/// Copies `a` into `r` when `control` is 0, restoring `control` afterwards.
///
/// Appended to every controlled arithmetic circuit: when the control is 0 nothing else fired,
/// so `r` (zero on entry) ends up holding `a`.
pub(crate) fn copy_unless(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: &Register,
    r: &Register,
) -> Result<(), CompositionError> {
    builder.x(control)?;
    controlled_copy(builder, control, a, r)?;
    builder.x(control)
}

// TESTS
// ================================================================================================
