//! Two-input boolean gates built from the elementary reversible gates.
//!
//! Every gate XOR-accumulates its result into `out`: `out` ends up holding `out ^ f(a, b)`. The
//! controlled forms gate every emitted gate on one extra control bit, so they leave `out`
//! untouched when the control is 0.

use revcirc_core::BitId;

use crate::{CircuitBuilder, CompositionError};

// GATES
// ================================================================================================

/// out ^= a & b
pub fn and(
    builder: &mut CircuitBuilder,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[a, b, out][..]])?;
    builder.ccx(a, b, out)
}

/// out ^= a | b
///
/// `out` must be zero on entry: the gate is the composition `a ^ b ^ (a & b)`, which equals
/// `a | b` only when accumulated into a zero bit.
pub fn or(
    builder: &mut CircuitBuilder,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[a, b, out][..]])?;
    builder.ensure_zeroed(&[out])?;
    builder.cx(a, out)?;
    builder.cx(b, out)?;
    builder.ccx(a, b, out)
}

/// out ^= a ^ b
pub fn xor(
    builder: &mut CircuitBuilder,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[a, b, out][..]])?;
    builder.cx(a, out)?;
    builder.cx(b, out)
}

// CONTROLLED GATES
// ================================================================================================

pub fn controlled_and(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control, a, b, out][..]])?;
    builder.controlled(control, |builder| and(builder, a, b, out))
}

pub fn controlled_or(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control, a, b, out][..]])?;
    builder.controlled(control, |builder| or(builder, a, b, out))
}

pub fn controlled_xor(
    builder: &mut CircuitBuilder,
    control: BitId,
    a: BitId,
    b: BitId,
    out: BitId,
) -> Result<(), CompositionError> {
    builder.ensure_disjoint(&[&[control, a, b, out][..]])?;
    builder.controlled(control, |builder| xor(builder, a, b, out))
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use revcirc_core::{GateKind, assert_matches};
    use rstest::rstest;

    use super::*;
    use crate::tests::run;

    type BoolGate = fn(&mut CircuitBuilder, BitId, BitId, BitId) -> Result<(), CompositionError>;
    type ControlledGate =
        fn(&mut CircuitBuilder, BitId, BitId, BitId, BitId) -> Result<(), CompositionError>;

    #[rstest]
    #[case::and(and as BoolGate, [0, 0, 0, 1])]
    #[case::or(or as BoolGate, [0, 1, 1, 1])]
    #[case::xor(xor as BoolGate, [0, 1, 1, 0])]
    fn truth_tables(#[case] gate: BoolGate, #[case] expected: [u64; 4]) {
        for (input, &expected) in expected.iter().enumerate() {
            let mut builder = CircuitBuilder::new();
            let bits = builder.alloc(3);
            gate(&mut builder, bits[0], bits[1], bits[2]).unwrap();

            let inputs = bits.slice(..2);
            let state = run(builder, &[(&inputs, input as u64)]);
            assert_eq!(state.read(&bits.slice(2..)).unwrap(), expected, "input {input:02b}");
            assert_eq!(state.read(&inputs).unwrap(), input as u64);
        }
    }

    #[rstest]
    #[case::and(controlled_and as ControlledGate, [0, 0, 0, 1])]
    #[case::or(controlled_or as ControlledGate, [0, 1, 1, 1])]
    #[case::xor(controlled_xor as ControlledGate, [0, 1, 1, 0])]
    fn controlled_truth_tables(#[case] gate: ControlledGate, #[case] expected: [u64; 4]) {
        for control in [0, 1] {
            for (input, &expected) in expected.iter().enumerate() {
                let mut builder = CircuitBuilder::new();
                let bits = builder.alloc(4);
                gate(&mut builder, bits[0], bits[1], bits[2], bits[3]).unwrap();

                let (control_bit, inputs) = (bits.slice(..1), bits.slice(1..3));
                let state = run(builder, &[(&control_bit, control), (&inputs, input as u64)]);
                assert_eq!(state.read(&bits.slice(3..)).unwrap(), expected * control);
            }
        }
    }

    #[test]
    fn controlled_gates_add_one_control() {
        let mut builder = CircuitBuilder::new();
        let bits = builder.alloc(4);
        controlled_or(&mut builder, bits[0], bits[1], bits[2], bits[3]).unwrap();

        let kinds: Vec<_> = builder.gates().iter().map(|gate| gate.kind()).collect();
        assert_eq!(kinds, [GateKind::Toffoli, GateKind::Toffoli, GateKind::Mcx]);
    }

    #[test]
    fn or_requires_zero_output() {
        let mut builder = CircuitBuilder::new();
        let bits = builder.alloc(3);
        builder.x(bits[2]).unwrap();

        assert_matches!(
            or(&mut builder, bits[0], bits[1], bits[2]),
            Err(CompositionError::NotZeroed { .. })
        );
        assert_matches!(
            and(&mut builder, bits[0], bits[0], bits[2]),
            Err(CompositionError::Overlap { .. })
        );
    }
}
