use revcirc_core::assert_matches;
use revcirc_synth::{
    BitId, CircuitBuilder, CompositionError, Gate, GateKind, Register, SynthesisOptions, adder,
    aux_size, modular, registers,
};
use revcirc_test_utils::{Test, alloc_registers, assert_eq};
use rstest::rstest;

// CONTROLLED VARIANTS
// ================================================================================================

type Emit = fn(&mut CircuitBuilder, &[Register]) -> Result<(), CompositionError>;

fn emit_full_adder(builder: &mut CircuitBuilder, regs: &[Register]) -> Result<(), CompositionError> {
    let bits = &regs[0];
    adder::full_adder(builder, bits[0], bits[1], bits[2], bits[3], bits[4], &regs[1])
}

fn emit_add(builder: &mut CircuitBuilder, regs: &[Register]) -> Result<(), CompositionError> {
    adder::add(builder, &regs[0], &regs[1], &regs[2], &regs[3])
}

fn emit_subtract(builder: &mut CircuitBuilder, regs: &[Register]) -> Result<(), CompositionError> {
    adder::subtract(builder, &regs[0], &regs[1], &regs[2], &regs[3])
}

fn emit_add_mod(builder: &mut CircuitBuilder, regs: &[Register]) -> Result<(), CompositionError> {
    modular::add_mod(builder, &regs[0], &regs[1], &regs[2], &regs[3], &regs[4])
}

/// Synthesizes `emit` twice over the same bits, once plain and once under a control bit, and
/// returns both gate lists along with the control bit.
fn synthesize_twice(emit: Emit, widths: &[usize]) -> (Vec<Gate>, Vec<Gate>, BitId) {
    let layout = |builder: &mut CircuitBuilder| {
        let control = builder.alloc_bit();
        let regs: Vec<_> = widths.iter().map(|&width| builder.alloc(width)).collect();
        (control, regs)
    };

    let mut plain = CircuitBuilder::new();
    let (_, regs) = layout(&mut plain);
    emit(&mut plain, &regs).unwrap();

    let mut controlled = CircuitBuilder::new();
    let (control, regs) = layout(&mut controlled);
    controlled.controlled(control, |builder| emit(builder, &regs)).unwrap();

    (plain.gates().to_vec(), controlled.gates().to_vec(), control)
}

#[rstest]
#[case::full_adder(emit_full_adder as Emit, vec![5, aux_size::FULL_ADDER])]
#[case::add(emit_add as Emit, vec![3, 3, 3, aux_size::ADD])]
#[case::subtract(emit_subtract as Emit, vec![3, 3, 3, aux_size::SUBTRACT])]
#[case::add_mod(emit_add_mod as Emit, vec![3, 3, 3, 3, aux_size::add_mod(3)])]
fn controlled_circuits_add_exactly_one_control(#[case] emit: Emit, #[case] widths: Vec<usize>) {
    let (plain, controlled, control) = synthesize_twice(emit, &widths);
    assert_eq!(plain.len(), controlled.len());

    for (plain, controlled) in plain.iter().zip(controlled.iter()) {
        if plain.kind() == GateKind::Reset {
            assert_eq!(plain, controlled);
            continue;
        }
        let mut controls = vec![control];
        controls.extend_from_slice(plain.controls());
        assert_eq!(controlled.controls(), &controls[..]);
        assert_eq!(controlled.target(), plain.target());
    }
}

#[test]
fn controlled_add_appends_copy_back() {
    let n = 4;
    let (plain, controlled, _) = synthesize_twice(emit_add, &[n, n, n, aux_size::ADD]);

    let mut builder = CircuitBuilder::new();
    let control = builder.alloc_bit();
    let [a, b, r, aux] = alloc_registers(&mut builder, [n, n, n, aux_size::ADD]);
    adder::controlled_add(&mut builder, control, &a, &b, &r, &aux).unwrap();

    assert_eq!(builder.len(), plain.len() + n + 2);
    assert_eq!(&builder.gates()[..controlled.len()], &controlled[..]);
    assert_eq!(builder.gates()[controlled.len()], Gate::Not(control));
    assert_eq!(builder.gates().last(), Some(&Gate::Not(control)));
}

#[rstest]
#[case::off(0)]
#[case::on(1)]
fn controlled_arithmetic_on_every_input(#[case] control_value: u64) {
    let n = 3;
    let mut builder = CircuitBuilder::new();
    let control = builder.alloc(1);
    let [modulus, a, b, sum, difference, sum_mod, aux] =
        alloc_registers(&mut builder, [n, n, n, n, n, n, aux_size::controlled_add_mod(n)]);
    let c = control[0];
    adder::controlled_add(&mut builder, c, &a, &b, &sum, &aux.slice(..aux_size::ADD)).unwrap();
    adder::controlled_subtract(&mut builder, c, &a, &b, &difference, &aux.slice(..aux_size::ADD))
        .unwrap();
    modular::controlled_add_mod(&mut builder, c, &modulus, &a, &b, &sum_mod, &aux).unwrap();
    let test = Test::new(builder);

    let m = 4;
    for x in 0..m {
        for y in 0..m {
            let execution = test.run(&[(&control, control_value), (&modulus, m), (&a, x), (&b, y)]);
            execution.expect_inputs_preserved().expect_zero(&aux);
            if control_value == 0 {
                execution
                    .expect_value(&sum, x)
                    .expect_value(&difference, x)
                    .expect_value(&sum_mod, x);
            } else {
                execution
                    .expect_value(&sum, (x + y) % 8)
                    .expect_value(&difference, x.wrapping_sub(y) % 8)
                    .expect_value(&sum_mod, (x + y) % m);
            }
        }
    }
}

// COMPOSITION ERRORS
// ================================================================================================

#[test]
fn output_register_must_be_zero() {
    let mut builder = CircuitBuilder::new();
    let [a, b, r, aux] = alloc_registers(&mut builder, [2, 2, 2, aux_size::ADD]);
    registers::set_value(&mut builder, &r, 1).unwrap();

    assert_matches!(
        adder::add(&mut builder, &a, &b, &r, &aux),
        Err(CompositionError::NotZeroed { bit }) if bit == r[0]
    );

    registers::reset_bits(&mut builder, &r).unwrap();
    assert_matches!(adder::add(&mut builder, &a, &b, &r, &aux), Ok(()));
}

#[test]
fn ancilla_must_not_overlap_operands() {
    let mut builder = CircuitBuilder::new();
    let [modulus, a, b, r] = alloc_registers(&mut builder, [3, 3, 3, 3]);
    let aux = builder.alloc(aux_size::add_mod(3) - 3);
    let overlapping: Register = r.iter().chain(aux.iter()).copied().collect();

    assert_matches!(
        modular::add_mod(&mut builder, &modulus, &a, &b, &r, &overlapping),
        Err(CompositionError::Overlap { bit }) if bit == r[0]
    );
}

#[test]
fn gates_must_reference_allocated_bits() {
    let mut builder = CircuitBuilder::new();
    let [a, b, r] = alloc_registers(&mut builder, [2, 2, 2]);
    let aux = Register::range(6, aux_size::ADD as u32);

    assert_matches!(
        adder::add(&mut builder, &a, &b, &r, &aux),
        Err(CompositionError::UnallocatedBit { num_bits: 6, .. })
    );
}

#[test]
fn checks_can_be_relaxed() {
    let options = SynthesisOptions::default().with_verify_zeroed(false).with_verify_disjoint(false);
    let mut builder = CircuitBuilder::with_options(options);
    let [a, b, r, aux] = alloc_registers(&mut builder, [2, 2, 2, aux_size::ADD]);
    registers::set_value(&mut builder, &r, 3).unwrap();

    assert!(adder::add(&mut builder, &a, &b, &r, &aux).is_ok());
    assert!(registers::copy(&mut builder, &a, &a.slice(..)).is_err());
}

#[test]
fn leaked_ancilla_fail_the_lease() {
    let mut builder = CircuitBuilder::new();
    let [a, aux] = alloc_registers(&mut builder, [2, 3]);

    let result = builder.with_scratch(&aux, |builder, scratch| {
        registers::copy(builder, &a, &scratch.carve(..2))
    });
    assert_matches!(result, Err(CompositionError::NotZeroed { bit }) if bit == aux[0]);
}

// GATE LISTINGS
// ================================================================================================

#[test]
fn full_adder_listing() {
    revcirc_synth::init_logging();

    let mut builder = CircuitBuilder::new();
    let [bits, aux] = alloc_registers(&mut builder, [5, aux_size::FULL_ADDER]);
    adder::full_adder(&mut builder, bits[0], bits[1], bits[2], bits[3], bits[4], &aux).unwrap();
    let circuit = builder.into_circuit().unwrap();

    insta::assert_snapshot!(circuit.to_string(), @r"
    reset q5
    reset q6
    reset q7
    reset q4
    cx q0, q5
    cx q1, q5
    cx q5, q2
    cx q3, q2
    ccx q0, q1, q6
    ccx q5, q3, q7
    cx q6, q4
    cx q7, q4
    ccx q6, q7, q4
    reset q5
    reset q6
    reset q7
    ");
}

#[test]
fn gate_counts_grow_with_width() {
    let counts: Vec<_> = [2, 3, 4]
        .into_iter()
        .map(|n| {
            let mut builder = CircuitBuilder::new();
            let [modulus, a, b, r, aux] =
                alloc_registers(&mut builder, [n, n, n, n, aux_size::multiply_mod(n)]);
            modular::multiply_mod(&mut builder, &modulus, &a, &b, &r, &aux).unwrap();
            builder.into_circuit().unwrap().stats()
        })
        .collect();

    for pair in counts.windows(2) {
        assert!(pair[0].unitary() < pair[1].unitary());
        assert!(pair[0].total() < pair[1].total());
    }
    assert!(counts.iter().all(|stats| stats.mcx > 0));
}
