use revcirc::{
    CircuitBuilder, ExecutionError, ExecutionOptions, GateKind, Processor, adder, aux_size,
    registers,
};
use revcirc_core::assert_matches;
use revcirc_test_utils::alloc_registers;

#[test]
fn run_loads_inputs_and_executes() {
    let mut builder = CircuitBuilder::new();
    let [a, b, r, aux] = alloc_registers(&mut builder, [3, 3, 3, aux_size::ADD]);
    adder::add(&mut builder, &a, &b, &r, &aux).unwrap();
    let circuit = builder.into_circuit().unwrap();

    let state = revcirc::run(&circuit, &[(&a, 6), (&b, 3)]).unwrap();
    assert_eq!(state.read(&r).unwrap(), 1);

    assert_matches!(
        revcirc::run(&circuit, &[(&a, 8)]),
        Err(ExecutionError::ValueTooWide { value: 8, width: 3 })
    );
}

#[test]
fn processor_enforces_gate_limit() {
    let mut builder = CircuitBuilder::new();
    let [a, b, r, aux] = alloc_registers(&mut builder, [4, 4, 4, aux_size::SUBTRACT]);
    adder::subtract(&mut builder, &a, &b, &r, &aux).unwrap();
    let circuit = builder.into_circuit().unwrap();

    let processor = Processor::new(ExecutionOptions::default().with_max_gates(circuit.len() - 1));
    let mut state = revcirc::BasisState::new(circuit.num_bits());
    assert_matches!(
        processor.execute(&circuit, &mut state),
        Err(ExecutionError::GateLimitExceeded(_))
    );
}

#[test]
fn boundary_loaders_only_emit_not_gates() {
    let mut builder = CircuitBuilder::new();
    let [a] = alloc_registers(&mut builder, [8]);
    registers::set_value(&mut builder, &a, 0xa5).unwrap();
    let circuit = builder.into_circuit().unwrap();

    let stats = circuit.stats();
    assert_eq!(stats.not, 4);
    assert_eq!(stats.total(), 4);
    assert!(circuit.gates().iter().all(|gate| gate.kind() == GateKind::Not));
    assert_eq!(revcirc::run(&circuit, &[]).unwrap().read(&a).unwrap(), 0xa5);
}
