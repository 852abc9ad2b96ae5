use revcirc::{Circuit, CircuitBuilder, Gate, GateKind, aux_size, compare};
use revcirc_test_utils::alloc_registers;

#[test]
fn circuits_roundtrip_through_json() {
    let mut builder = CircuitBuilder::new();
    let [a, b, aux] = alloc_registers(&mut builder, [3, 3, aux_size::compare(3)]);
    let r = builder.alloc_bit();
    compare::greater_than(&mut builder, &a, &b, r, &aux).unwrap();
    let circuit = builder.into_circuit().unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let decoded: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, circuit);
    assert_eq!(decoded.stats(), circuit.stats());
}

#[test]
fn invalid_circuits_are_rejected() {
    let self_controlled = r#"{"num_bits":1,"gates":[{"Cnot":{"control":0,"target":0}},{"Not":5}]}"#;
    let err = serde_json::from_str::<Circuit>(self_controlled).unwrap_err();
    assert!(err.to_string().contains("gate 0 uses q0 both as a control and as its target"));

    let out_of_range = r#"{"num_bits":1,"gates":[{"Not":0},{"Not":5}]}"#;
    let err = serde_json::from_str::<Circuit>(out_of_range).unwrap_err();
    assert!(err.to_string().contains("gate 1 references q5"));
}

#[test]
fn narrow_mcx_gates_are_normalized() {
    let json = r#"{"num_bits":3,"gates":[{"Mcx":{"controls":[0],"target":1}},{"Mcx":{"controls":[0,1],"target":2}}]}"#;
    let circuit: Circuit = serde_json::from_str(json).unwrap();

    let kinds: Vec<_> = circuit.gates().iter().map(Gate::kind).collect();
    assert_eq!(kinds, [GateKind::Cnot, GateKind::Toffoli]);
    assert_eq!(circuit.to_string(), "cx q0, q1\nccx q0, q1, q2\n");
}
