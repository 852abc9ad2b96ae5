use revcirc::{CircuitBuilder, Register, aux_size, modular};
use revcirc_test_utils::{Test, alloc_registers, rand::seeded_below};

/// Synthesizes `b = b * base^exponent mod N` over `n`-bit registers.
fn modexp(n: usize, base: u64, exponent: u64) -> (Test, Register, Register, Register) {
    let mut builder = CircuitBuilder::new();
    let [modulus, b, aux] = alloc_registers(&mut builder, [n, n, aux_size::multiply_mod_power(n)]);
    modular::multiply_mod_power(&mut builder, &modulus, base, exponent, &b, &aux).unwrap();
    (Test::new(builder), modulus, b, aux)
}

#[test]
fn powers_of_three_mod_five() {
    for (exponent, expected) in [(0, 1), (1, 3), (2, 4), (3, 2), (4, 1)] {
        let (test, modulus, b, aux) = modexp(4, 3, exponent);

        test.run(&[(&modulus, 5), (&b, 1)])
            .expect_value(&modulus, 5)
            .expect_value(&b, expected)
            .expect_zero(&aux);
    }
}

#[test]
fn scales_the_input_register() {
    // 2 * 2^0 mod 3
    let (test, modulus, b, aux) = modexp(2, 0b10, 0);
    test.run(&[(&modulus, 0b11), (&b, 0b10)]).expect_value(&b, 0b10).expect_zero(&aux);

    let (test, modulus, b, aux) = modexp(4, 7, 2);
    test.run(&[(&modulus, 8), (&b, 5)]).expect_value(&b, 5 * 49 % 8).expect_zero(&aux);
}

#[test]
fn modexp_matches_reference() {
    let n = 5;
    let mut seed = 0x5eed;

    for _ in 0..4 {
        let base = seeded_below(&mut seed, 1 << n);
        let exponent = seeded_below(&mut seed, 4);
        let (test, modulus, b, aux) = modexp(n, base, exponent);

        for _ in 0..4 {
            let m = 1 + seeded_below(&mut seed, 16);
            let value = seeded_below(&mut seed, m);
            let mut expected = value;
            for _ in 0..exponent {
                expected = expected * base % m;
            }

            test.run(&[(&modulus, m), (&b, value)])
                .expect_value(&modulus, m)
                .expect_value(&b, expected)
                .expect_zero(&aux);
        }
    }
}
