/// Returns a value in `0..bound`, advancing `seed`.
///
/// The same starting seed always yields the same sequence, so randomized tests stay reproducible
/// without pulling a full RNG into `no_std` builds.
///
/// # Panics
/// Panics if `bound` is zero.
pub fn seeded_below(seed: &mut u64, bound: u64) -> u64 {
    assert!(bound > 0, "bound must be positive");
    *seed = (*seed).wrapping_add(0x9e37_79b9_7f4a_7c15);
    splitmix64(*seed) % bound
}

/// SplitMix64 hash function for mixing RNG state into high-quality random output.
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
