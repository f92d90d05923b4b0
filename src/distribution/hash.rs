//! Deterministic pseudo-random values keyed on an index.
//!
//! Every value is a pure function of its seed: the same seed always yields
//! the same point, and no platform RNG is involved.

/// Map a seed onto [0.0, 1.0) with a SplitMix64 finalizer
pub fn unit_hash(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    (z >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Value in `[min, max)` for the given seed
pub fn hash_in_range(seed: u64, min: f64, max: f64) -> f64 {
    min + unit_hash(seed) * (max - min)
}
