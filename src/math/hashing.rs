//! Order-sensitive hash combining for coordinate components

use crate::common::configuration::{
    HASH_COMBINE_CONSTANT, HASH_COMBINE_LEFT_SHIFT, HASH_COMBINE_RIGHT_SHIFT, MIX_MULTIPLIER_A,
    MIX_MULTIPLIER_B,
};
use crate::math::integral::Integral;

/// Fold `value` into `seed` (boost `hash_combine`, widened to 64 bits)
///
/// Not commutative: `combine(combine(0, a), b)` differs from
/// `combine(combine(0, b), a)` for almost all `a != b`.
pub const fn combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(HASH_COMBINE_CONSTANT)
        .wrapping_add(seed << HASH_COMBINE_LEFT_SHIFT)
        .wrapping_add(seed >> HASH_COMBINE_RIGHT_SHIFT)
}

/// splitmix64 finalizer
pub const fn mix64(value: u64) -> u64 {
    let mut z = value.wrapping_add(HASH_COMBINE_CONSTANT);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MULTIPLIER_A);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MULTIPLIER_B);
    z ^ (z >> 31)
}

/// Hash an integer by value, independent of its concrete type
///
/// Equal values of different integer types hash identically.
pub fn mix_value<I: Integral>(value: I) -> u64 {
    let bits = value
        .to_i128()
        .map(|wide| wide as u128)
        .or_else(|| value.to_u128())
        .unwrap_or_default();
    let high = (bits >> 64) as u64;
    let low = bits as u64;
    mix64(low ^ mix64(high))
}
