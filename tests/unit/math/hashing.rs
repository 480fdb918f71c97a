//! Tests for order-sensitive hash combining

#[cfg(test)]
mod tests {
    use gridcore::math::hashing::{combine, mix64, mix_value};

    // Tests combining is not commutative
    // Verified by replacing combine with a plain xor
    #[test]
    fn test_combine_is_order_sensitive() {
        let forward = combine(combine(0, mix64(1)), mix64(2));
        let backward = combine(combine(0, mix64(2)), mix64(1));
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_combine_depends_on_seed() {
        assert_ne!(combine(0, 42), combine(1, 42));
    }

    #[test]
    fn test_mix64_is_deterministic() {
        assert_eq!(mix64(12345), mix64(12345));
        assert_ne!(mix64(0), mix64(1));
    }

    // Tests equal values hash alike regardless of integer type
    // Verified by hashing the raw bytes of each value
    #[test]
    fn test_mix_value_ignores_integer_type() {
        assert_eq!(mix_value(5u8), mix_value(5i64));
        assert_eq!(mix_value(-3i8), mix_value(-3i128));
        assert_ne!(mix_value(-1i32), mix_value(0i32));
        assert_ne!(mix_value(-1i64), mix_value(u64::MAX));
    }
}
