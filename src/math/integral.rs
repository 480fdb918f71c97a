//! Generic integer support for coordinate arithmetic
//!
//! Mixed-type operations promote both operands to `i128`, compute with
//! checked arithmetic, then narrow back to the target type. Operands beyond
//! `i128` (large `u128` values) fall back to sign and magnitude arithmetic in
//! the target type. Any step that cannot be represented yields `None`.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::PrimInt;

/// Primitive integer usable as a coordinate or distance component
pub trait Integral: PrimInt + Hash + Debug + Display + 'static {}

impl<T> Integral for T where T: PrimInt + Hash + Debug + Display + 'static {}

/// Add a delta of any integral type to `value`
pub fn checked_shift<I: Integral, D: Integral>(value: I, delta: D) -> Option<I> {
    if let Some((wide, wide_delta)) = value.to_i128().zip(delta.to_i128()) {
        return num_traits::cast(wide.checked_add(wide_delta)?);
    }

    let (negative, magnitude) = sign_and_magnitude::<I, D>(delta)?;
    if negative {
        value.checked_sub(&magnitude)
    } else {
        value.checked_add(&magnitude)
    }
}

/// Subtract a delta of any integral type from `value`
pub fn checked_retreat<I: Integral, D: Integral>(value: I, delta: D) -> Option<I> {
    if let Some((wide, wide_delta)) = value.to_i128().zip(delta.to_i128()) {
        return num_traits::cast(wide.checked_sub(wide_delta)?);
    }

    let (negative, magnitude) = sign_and_magnitude::<I, D>(delta)?;
    if negative {
        value.checked_add(&magnitude)
    } else {
        value.checked_sub(&magnitude)
    }
}

/// Multiply `value` by a factor of any integral type
pub fn checked_product<I: Integral, F: Integral>(value: I, factor: F) -> Option<I> {
    if let Some((wide, wide_factor)) = value.to_i128().zip(factor.to_i128()) {
        return num_traits::cast(wide.checked_mul(wide_factor)?);
    }
    if value.is_zero() || factor.is_zero() {
        return Some(I::zero());
    }

    let (negative, magnitude) = sign_and_magnitude::<I, F>(factor)?;
    let product = value.checked_mul(&magnitude)?;
    if negative {
        I::zero().checked_sub(&product)
    } else {
        Some(product)
    }
}

// Only reached when one operand lies above i128::MAX, so one side is u128
/// Split `delta` into its sign and its magnitude expressed in `I`
fn sign_and_magnitude<I: Integral, D: Integral>(delta: D) -> Option<(bool, I)> {
    if delta < D::zero() {
        Some((true, num_traits::cast(delta.to_i128()?.unsigned_abs())?))
    } else {
        Some((false, num_traits::cast(delta.to_u128()?)?))
    }
}

/// Compare two integers of possibly different types by value
pub fn same_value<I: Integral, J: Integral>(lhs: I, rhs: J) -> bool {
    match (lhs.to_i128(), rhs.to_i128()) {
        (Some(a), Some(b)) => a == b,
        // Only unsigned 128-bit values escape i128
        (None, None) => lhs.to_u128() == rhs.to_u128(),
        _ => false,
    }
}

/// Abort on coordinate arithmetic that left the representable range
///
/// # Panics
///
/// Always panics; callers reach this only on overflow.
#[cold]
#[track_caller]
#[allow(clippy::panic)]
pub fn overflow(operation: &'static str) -> ! {
    panic!("location arithmetic overflowed in {operation}")
}
