// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Overflow-Checked Addition and Subtraction
//!
//! Performs the operation with wrap-around semantics, then inspects the
//! wrapped result to decide whether the true result fit the type. The
//! result is always written, and the returned flag says whether it can be
//! trusted.
//!
//! The post-hoc test differs by representation, so each representation
//! gets its own `OverflowCheck` implementation, selected statically through
//! `Integer::Repr`:
//!
//! - `UnsignedRepr`: a sum is valid iff it is not below either operand; a
//!   difference is valid iff it is not above the minuend.
//! - `SignedRepr`: the sum of two negatives must stay at or below the
//!   smaller operand and the sum of two positives at or above the larger.
//!   Mixed signs cannot overflow.
//!
//! The signed rule is deliberately not the plain `result >= max(left, right)`
//! test used for unsigned types. Applied to signed operands, that test
//! reports valid sums such as `-1 + -1` or `5 + -3` as overflow, because
//! a correct sum with a negative operand is below the larger operand. The
//! sign-aware rule flags only true wrap-around. `PlusWithOverflowCheck`
//! with `UnsignedRepr` still applies the plain test to any type.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_core::num::overflow::plus_with_overflow_check;
//!
//! let half = u64::MAX / 2 + 1;
//! let mut sum = 0u64;
//! assert!(!plus_with_overflow_check(half, half, &mut sum));
//! assert_eq!(sum, 0); // wrapped
//!
//! let mut sum = 0i32;
//! assert!(plus_with_overflow_check(1, 2, &mut sum));
//! assert_eq!(sum, 3);
//! ```

use crate::num::error::{ArithmeticOp, OverflowError};
use crate::num::repr::{Integer, SignedRepr, UnsignedRepr};
use num_traits::{PrimInt, WrappingAdd, WrappingSub};

/// A representation-specific overflow detector for `T`.
///
/// Implemented by the zero-sized tags `SignedRepr` and `UnsignedRepr`.
pub trait OverflowCheck<T> {
    /// Writes `left + right` (wrapped) into `result`, returning `false` on overflow.
    fn plus(left: T, right: T, result: &mut T) -> bool;

    /// Writes `left - right` (wrapped) into `result`, returning `false` on overflow.
    fn minus(left: T, right: T, result: &mut T) -> bool;
}

impl<T> OverflowCheck<T> for UnsignedRepr
where
    T: PrimInt + WrappingAdd + WrappingSub,
{
    #[inline(always)]
    fn plus(left: T, right: T, result: &mut T) -> bool {
        *result = left.wrapping_add(&right);
        *result >= left.max(right)
    }

    #[inline(always)]
    fn minus(left: T, right: T, result: &mut T) -> bool {
        *result = left.wrapping_sub(&right);
        *result <= left
    }
}

impl<T> OverflowCheck<T> for SignedRepr
where
    T: PrimInt + WrappingAdd + WrappingSub,
{
    #[inline(always)]
    fn plus(left: T, right: T, result: &mut T) -> bool {
        let zero = T::zero();
        *result = left.wrapping_add(&right);
        if left < zero && right < zero {
            *result <= left.min(right)
        } else if left > zero && right > zero {
            *result >= left.max(right)
        } else {
            true
        }
    }

    #[inline(always)]
    fn minus(left: T, right: T, result: &mut T) -> bool {
        let zero = T::zero();
        *result = left.wrapping_sub(&right);
        if right > zero {
            *result < left
        } else if right < zero {
            *result > left
        } else {
            true
        }
    }
}

/// Adds `left` and `right`, writing the wrapped sum into `result`.
///
/// Returns `true` if the sum fits in `T`. `result` is written either way.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::overflow::plus_with_overflow_check;
/// let half = i32::MAX / 2 + 1;
/// let mut r = 0;
/// assert!(!plus_with_overflow_check(half, half, &mut r));
/// assert_eq!(r, i32::MIN);
/// ```
#[inline]
pub fn plus_with_overflow_check<T: Integer>(left: T, right: T, result: &mut T) -> bool {
    <T::Repr as OverflowCheck<T>>::plus(left, right, result)
}

/// Subtracts `right` from `left`, writing the wrapped difference into `result`.
///
/// Returns `true` if the difference fits in `T`. `result` is written either way.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::overflow::minus_with_overflow_check;
/// let mut r = 0u8;
/// assert!(!minus_with_overflow_check(0u8, 1u8, &mut r));
/// assert_eq!(r, u8::MAX);
/// ```
#[inline]
pub fn minus_with_overflow_check<T: Integer>(left: T, right: T, result: &mut T) -> bool {
    <T::Repr as OverflowCheck<T>>::minus(left, right, result)
}

/// `Result`-returning form of `plus_with_overflow_check`.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::overflow::try_plus;
/// assert_eq!(try_plus(250u8, 5u8), Ok(255));
/// assert_eq!(try_plus(250u8, 6u8).unwrap_err().wrapped(), 0);
/// ```
#[inline]
pub fn try_plus<T: Integer>(left: T, right: T) -> Result<T, OverflowError<T>> {
    let mut result = T::zero();
    if plus_with_overflow_check(left, right, &mut result) {
        Ok(result)
    } else {
        Err(OverflowError::new(ArithmeticOp::Add, left, right, result))
    }
}

/// `Result`-returning form of `minus_with_overflow_check`.
#[inline]
pub fn try_minus<T: Integer>(left: T, right: T) -> Result<T, OverflowError<T>> {
    let mut result = T::zero();
    if minus_with_overflow_check(left, right, &mut result) {
        Ok(result)
    } else {
        Err(OverflowError::new(ArithmeticOp::Sub, left, right, result))
    }
}

/// Callable form of the checked addition with an explicit representation tag.
///
/// `S` is usually `T::Repr`; `plus_checker` picks it automatically. Naming `S`
/// explicitly allows applying one representation's rule to another type.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::overflow::PlusWithOverflowCheck;
/// # use tessera_core::num::repr::UnsignedRepr;
/// let check = PlusWithOverflowCheck::<u64, UnsignedRepr>::new();
/// let t = u64::MAX / 2 + 1;
/// let mut s = 0;
/// assert!(!check.call(t, t, &mut s));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlusWithOverflowCheck<T, S> {
    _marker: std::marker::PhantomData<(T, S)>,
}

impl<T, S> PlusWithOverflowCheck<T, S>
where
    S: OverflowCheck<T>,
{
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _marker: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    pub fn call(&self, left: T, right: T, result: &mut T) -> bool {
        S::plus(left, right, result)
    }
}

/// Creates the addition checker for `T`'s own representation.
#[inline(always)]
pub const fn plus_checker<T: Integer>() -> PlusWithOverflowCheck<T, T::Repr> {
    PlusWithOverflowCheck::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus<T: Integer>(l: T, r: T) -> (bool, T) {
        let mut res = T::zero();
        let ok = plus_with_overflow_check(l, r, &mut res);
        (ok, res)
    }

    fn minus<T: Integer>(l: T, r: T) -> (bool, T) {
        let mut res = T::zero();
        let ok = minus_with_overflow_check(l, r, &mut res);
        (ok, res)
    }

    #[test]
    fn test_signed_half_max_overflows() {
        let half = i32::MAX / 2 + 1;
        let (ok, res) = plus(half, half);
        assert!(!ok);
        assert_eq!(res, half.wrapping_add(half));
    }

    #[test]
    fn test_signed_small_sum() {
        assert_eq!(plus(1i32, 2i32), (true, 3));
    }

    #[test]
    fn test_signed_negative_operands() {
        assert_eq!(plus(-1i32, -1i32), (true, -2));
        assert_eq!(plus(5i32, -3i32), (true, 2));
        assert_eq!(plus(i32::MIN, -1i32), (false, i32::MAX));
        assert_eq!(plus(i32::MIN, i32::MAX), (true, -1));
    }

    #[test]
    fn test_unsigned_half_max_overflows() {
        let half = u64::MAX / 2 + 1;
        let (ok, res) = plus(half, half);
        assert!(!ok);
        assert_eq!(res, 0);
    }

    #[test]
    fn test_unsigned_zero_operand_never_overflows() {
        for r in [0u64, 1, u64::MAX / 2, u64::MAX] {
            assert_eq!(plus(0u64, r), (true, r));
            assert_eq!(plus(r, 0u64), (true, r));
        }
    }

    #[test]
    fn test_result_written_on_overflow() {
        let (ok, res) = plus(u8::MAX, 1u8);
        assert!(!ok);
        assert_eq!(res, 0);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(minus(5i32, 3i32), (true, 2));
        assert_eq!(minus(i32::MIN, 1i32), (false, i32::MAX));
        assert_eq!(minus(i32::MAX, -1i32), (false, i32::MIN));
        assert_eq!(minus(-3i32, -5i32), (true, 2));
        assert_eq!(minus(0u8, 1u8), (false, u8::MAX));
        assert_eq!(minus(7u8, 7u8), (true, 0));
    }

    #[test]
    fn test_exhaustive_i8_agrees_with_checked_ops() {
        for l in i8::MIN..=i8::MAX {
            for r in i8::MIN..=i8::MAX {
                assert_eq!(plus(l, r).0, l.checked_add(r).is_some(), "{l} + {r}");
                assert_eq!(minus(l, r).0, l.checked_sub(r).is_some(), "{l} - {r}");
            }
        }
    }

    #[test]
    fn test_exhaustive_u8_agrees_with_checked_ops() {
        for l in u8::MIN..=u8::MAX {
            for r in u8::MIN..=u8::MAX {
                assert_eq!(plus(l, r).0, l.checked_add(r).is_some(), "{l} + {r}");
                assert_eq!(minus(l, r).0, l.checked_sub(r).is_some(), "{l} - {r}");
            }
        }
    }

    #[test]
    fn test_try_forms() {
        assert_eq!(try_plus(1i64, 2i64), Ok(3));
        let err = try_minus(i64::MIN, 1i64).unwrap_err();
        assert_eq!(err.op(), ArithmeticOp::Sub);
        assert_eq!(err.operands(), (i64::MIN, 1));
        assert_eq!(err.wrapped(), i64::MAX);
    }

    #[test]
    fn test_signed_rule_differs_from_unsigned_rule_on_negatives() {
        let unsigned_rule = PlusWithOverflowCheck::<i32, UnsignedRepr>::new();
        let mut r = 0;
        assert!(!unsigned_rule.call(-1, -1, &mut r));
        assert_eq!(r, -2);
        assert_eq!(plus(-1i32, -1i32), (true, -2));
    }

    #[test]
    fn test_callable_form() {
        let unsigned = PlusWithOverflowCheck::<u64, UnsignedRepr>::new();
        let mut s = 0;
        assert!(unsigned.call(40, 2, &mut s));
        assert_eq!(s, 42);

        let signed = plus_checker::<i16>();
        let mut s = 0;
        assert!(!signed.call(i16::MAX, 1, &mut s));
        assert_eq!(s, i16::MIN);
    }
}
