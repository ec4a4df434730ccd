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

//! # Narrowing Conversions
//!
//! Guards an assignment from a numeric type `U` into a possibly narrower
//! numeric type `T`.
//!
//! `check_wide_enough_and_assign` only compares against `T`'s maximum and
//! then assigns with `as` semantics. It does **not** check the lower bound:
//! a negative value assigned to an unsigned destination, or a signed value
//! below `T::MIN`, wraps exactly as an `as` cast would. Callers that need
//! both bounds should use `try_narrow`, which is lossless or fails.
//!
//! ```rust
//! use tessera_core::num::narrowing::{check_wide_enough_and_assign, try_narrow};
//!
//! let mut small = 7u8;
//! assert!(!check_wide_enough_and_assign(&mut small, 300i32));
//! assert_eq!(small, 7);
//!
//! // Lower bound is not checked here ...
//! assert!(check_wide_enough_and_assign(&mut small, -1i32));
//! assert_eq!(small, 255);
//!
//! // ... but is checked here.
//! assert!(try_narrow::<u8, i32>(-1).is_err());
//! ```

use crate::num::error::NarrowingError;
use num_traits::{AsPrimitive, Bounded, NumCast};

/// Assigns `u` into `dst` if `u` does not exceed `T::max_value()`.
///
/// Returns `false` and leaves `dst` untouched when `u` is above the maximum.
/// If `T`'s maximum is not representable in `U`, every `U` is below it and
/// the assignment always happens.
///
/// The lower bound of `T` is intentionally not validated; see the module
/// documentation.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::narrowing::check_wide_enough_and_assign;
/// let mut dst = 0i16;
/// assert!(check_wide_enough_and_assign(&mut dst, 1234u64));
/// assert_eq!(dst, 1234);
/// assert!(!check_wide_enough_and_assign(&mut dst, 40_000u64));
/// assert_eq!(dst, 1234);
/// ```
#[inline]
pub fn check_wide_enough_and_assign<T, U>(dst: &mut T, u: U) -> bool
where
    T: Bounded + NumCast + Copy + 'static,
    U: NumCast + PartialOrd + AsPrimitive<T>,
{
    if let Some(max) = <U as NumCast>::from(T::max_value()) {
        if u > max {
            return false;
        }
    }
    *dst = u.as_();
    true
}

/// Converts `u` into `T`, failing if the value lies outside `T`'s range.
///
/// Unlike `check_wide_enough_and_assign`, both bounds are checked. Float
/// sources are truncated toward zero; `NaN` is rejected.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::narrowing::try_narrow;
/// assert_eq!(try_narrow::<i8, i64>(-128), Ok(-128));
/// assert!(try_narrow::<i8, i64>(-129).is_err());
/// assert_eq!(try_narrow::<u32, f64>(3.9), Ok(3));
/// ```
#[inline]
pub fn try_narrow<T, U>(u: U) -> Result<T, NarrowingError>
where
    T: NumCast,
    U: NumCast + Copy + std::fmt::Display,
{
    <T as NumCast>::from(u).ok_or_else(|| NarrowingError::new::<U, T>(&u))
}
