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

//! # Integer Representations
//!
//! Type-level signedness tags for the core integer types. Overflow checks
//! dispatch on `Integer::Repr`, so the algorithm for the other
//! representation is never instantiated for a given type.

use crate::num::overflow::OverflowCheck;
use num_traits::{PrimInt, WrappingAdd, WrappingSub};

/// Tag for two's-complement signed integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SignedRepr;

/// Tag for unsigned integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnsignedRepr;

/// A primitive integer whose representation is known at compile time.
///
/// # Examples
///
/// ```rust
/// # use tessera_core::num::repr::{Integer, SignedRepr, UnsignedRepr};
/// fn repr_name<T: Integer>() -> &'static str {
///     if T::IS_SIGNED { "signed" } else { "unsigned" }
/// }
///
/// assert_eq!(repr_name::<i32>(), "signed");
/// assert_eq!(repr_name::<u64>(), "unsigned");
/// ```
pub trait Integer:
    PrimInt + WrappingAdd + WrappingSub + std::fmt::Debug + std::fmt::Display + 'static
{
    /// The signedness tag that selects the overflow algorithm.
    type Repr: OverflowCheck<Self>;

    /// Mirrors `Repr` as a value for diagnostics.
    const IS_SIGNED: bool;
}

macro_rules! impl_integer_for {
    ($repr:ty, $signed:expr, $t:ty) => {
        impl Integer for $t {
            type Repr = $repr;
            const IS_SIGNED: bool = $signed;
        }
    };
}

macro_rules! impl_signed_for {
    ($t:ty) => {
        impl_integer_for!(SignedRepr, true, $t);
    };
}

macro_rules! impl_unsigned_for {
    ($t:ty) => {
        impl_integer_for!(UnsignedRepr, false, $t);
    };
}

impl_signed_for!(i8);
impl_signed_for!(i16);
impl_signed_for!(i32);
impl_signed_for!(i64);
impl_signed_for!(i128);
impl_signed_for!(isize);

impl_unsigned_for!(u8);
impl_unsigned_for!(u16);
impl_unsigned_for!(u32);
impl_unsigned_for!(u64);
impl_unsigned_for!(u128);
impl_unsigned_for!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn is_signed<T: Integer>() -> bool {
        T::IS_SIGNED
    }

    #[test]
    fn test_signedness_tags() {
        assert!(is_signed::<i8>());
        assert!(is_signed::<i128>());
        assert!(is_signed::<isize>());
        assert!(!is_signed::<u8>());
        assert!(!is_signed::<u128>());
        assert!(!is_signed::<usize>());
        assert!(is_signed::<i64>());
        assert!(!is_signed::<u64>());
    }
}
