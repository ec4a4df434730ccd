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

//! # Build-Time Assertions
//!
//! Conditions that must hold for the program to exist at all. A false
//! condition is a compile error, never a runtime failure, and a true one
//! leaves nothing behind in the binary.
//!
//! ```rust
//! use tessera_core::{const_check, const_check_size};
//!
//! const MAX_ARGS: usize = 16;
//! const_check!(MAX_ARGS > 0, "MAX_ARGS must be positive");
//! const_check!(i64::BITS == 64);
//! const_check_size!(u32, 4);
//! ```
//!
//! A false condition rejects the build:
//!
//! ```compile_fail
//! tessera_core::const_check!(1 + 1 == 3, "arithmetic is broken");
//! ```
//!
//! ```compile_fail
//! tessera_core::const_check_size!(u64, 4);
//! ```

/// Fails compilation unless the constant expression `$cond` is `true`.
///
/// Usable at module level or inside function bodies. The condition must be
/// evaluable in a `const` context.
#[macro_export]
macro_rules! const_check {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!($cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!($cond, $msg);
    };
}

/// Fails compilation unless `size_of::<$ty>() == $size`.
#[macro_export]
macro_rules! const_check_size {
    ($ty:ty, $size:expr $(,)?) => {
        const _: () = ::core::assert!(
            ::core::mem::size_of::<$ty>() == $size,
            ::core::concat!("unexpected size for `", ::core::stringify!($ty), "`")
        );
    };
}
