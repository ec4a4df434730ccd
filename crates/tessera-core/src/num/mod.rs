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

//! # Numeric Safety
//!
//! Runtime checks for conversions and arithmetic on primitive numeric types.
//!
//! ## Submodules
//!
//! - `repr`: The `Integer` trait and the zero-sized signedness tags
//!   (`SignedRepr`, `UnsignedRepr`) implemented for all core integer types.
//! - `narrowing`: Upper-bound check before an `as`-style assignment, plus a
//!   lossless `try_narrow` that validates both bounds.
//! - `overflow`: Post-hoc overflow detection for `+` and `-` on wrapped
//!   results, with the algorithm picked statically per representation.
//! - `error`: `NarrowingError` and `OverflowError<T>`.

pub mod error;
pub mod narrowing;
pub mod overflow;
pub mod repr;
