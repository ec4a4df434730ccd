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

//! # Tessera Core
//!
//! Numeric safety primitives used by the Tessera argument collector and
//! by any code that has to move integers across type boundaries without
//! silently losing information.
//!
//! ## Modules
//!
//! - `num`: Narrowing checks (`check_wide_enough_and_assign`, `try_narrow`),
//!   overflow-checked addition and subtraction selected by a type-level
//!   signedness tag (`SignedRepr` / `UnsignedRepr`), and the error types
//!   returned by the `Result`-based convenience forms.
//! - `assert`: Build-time assertions (`const_check!`, `const_check_size!`)
//!   that reject an invalid program during compilation at zero runtime cost.
//!
//! ## Failure Model
//!
//! None of the runtime checks panic. The primary forms report a boolean
//! outcome and leave the decision to the immediate caller; the `try_*`
//! forms wrap the same checks in a `Result` for `?`-style propagation.

pub mod assert;
pub mod num;
