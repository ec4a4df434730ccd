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

//! # Tessera FFI
//!
//! C-compatible bindings for the Tessera argument collector, for hosts whose
//! message formatter lives outside Rust and expects a flat argument array
//! plus a count.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: The collector is hidden behind a raw pointer. The
//!     host only uses the provided functions.
//! 2.  **Explicit Lifecycle**: Every `tessera_format_args_new` must be paired
//!     with `tessera_format_args_free`. Strings pushed into a handle are
//!     copied and owned by it.
//! 3.  **Fail-Fast Safety**: Passing a `NULL` handle or an out-of-bounds index
//!     aborts the process instead of invoking undefined behavior. The check
//!     panics, and a panic cannot unwind across the `extern "C"` boundary.
//! 4.  **Borrowed Views**: `tessera_format_args_data` returns a pointer that
//!     stays valid until the next push into, or the release of, the handle.

pub mod args;
