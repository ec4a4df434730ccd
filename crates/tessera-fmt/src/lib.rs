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

//! # Tessera Format Arguments
//!
//! An ordered collector that turns heterogeneous arguments into one
//! uniform value type for a message formatter.
//!
//! ## Modules
//!
//! - `args`: `FormatArgs<V>`, the `FormatArg<V>` conversion trait, and the
//!   `format_arg_via_from!` / `fmt_args!` macros.
//! - `formattable`: `Formattable`, the default value type.
//! - `text`: `NativeText` and the `Codepage` it is decoded with.
//! - `config`: `FormatArgsConfig`.
//! - `message`: The `MessageFormatter` seam to the formatting engine.
//!
//! ## Logging
//!
//! Lossy conversions (integers beyond the `i64` range, undecodable native
//! text) are reported as `tracing` warnings and the argument is inserted
//! anyway. Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use tessera_fmt::{FormatArgs, Formattable};
//!
//! let args = FormatArgs::<Formattable>::new() << "Joe" << 96usize << 128usize;
//! let line: Vec<String> = args.iter().map(|v| v.to_string()).collect();
//! assert_eq!(line, ["Joe", "96", "128"]);
//! ```

pub mod args;
pub mod config;
pub mod formattable;
pub mod message;
pub mod text;

#[cfg(test)]
mod testing;

pub use args::{FormatArg, FormatArgs};
pub use config::FormatArgsConfig;
pub use formattable::{Formattable, FormattableKind};
pub use message::MessageFormatter;
pub use text::{Codepage, NativeText, UnknownCodepageError};
