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

use crate::text::Codepage;

/// Configuration for a `FormatArgs` collector.
///
/// # Examples
///
/// ```rust
/// # use tessera_fmt::{Codepage, FormatArgs, FormatArgsConfig, Formattable};
/// let config = FormatArgsConfig::default()
///     .with_codepage(Codepage::Latin1)
///     .with_capacity(8);
/// let args = FormatArgs::<Formattable>::with_config(config);
/// assert_eq!(args.config().codepage(), Codepage::Latin1);
/// assert!(args.capacity() >= 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FormatArgsConfig {
    codepage: Codepage,
    initial_capacity: usize,
}

impl FormatArgsConfig {
    #[inline]
    pub const fn new(codepage: Codepage, initial_capacity: usize) -> Self {
        Self {
            codepage,
            initial_capacity,
        }
    }

    /// Sets the codepage assumed for `NativeText` arguments.
    #[inline]
    pub fn with_codepage(mut self, codepage: Codepage) -> Self {
        self.codepage = codepage;
        self
    }

    /// Sets how many arguments to reserve room for up front.
    #[inline]
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[inline]
    pub fn codepage(&self) -> Codepage {
        self.codepage
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl std::fmt::Display for FormatArgsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FormatArgsConfig(codepage: {}, initial_capacity: {})",
            self.codepage, self.initial_capacity
        )
    }
}
