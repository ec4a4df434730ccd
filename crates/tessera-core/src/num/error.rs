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

/// Error returned by `try_narrow` when a value does not fit the target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NarrowingError {
    value: String,
    source_type: &'static str,
    target_type: &'static str,
}

impl NarrowingError {
    #[inline]
    pub(crate) fn new<U: std::fmt::Display, T>(value: &U) -> Self {
        Self {
            value: value.to_string(),
            source_type: std::any::type_name::<U>(),
            target_type: std::any::type_name::<T>(),
        }
    }

    /// The rejected value, rendered with `Display`.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name of the source type.
    #[inline]
    pub fn source_type(&self) -> &'static str {
        self.source_type
    }

    /// The name of the type the value was narrowed into.
    #[inline]
    pub fn target_type(&self) -> &'static str {
        self.target_type
    }
}

impl std::fmt::Display for NarrowingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Value {} of type {} is out of range for type {}",
            self.value, self.source_type, self.target_type
        )
    }
}

impl std::error::Error for NarrowingError {}

/// The arithmetic operation that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
}

impl ArithmeticOp {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

impl std::fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by `try_plus` / `try_minus` when the operation overflowed.
///
/// The wrapped result is kept so callers that accept wrap-around can
/// still recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowError<T> {
    op: ArithmeticOp,
    left: T,
    right: T,
    wrapped: T,
}

impl<T: Copy> OverflowError<T> {
    #[inline]
    pub(crate) fn new(op: ArithmeticOp, left: T, right: T, wrapped: T) -> Self {
        Self {
            op,
            left,
            right,
            wrapped,
        }
    }

    #[inline]
    pub fn op(&self) -> ArithmeticOp {
        self.op
    }

    #[inline]
    pub fn operands(&self) -> (T, T) {
        (self.left, self.right)
    }

    /// The two's-complement wrapped result of the operation.
    #[inline]
    pub fn wrapped(&self) -> T {
        self.wrapped
    }
}

impl<T: std::fmt::Display> std::fmt::Display for OverflowError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arithmetic overflow: {} {} {} (wrapped to {})",
            self.left, self.op, self.right, self.wrapped
        )
    }
}

impl<T: std::fmt::Display + std::fmt::Debug> std::error::Error for OverflowError<T> {}
