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

//! # Formatter Handoff
//!
//! Tessera does not format messages. A `MessageFormatter` is whatever
//! engine turns a pattern and an argument array into text; the collector
//! only guarantees that the array is contiguous, in insertion order, and
//! exactly `len()` elements long.

use crate::args::FormatArgs;

/// An external message-formatting engine over argument type `V`.
///
/// Closures of the shape `Fn(&str, &[V]) -> Result<String, E>` implement
/// this trait directly.
pub trait MessageFormatter<V> {
    type Error;

    /// Formats `pattern` using the positional arguments in `args`.
    fn format(&self, pattern: &str, args: &[V]) -> Result<String, Self::Error>;
}

impl<V, E, F> MessageFormatter<V> for F
where
    F: Fn(&str, &[V]) -> Result<String, E>,
{
    type Error = E;

    #[inline]
    fn format(&self, pattern: &str, args: &[V]) -> Result<String, E> {
        self(pattern, args)
    }
}

impl<V> FormatArgs<V> {
    /// Hands the collected arguments to `formatter` together with `pattern`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_fmt::{fmt_args, Formattable};
    /// let args = fmt_args!["Joe", 96u32];
    /// let out = args.format_with(
    ///     &|pattern: &str, values: &[Formattable]| -> Result<String, ()> {
    ///         Ok(format!("{}: {}", pattern, values.len()))
    ///     },
    ///     "count",
    /// );
    /// assert_eq!(out, Ok("count: 2".to_string()));
    /// ```
    #[inline]
    pub fn format_with<M>(&self, formatter: &M, pattern: &str) -> Result<String, M::Error>
    where
        M: MessageFormatter<V> + ?Sized,
    {
        formatter.format(pattern, self.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formattable::Formattable;

    /// Replaces `{N}` with the N-th argument.
    struct Positional;

    #[derive(Debug, PartialEq)]
    struct MissingArgument(usize);

    impl MessageFormatter<Formattable> for Positional {
        type Error = MissingArgument;

        fn format(&self, pattern: &str, args: &[Formattable]) -> Result<String, MissingArgument> {
            let mut out = String::with_capacity(pattern.len());
            let mut rest = pattern;
            while let Some(open) = rest.find('{') {
                out.push_str(&rest[..open]);
                let after = &rest[open + 1..];
                let close = match after.find('}') {
                    Some(close) => close,
                    None => {
                        out.push_str(&rest[open..]);
                        return Ok(out);
                    }
                };
                match after[..close].parse::<usize>() {
                    Ok(index) => {
                        let arg = args.get(index).ok_or(MissingArgument(index))?;
                        out.push_str(&arg.to_string());
                    }
                    Err(_) => out.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            }
            out.push_str(rest);
            Ok(out)
        }
    }

    #[test]
    fn test_formatter_sees_insertion_order() {
        let args = crate::fmt_args!["Joe", 96usize, 128usize];
        let text = args.format_with(&Positional, "{0} uses {1} of {2} MB");
        assert_eq!(text, Ok("Joe uses 96 of 128 MB".to_string()));
    }

    #[test]
    fn test_formatter_errors_are_propagated() {
        let args = crate::fmt_args!["only"];
        assert_eq!(
            args.format_with(&Positional, "{0} and {1}"),
            Err(MissingArgument(1))
        );
    }

    #[test]
    fn test_closure_formatter_receives_full_slice() {
        let args = crate::fmt_args![1u8, 2u8, 3u8];
        let count = |_: &str, values: &[Formattable]| -> Result<String, ()> {
            Ok(values.len().to_string())
        };
        assert_eq!(args.format_with(&count, ""), Ok(args.len().to_string()));
    }
}
