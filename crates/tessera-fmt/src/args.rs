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

//! # Format Arguments
//!
//! `FormatArgs<V>` collects arguments of arbitrary source types for a
//! message formatter, converting each one into the formatter's value type
//! `V` as it is inserted. Insertion order is preserved and the collector is
//! append-only. The collected values are exposed as one contiguous slice,
//! which is what a formatting routine expecting `(array, count)` consumes.
//!
//! ## Conversion Dispatch
//!
//! Each source type chooses its conversion by implementing `FormatArg<V>`:
//!
//! - Default path: `V::from(u)`. Register types on it with
//!   `format_arg_via_from!`, or bypass dispatch with `FormatArgs::push_from`.
//! - `u64` / `usize` / `u128` / `i128`: values outside the `i64` range are
//!   logged as a warning and narrowed with `as` semantics. The argument is
//!   still inserted.
//! - `NativeText`: decoded with the collector's configured `Codepage`.
//!
//! Application types opt in by implementing `FormatArg<V>` themselves,
//! usually by forwarding to one of the types above.
//!
//! ## Usage
//!
//! ```rust
//! use tessera_fmt::{FormatArgs, Formattable};
//!
//! let username = "Joe";
//! let mbox_size: usize = 96;
//! let mbox_limit: usize = 128;
//!
//! let args = FormatArgs::<Formattable>::new() << username << mbox_size << mbox_limit;
//!
//! assert_eq!(args.len(), 3);
//! assert_eq!(args[0], Formattable::from("Joe"));
//! assert_eq!(args.as_slice()[2].as_i64(), Some(128));
//! ```

use crate::config::FormatArgsConfig;
use crate::formattable::Formattable;
use crate::text::NativeText;
use smallvec::SmallVec;
use std::borrow::Cow;
use tessera_core::num::narrowing::{check_wide_enough_and_assign, try_narrow};

/// Number of arguments stored inline before the collector allocates.
pub const INLINE_ARGS: usize = 4;

tessera_core::const_check!(INLINE_ARGS > 0, "INLINE_ARGS must be positive");

/// Conversion of a source value into a `FormatArgs<V>` element.
///
/// Implementations decide how `self` becomes a `V` and append the result
/// with `FormatArgs::push_from` (the default path) or by forwarding to
/// another `FormatArg` implementation through `FormatArgs::push`.
///
/// # Examples
///
/// ```rust
/// # use tessera_fmt::{FormatArg, FormatArgs, Formattable};
/// struct Celsius(f64);
///
/// impl FormatArg<Formattable> for Celsius {
///     fn append_to(self, args: &mut FormatArgs<Formattable>) {
///         args.push(format!("{:.1} °C", self.0));
///     }
/// }
///
/// let mut args = FormatArgs::<Formattable>::new();
/// args.push(Celsius(21.04)).push(3u8);
/// assert_eq!(args[0].as_str(), Some("21.0 °C"));
/// ```
pub trait FormatArg<V> {
    /// Converts `self` and appends it to `args`.
    fn append_to(self, args: &mut FormatArgs<V>);
}

/// Registers source types on the default `V::from(u)` conversion path.
///
/// ```rust
/// # use tessera_fmt::{format_arg_via_from, FormatArgs};
/// #[derive(Debug, PartialEq)]
/// struct Label(String);
///
/// impl From<&str> for Label {
///     fn from(s: &str) -> Self { Label(s.to_owned()) }
/// }
///
/// format_arg_via_from!(Label; &str);
///
/// let mut args = FormatArgs::<Label>::new();
/// args.push("a").push("b");
/// assert_eq!(args.as_slice(), &[Label("a".into()), Label("b".into())]);
/// ```
#[macro_export]
macro_rules! format_arg_via_from {
    ($v:ty; $($t:ty),+ $(,)?) => {
        $(
            impl $crate::FormatArg<$v> for $t {
                #[inline]
                fn append_to(self, args: &mut $crate::FormatArgs<$v>) {
                    args.push_from(self);
                }
            }
        )+
    };
}

/// Builds a `FormatArgs<Formattable>` from a list of arguments, in order.
///
/// ```rust
/// # use tessera_fmt::{fmt_args, Formattable};
/// let args = fmt_args!["disk", 3u8, 0.5f64];
/// assert_eq!(args.len(), 3);
/// assert_eq!(args[2], Formattable::Double(0.5));
/// ```
#[macro_export]
macro_rules! fmt_args {
    () => {
        $crate::FormatArgs::<$crate::Formattable>::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let mut args = $crate::FormatArgs::<$crate::Formattable>::new();
        $( args.push($arg); )+
        args
    }};
}

/// An ordered, append-only collection of formatter arguments.
///
/// The slice returned by `as_slice` (or through `Deref`) borrows the
/// collector, so it cannot outlive the next insertion.
#[derive(Debug, Clone)]
pub struct FormatArgs<V> {
    items: SmallVec<[V; INLINE_ARGS]>,
    config: FormatArgsConfig,
}

impl<V> FormatArgs<V> {
    /// Creates an empty collector with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(FormatArgsConfig::default())
    }

    #[inline]
    pub fn with_config(config: FormatArgsConfig) -> Self {
        Self {
            items: SmallVec::with_capacity(config.initial_capacity()),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &FormatArgsConfig {
        &self.config
    }

    /// Converts `u` through its `FormatArg` implementation and appends it.
    #[inline]
    pub fn push<U>(&mut self, u: U) -> &mut Self
    where
        U: FormatArg<V>,
    {
        u.append_to(self);
        self
    }

    /// Appends `V::from(u)`, bypassing any `FormatArg` override.
    #[inline]
    pub fn push_from<U>(&mut self, u: U) -> &mut Self
    where
        U: Into<V>,
    {
        self.items.push(u.into());
        self
    }

    /// The number of collected arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The collected arguments in insertion order, as one contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    /// A pointer to the first argument, valid until the next insertion.
    ///
    /// Pair it with `len()` when handing the arguments to foreign code.
    #[inline]
    pub fn as_ptr(&self) -> *const V {
        self.items.as_ptr()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }
}

impl<V> Default for FormatArgs<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::ops::Deref for FormatArgs<V> {
    type Target = [V];

    #[inline]
    fn deref(&self) -> &[V] {
        self.as_slice()
    }
}

impl<V> AsRef<[V]> for FormatArgs<V> {
    #[inline]
    fn as_ref(&self) -> &[V] {
        self.as_slice()
    }
}

impl<V, U> std::ops::Shl<U> for FormatArgs<V>
where
    U: FormatArg<V>,
{
    type Output = FormatArgs<V>;

    #[inline]
    fn shl(mut self, u: U) -> Self::Output {
        self.push(u);
        self
    }
}

impl<'a, V, U> std::ops::Shl<U> for &'a mut FormatArgs<V>
where
    U: FormatArg<V>,
{
    type Output = &'a mut FormatArgs<V>;

    #[inline]
    fn shl(self, u: U) -> Self::Output {
        self.push(u)
    }
}

impl<V, U> Extend<U> for FormatArgs<V>
where
    U: FormatArg<V>,
{
    fn extend<I: IntoIterator<Item = U>>(&mut self, iter: I) {
        for u in iter {
            self.push(u);
        }
    }
}

impl<V, U> FromIterator<U> for FormatArgs<V>
where
    U: FormatArg<V>,
{
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let mut args = Self::new();
        args.extend(iter);
        args
    }
}

impl<'a, V> IntoIterator for &'a FormatArgs<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for FormatArgs<V> {
    type Item = V;
    type IntoIter = smallvec::IntoIter<[V; INLINE_ARGS]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<V: PartialEq> PartialEq for FormatArgs<V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

format_arg_via_from!(
    Formattable;
    Formattable,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    bool,
    char,
    String,
    &str,
    Cow<'_, str>,
);

impl<V> FormatArg<V> for u64
where
    i64: FormatArg<V>,
{
    fn append_to(self, args: &mut FormatArgs<V>) {
        let mut narrowed = 0i64;
        if !check_wide_enough_and_assign(&mut narrowed, self) {
            tracing::warn!(
                value = self,
                "format argument {} overflows the signed 64-bit range and is narrowed",
                self
            );
            narrowed = self as i64;
        }
        args.push(narrowed);
    }
}

impl<V> FormatArg<V> for usize
where
    i64: FormatArg<V>,
{
    #[inline]
    fn append_to(self, args: &mut FormatArgs<V>) {
        args.push(self as u64);
    }
}

impl<V> FormatArg<V> for u128
where
    i64: FormatArg<V>,
{
    fn append_to(self, args: &mut FormatArgs<V>) {
        let narrowed = try_narrow::<i64, u128>(self).unwrap_or_else(|err| {
            tracing::warn!(value = %self, "format argument narrowed: {}", err);
            self as i64
        });
        args.push(narrowed);
    }
}

impl<V> FormatArg<V> for i128
where
    i64: FormatArg<V>,
{
    fn append_to(self, args: &mut FormatArgs<V>) {
        let narrowed = try_narrow::<i64, i128>(self).unwrap_or_else(|err| {
            tracing::warn!(value = %self, "format argument narrowed: {}", err);
            self as i64
        });
        args.push(narrowed);
    }
}

impl<V> FormatArg<V> for NativeText<'_>
where
    String: FormatArg<V>,
{
    fn append_to(self, args: &mut FormatArgs<V>) {
        let codepage = args.config().codepage();
        let (text, lossy) = codepage.decode(self.as_bytes());
        if lossy {
            tracing::warn!(
                codepage = %codepage,
                len = self.len(),
                "native text contains bytes not representable in {}; replaced with U+FFFD",
                codepage
            );
        }
        args.push(text.into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::count_warnings;
    use crate::text::Codepage;

    #[test]
    fn test_insertion_order_and_len() {
        let mut args = FormatArgs::<Formattable>::new();
        args.push("a").push(2i16).push(3.5f64);
        assert_eq!(args.len(), 3);
        assert_eq!(
            args.as_slice(),
            &[
                Formattable::Text("a".into()),
                Formattable::Int64(2),
                Formattable::Double(3.5),
            ]
        );
    }

    #[test]
    fn test_shift_operator_chains() {
        let owned = FormatArgs::<Formattable>::new() << "x" << 1u8 << true;
        assert_eq!(owned.len(), 3);

        let mut args = FormatArgs::<Formattable>::new();
        let _ = &mut args << "x" << 1u8 << true;
        assert_eq!(args, owned);
    }

    #[test]
    fn test_view_is_idempotent() {
        let args = fmt_args!["a", 1u32, 'c'];
        let first = args.as_slice();
        let second = args.as_slice();
        assert_eq!(first, second);
        assert_eq!(first.len(), args.len());
        assert_eq!(first.as_ptr(), args.as_ptr());
    }

    #[test]
    fn test_empty_collector() {
        let args = fmt_args![];
        assert!(args.is_empty());
        assert_eq!(args.as_slice(), &[] as &[Formattable]);
    }

    #[test]
    fn test_growth_beyond_inline_capacity_keeps_order() {
        let args: FormatArgs<Formattable> = (0..(INLINE_ARGS as i32 * 4)).collect();
        assert_eq!(args.len(), INLINE_ARGS * 4);
        for (i, v) in args.iter().enumerate() {
            assert_eq!(v.as_i64(), Some(i as i64));
        }
    }

    #[test]
    fn test_u64_in_range_does_not_warn() {
        let (args, warnings) = count_warnings(|| fmt_args![i64::MAX as u64, 0u64]);
        assert_eq!(warnings, 0);
        assert_eq!(args[0].as_i64(), Some(i64::MAX));
        assert_eq!(args[1].as_i64(), Some(0));
    }

    #[test]
    fn test_u64_above_i64_max_warns_once_and_wraps() {
        let value = (1u64 << 63) + 5;
        let (args, warnings) = count_warnings(|| fmt_args![value]);
        assert_eq!(warnings, 1);
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].as_i64(), Some(i64::MIN + 5));
    }

    #[test]
    fn test_usize_goes_through_u64_override() {
        let (args, warnings) = count_warnings(|| fmt_args![usize::MAX]);
        let expected = if usize::BITS == 64 { 1 } else { 0 };
        assert_eq!(warnings, expected);
        assert_eq!(args[0].as_i64(), Some(usize::MAX as u64 as i64));
    }

    #[test]
    fn test_wide_integers_narrow_with_warning() {
        let (args, warnings) =
            count_warnings(|| fmt_args![7i128, i128::MIN, u128::MAX, 9u128]);
        assert_eq!(warnings, 2);
        assert_eq!(args[0].as_i64(), Some(7));
        assert_eq!(args[1].as_i64(), Some(i128::MIN as i64));
        assert_eq!(args[2].as_i64(), Some(u128::MAX as i64));
        assert_eq!(args[3].as_i64(), Some(9));
    }

    #[test]
    fn test_native_text_uses_configured_codepage() {
        let bytes: &[u8] = b"na\xEFve";

        let latin1 = FormatArgsConfig::default().with_codepage(Codepage::Latin1);
        let (args, warnings) = count_warnings(|| {
            let mut args = FormatArgs::<Formattable>::with_config(latin1);
            args.push(NativeText::from(bytes));
            args
        });
        assert_eq!(warnings, 0);
        assert_eq!(args[0].as_str(), Some("naïve"));

        let (args, warnings) = count_warnings(|| fmt_args![NativeText::from(bytes)]);
        assert_eq!(warnings, 1);
        assert_eq!(args[0].as_str(), Some("na\u{FFFD}ve"));
    }

    #[test]
    fn test_push_from_bypasses_overrides() {
        #[derive(Debug, PartialEq)]
        struct Wide(u64);

        impl From<u64> for Wide {
            fn from(v: u64) -> Self {
                Wide(v)
            }
        }

        let (args, warnings) = count_warnings(|| {
            let mut args = FormatArgs::<Wide>::new();
            args.push_from(u64::MAX);
            args
        });
        assert_eq!(warnings, 0);
        assert_eq!(args.as_slice(), &[Wide(u64::MAX)]);
    }

    #[test]
    fn test_extend_and_into_iter() {
        let mut args = fmt_args!["head"];
        args.extend(["a", "b"]);
        let collected: Vec<String> = args.into_iter().map(|v| v.to_string()).collect();
        assert_eq!(collected, vec!["head", "a", "b"]);
    }
}
