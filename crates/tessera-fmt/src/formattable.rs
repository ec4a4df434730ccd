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

//! # Formattable Values
//!
//! `Formattable` is the uniform value a message formatter consumes. Every
//! argument inserted into a `FormatArgs<Formattable>` ends up as one of its
//! variants. Integers are widened to `Int64`, floats to `Double`, and text
//! of any origin to an owned `Text`.

use std::borrow::Cow;

/// The discriminant of a `Formattable`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormattableKind {
    Int64 = 0,
    Double = 1,
    Bool = 2,
    Text = 3,
}

impl FormattableKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int64 => "Int64",
            Self::Double => "Double",
            Self::Bool => "Bool",
            Self::Text => "Text",
        }
    }
}

impl std::fmt::Display for FormattableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single formatter argument.
///
/// # Examples
///
/// ```rust
/// # use tessera_fmt::{Formattable, FormattableKind};
/// let n = Formattable::from(96u32);
/// assert_eq!(n.kind(), FormattableKind::Int64);
/// assert_eq!(n.as_i64(), Some(96));
///
/// let s = Formattable::from("Joe");
/// assert_eq!(s.as_str(), Some("Joe"));
/// assert_eq!(s.to_string(), "Joe");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Formattable {
    Int64(i64),
    Double(f64),
    Bool(bool),
    Text(String),
}

impl Formattable {
    #[inline]
    pub fn kind(&self) -> FormattableKind {
        match self {
            Self::Int64(_) => FormattableKind::Int64,
            Self::Double(_) => FormattableKind::Double,
            Self::Bool(_) => FormattableKind::Bool,
            Self::Text(_) => FormattableKind::Text,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers are converted.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            Self::Int64(v) => Some(*v as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_formattable {
    ($variant:ident, $inner:ty, $t:ty) => {
        impl From<$t> for Formattable {
            #[inline]
            fn from(v: $t) -> Self {
                Formattable::$variant(<$inner>::from(v))
            }
        }
    };
}

impl_from_for_formattable!(Int64, i64, i8);
impl_from_for_formattable!(Int64, i64, i16);
impl_from_for_formattable!(Int64, i64, i32);
impl_from_for_formattable!(Int64, i64, i64);
impl_from_for_formattable!(Int64, i64, u8);
impl_from_for_formattable!(Int64, i64, u16);
impl_from_for_formattable!(Int64, i64, u32);

impl_from_for_formattable!(Double, f64, f32);
impl_from_for_formattable!(Double, f64, f64);

impl_from_for_formattable!(Bool, bool, bool);

impl_from_for_formattable!(Text, String, String);
impl_from_for_formattable!(Text, String, &str);
impl_from_for_formattable!(Text, String, char);

impl From<Cow<'_, str>> for Formattable {
    #[inline]
    fn from(v: Cow<'_, str>) -> Self {
        Formattable::Text(v.into_owned())
    }
}

impl std::fmt::Display for Formattable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int64(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_widen_to_int64() {
        assert_eq!(Formattable::from(-5i8), Formattable::Int64(-5));
        assert_eq!(Formattable::from(u32::MAX), Formattable::Int64(u32::MAX as i64));
        assert_eq!(Formattable::from(i64::MIN).as_i64(), Some(i64::MIN));
    }

    #[test]
    fn test_text_sources() {
        assert_eq!(Formattable::from('x').as_str(), Some("x"));
        assert_eq!(Formattable::from(String::from("abc")).as_str(), Some("abc"));
        assert_eq!(Formattable::from(Cow::Borrowed("cow")).as_str(), Some("cow"));
    }

    #[test]
    fn test_accessors_reject_other_kinds() {
        let d = Formattable::from(1.5f64);
        assert_eq!(d.kind(), FormattableKind::Double);
        assert_eq!(d.as_i64(), None);
        assert_eq!(d.as_str(), None);
        assert_eq!(Formattable::from(3i32).as_f64(), Some(3.0));
        assert_eq!(Formattable::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Formattable::from(42u8).to_string(), "42");
        assert_eq!(Formattable::from(0.25f32).to_string(), "0.25");
        assert_eq!(Formattable::from(false).to_string(), "false");
        assert_eq!(FormattableKind::Text.to_string(), "Text");
    }
}
