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

//! # Native Text
//!
//! `NativeText` is a run of bytes in a platform codepage, as handed over by
//! legacy APIs. It carries no encoding of its own: the collector decodes
//! it with the `Codepage` from its `FormatArgsConfig`, which defaults to
//! UTF-8. Deployments that know the real codepage of their text should
//! configure it, or wrap the bytes in their own type with a dedicated
//! `FormatArg` implementation.

use std::borrow::Cow;

/// The encodings `NativeText` can be decoded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Codepage {
    #[default]
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value.
    Latin1,
    /// 7-bit US-ASCII. Bytes above `0x7F` are not representable.
    Ascii,
}

impl Codepage {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Latin1 => "ISO-8859-1",
            Self::Ascii => "US-ASCII",
        }
    }

    /// Decodes `bytes`, returning the text and whether anything was replaced.
    ///
    /// Undecodable input is replaced with U+FFFD.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tessera_fmt::Codepage;
    /// let (text, lossy) = Codepage::Latin1.decode(b"caf\xE9");
    /// assert_eq!(text, "café");
    /// assert!(!lossy);
    ///
    /// let (text, lossy) = Codepage::Utf8.decode(b"caf\xE9");
    /// assert_eq!(text, "caf\u{FFFD}");
    /// assert!(lossy);
    /// ```
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> (Cow<'a, str>, bool) {
        if bytes.is_ascii() {
            if let Ok(s) = std::str::from_utf8(bytes) {
                return (Cow::Borrowed(s), false);
            }
        }
        match self {
            Self::Utf8 => {
                let text = String::from_utf8_lossy(bytes);
                let lossy = matches!(text, Cow::Owned(_));
                (text, lossy)
            }
            Self::Latin1 => (Cow::Owned(bytes.iter().map(|&b| b as char).collect()), false),
            Self::Ascii => {
                let text = bytes
                    .iter()
                    .map(|&b| {
                        if b.is_ascii() {
                            b as char
                        } else {
                            char::REPLACEMENT_CHARACTER
                        }
                    })
                    .collect();
                (Cow::Owned(text), true)
            }
        }
    }
}

impl std::fmt::Display for Codepage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown codepage name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodepageError {
    name: String,
}

impl std::fmt::Display for UnknownCodepageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown codepage '{}'", self.name)
    }
}

impl std::error::Error for UnknownCodepageError {}

impl std::str::FromStr for Codepage {
    type Err = UnknownCodepageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Self::Latin1),
            "us-ascii" | "ascii" => Ok(Self::Ascii),
            _ => Err(UnknownCodepageError {
                name: s.to_string(),
            }),
        }
    }
}

/// Bytes in a platform codepage, decoded on insertion into `FormatArgs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeText<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> NativeText<'a> {
    #[inline]
    pub fn new(bytes: impl Into<Cow<'a, [u8]>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl<'a> From<&'a [u8]> for NativeText<'a> {
    #[inline]
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for NativeText<'static> {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
