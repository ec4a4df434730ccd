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

use libc::c_char;
use std::ffi::{CStr, CString};
use tessera_fmt::{format_arg_via_from, FormatArgs, FormatArgsConfig, FormattableKind};

/// FFI-compatible argument value.
///
/// Only the payload field selected by `kind` is meaningful. For `Text`,
/// `text` points to a NUL-terminated string owned by the handle the value
/// was read from, and `text_len` is its length in bytes without the NUL.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FfiFormattable {
    pub kind: FormattableKind,
    pub int64: i64,
    pub double: f64,
    pub boolean: bool,
    pub text: *const c_char,
    pub text_len: usize,
}

impl FfiFormattable {
    #[inline]
    fn empty(kind: FormattableKind) -> Self {
        Self {
            kind,
            int64: 0,
            double: 0.0,
            boolean: false,
            text: std::ptr::null(),
            text_len: 0,
        }
    }

    /// Borrows the text payload of a value owned by a live handle.
    #[inline]
    fn text_of(s: &CStr) -> Self {
        Self {
            text: s.as_ptr(),
            text_len: s.to_bytes().len(),
            ..Self::empty(FormattableKind::Text)
        }
    }
}

impl From<i64> for FfiFormattable {
    #[inline]
    fn from(v: i64) -> Self {
        Self {
            int64: v,
            ..Self::empty(FormattableKind::Int64)
        }
    }
}

impl From<f64> for FfiFormattable {
    #[inline]
    fn from(v: f64) -> Self {
        Self {
            double: v,
            ..Self::empty(FormattableKind::Double)
        }
    }
}

impl From<bool> for FfiFormattable {
    #[inline]
    fn from(v: bool) -> Self {
        Self {
            boolean: v,
            ..Self::empty(FormattableKind::Bool)
        }
    }
}

format_arg_via_from!(FfiFormattable; i64, f64, bool);

/// Opaque collector handle.
#[derive(Debug, Default)]
pub struct TesseraFfiFormatArgs {
    args: FormatArgs<FfiFormattable>,
    strings: Vec<CString>,
}

impl TesseraFfiFormatArgs {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            args: FormatArgs::with_config(
                FormatArgsConfig::default().with_capacity(capacity),
            ),
            strings: Vec::new(),
        }
    }

    /// Copies `text` into the handle and appends it.
    pub fn push_text(&mut self, text: &CStr) {
        let owned = text.to_owned();
        // The heap buffer of a `CString` does not move when the `Vec` grows.
        self.args.push_from(FfiFormattable::text_of(&owned));
        self.strings.push(owned);
    }

    #[inline]
    pub fn args(&self) -> &FormatArgs<FfiFormattable> {
        &self.args
    }

    /// Returns a copy of the argument at `index`.
    ///
    /// # Panics
    ///
    /// This function will panic if `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> FfiFormattable {
        assert!(
            index < self.args.len(),
            "called `TesseraFfiFormatArgs::get` with index out of bounds: the len is {} but the index is {}",
            self.args.len(),
            index
        );
        self.args[index]
    }
}

#[inline(always)]
unsafe fn handle_mut<'a>(
    ptr: *mut TesseraFfiFormatArgs,
    caller: &str,
) -> &'a mut TesseraFfiFormatArgs {
    assert!(!ptr.is_null(), "called `{}` with `ptr` as null pointer", caller);
    &mut *ptr
}

#[inline(always)]
unsafe fn handle_ref<'a>(
    ptr: *const TesseraFfiFormatArgs,
    caller: &str,
) -> &'a TesseraFfiFormatArgs {
    assert!(!ptr.is_null(), "called `{}` with `ptr` as null pointer", caller);
    &*ptr
}

/// Creates a new, empty argument collector.
///
/// The returned handle must be released with `tessera_format_args_free`.
#[no_mangle]
pub extern "C" fn tessera_format_args_new() -> *mut TesseraFfiFormatArgs {
    Box::into_raw(Box::default())
}

/// Creates a new, empty argument collector with room for `capacity` arguments.
///
/// The returned handle must be released with `tessera_format_args_free`.
#[no_mangle]
pub extern "C" fn tessera_format_args_with_capacity(
    capacity: usize,
) -> *mut TesseraFfiFormatArgs {
    Box::into_raw(Box::new(TesseraFfiFormatArgs::with_capacity(capacity)))
}

/// Frees a collector and every string it owns.
///
/// # Safety
///
/// The caller must ensure that `ptr` is either null or a valid pointer
/// returned by one of the `tessera_format_args_new*` functions, and that it
/// is not used afterwards.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_free(ptr: *mut TesseraFfiFormatArgs) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}

/// Appends a signed 64-bit integer.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_push_i64(
    ptr: *mut TesseraFfiFormatArgs,
    value: i64,
) {
    handle_mut(ptr, "tessera_format_args_push_i64").args.push(value);
}

/// Appends an unsigned 64-bit integer.
///
/// Values above `INT64_MAX` are logged and stored narrowed to `int64_t`.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_push_u64(
    ptr: *mut TesseraFfiFormatArgs,
    value: u64,
) {
    handle_mut(ptr, "tessera_format_args_push_u64").args.push(value);
}

/// Appends a double.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_push_f64(
    ptr: *mut TesseraFfiFormatArgs,
    value: f64,
) {
    handle_mut(ptr, "tessera_format_args_push_f64").args.push(value);
}

/// Appends a boolean.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_push_bool(
    ptr: *mut TesseraFfiFormatArgs,
    value: bool,
) {
    handle_mut(ptr, "tessera_format_args_push_bool").args.push(value);
}

/// Appends a copy of the NUL-terminated string `text`.
///
/// A null `text` is stored as an empty string.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`,
/// and that `text` is null or points to a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_push_str(
    ptr: *mut TesseraFfiFormatArgs,
    text: *const c_char,
) {
    let handle = handle_mut(ptr, "tessera_format_args_push_str");
    if text.is_null() {
        tracing::warn!("`tessera_format_args_push_str` called with null text; storing empty text");
        handle.push_text(c"");
        return;
    }
    handle.push_text(CStr::from_ptr(text));
}

/// Returns the number of collected arguments.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_len(ptr: *const TesseraFfiFormatArgs) -> usize {
    handle_ref(ptr, "tessera_format_args_len").args.len()
}

/// Returns a pointer to the first of `tessera_format_args_len` contiguous
/// arguments, in insertion order.
///
/// The pointer stays valid until the next push into, or the release of, the
/// handle.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_data(
    ptr: *const TesseraFfiFormatArgs,
) -> *const FfiFormattable {
    handle_ref(ptr, "tessera_format_args_data").args.as_ptr()
}

/// Returns a copy of the argument at `index`.
///
/// # Panics
///
/// This function aborts the process if `ptr` is null or if `index` is out of bounds.
///
/// # Safety
///
/// The caller must ensure that `ptr` is a valid pointer to a `TesseraFfiFormatArgs`.
#[no_mangle]
pub unsafe extern "C" fn tessera_format_args_get(
    ptr: *const TesseraFfiFormatArgs,
    index: usize,
) -> FfiFormattable {
    handle_ref(ptr, "tessera_format_args_get").get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    unsafe fn text_at(value: &FfiFormattable) -> &str {
        assert_eq!(value.kind, FormattableKind::Text);
        let s = CStr::from_ptr(value.text).to_str().unwrap();
        assert_eq!(s.len(), value.text_len);
        s
    }

    #[test]
    fn test_data_mirrors_insertion_order() {
        unsafe {
            let handle = tessera_format_args_new();
            tessera_format_args_push_str(handle, c"Joe".as_ptr());
            tessera_format_args_push_u64(handle, 96);
            tessera_format_args_push_f64(handle, 0.75);
            tessera_format_args_push_bool(handle, true);

            let len = tessera_format_args_len(handle);
            assert_eq!(len, 4);
            let data = std::slice::from_raw_parts(tessera_format_args_data(handle), len);

            assert_eq!(text_at(&data[0]), "Joe");
            assert_eq!(data[1].kind, FormattableKind::Int64);
            assert_eq!(data[1].int64, 96);
            assert_eq!(data[2].kind, FormattableKind::Double);
            assert_eq!(data[2].double, 0.75);
            assert_eq!(data[3].kind, FormattableKind::Bool);
            assert!(data[3].boolean);

            tessera_format_args_free(handle);
        }
    }

    #[test]
    fn test_strings_survive_storage_growth() {
        unsafe {
            let handle = tessera_format_args_with_capacity(1);
            let words = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];
            for w in words {
                let c = CString::new(w).unwrap();
                tessera_format_args_push_str(handle, c.as_ptr());
            }
            let len = tessera_format_args_len(handle);
            let data = std::slice::from_raw_parts(tessera_format_args_data(handle), len);
            for (value, expected) in data.iter().zip(words) {
                assert_eq!(text_at(value), expected);
            }
            tessera_format_args_free(handle);
        }
    }

    #[test]
    fn test_u64_beyond_i64_is_narrowed() {
        unsafe {
            let handle = tessera_format_args_new();
            tessera_format_args_push_u64(handle, (1u64 << 63) + 5);
            tessera_format_args_push_i64(handle, -3);
            assert_eq!(tessera_format_args_get(handle, 0).int64, i64::MIN + 5);
            assert_eq!(tessera_format_args_get(handle, 1).int64, -3);
            tessera_format_args_free(handle);
        }
    }

    #[test]
    fn test_null_text_is_empty_string() {
        unsafe {
            let handle = tessera_format_args_new();
            tessera_format_args_push_str(handle, std::ptr::null());
            let value = tessera_format_args_get(handle, 0);
            assert_eq!(text_at(&value), "");
            assert_eq!((*handle).args().len(), 1);
            tessera_format_args_free(handle);
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { tessera_format_args_free(null_mut()) };
    }

    // The exported functions cannot unwind, so the fail-fast checks are
    // exercised through the Rust helpers they delegate to.

    #[test]
    #[should_panic(expected = "called `tessera_format_args_len` with `ptr` as null pointer")]
    fn test_null_handle_ref_panics() {
        unsafe {
            handle_ref(std::ptr::null(), "tessera_format_args_len");
        }
    }

    #[test]
    #[should_panic(expected = "called `tessera_format_args_push_i64` with `ptr` as null pointer")]
    fn test_null_handle_mut_panics() {
        unsafe {
            handle_mut(null_mut(), "tessera_format_args_push_i64");
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds: the len is 1 but the index is 1")]
    fn test_get_out_of_bounds_panics() {
        let mut handle = TesseraFfiFormatArgs::default();
        handle.push_text(c"only");
        let _ = handle.get(1);
    }

    #[test]
    fn test_get_in_bounds() {
        let mut handle = TesseraFfiFormatArgs::with_capacity(2);
        handle.args.push(7i64);
        assert_eq!(handle.get(0).kind, FormattableKind::Int64);
        assert_eq!(handle.get(0).int64, 7);
    }
}
