// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Do-nothing formatted output.
//!
//! The kernel has no console the TLS library may write to, so the
//! `printf` family is stubbed out: no text is ever produced and the
//! format string and arguments are never read. The one behavioral
//! obligation is buffer safety: a caller that hands in a buffer gets a
//! valid empty string back, and a caller that hands in no usable buffer
//! (null pointer, or zero capacity) gets no write at all. Every entry
//! point reports that zero characters would have been written, which
//! also keeps `ret < capacity` truncation checks truthful.

use core::ffi::{c_char, c_int, VaList};

/// Number of characters every stub reports as written.
pub const NOTHING_WRITTEN: c_int = 0;

/// Shared body of the `snprintf`-style stubs: store an empty string in
/// the caller's buffer when there is one.
///
/// A zero `n` means the buffer may not be dereferenced at all — a
/// zero-capacity buffer is allowed to be a dangling or one-past-the-end
/// pointer. A null `s` is never written through regardless of `n`.
///
/// # Safety
///
/// If `s` is non-null and `n` is non-zero, `s` must be valid for writing
/// one byte.
pub unsafe fn store_empty_string(s: *mut c_char, n: usize) -> c_int {
    if !s.is_null() && n > 0 {
        *s = 0;
    }
    NOTHING_WRITTEN
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn printf(_format: *const c_char, mut _args: ...) -> c_int {
    NOTHING_WRITTEN
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn snprintf(
    s: *mut c_char,
    n: usize,
    _format: *const c_char,
    mut _args: ...
) -> c_int {
    store_empty_string(s, n)
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn vsnprintf(
    s: *mut c_char,
    n: usize,
    _format: *const c_char,
    _args: VaList,
) -> c_int {
    store_empty_string(s, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr;
    use std::ffi::CString;

    unsafe extern "C" fn call_vsnprintf(
        s: *mut c_char,
        n: usize,
        format: *const c_char,
        args: ...
    ) -> c_int {
        vsnprintf(s, n, format, args)
    }

    #[test]
    fn test_printf_writes_nothing_and_returns_zero() {
        let fmt = CString::new("%s %d").unwrap();
        unsafe {
            assert_eq!(printf(fmt.as_ptr()), 0);
            assert_eq!(printf(fmt.as_ptr(), 1, 2, 3), 0);
            assert_eq!(printf(ptr::null()), 0);
        }
    }

    #[test]
    fn test_snprintf_stores_empty_string() {
        let fmt = CString::new("%d").unwrap();
        let mut buf = [0x41 as c_char; 10];
        unsafe {
            assert_eq!(snprintf(buf.as_mut_ptr(), 10, fmt.as_ptr(), 42), 0);
        }
        assert_eq!(buf[0], 0);
        // Only the first byte is written.
        assert_eq!(&buf[1..], [0x41 as c_char; 9]);
    }

    #[test]
    fn test_snprintf_null_buffer() {
        let fmt = CString::new("ignored").unwrap();
        unsafe {
            assert_eq!(snprintf(ptr::null_mut(), 10, fmt.as_ptr()), 0);
        }
    }

    #[test]
    fn test_snprintf_zero_capacity() {
        let fmt = CString::new("ignored").unwrap();
        let mut buf = [0x41 as c_char; 4];
        unsafe {
            assert_eq!(snprintf(buf.as_mut_ptr(), 0, fmt.as_ptr()), 0);
        }
        assert_eq!(buf, [0x41 as c_char; 4]);
    }

    #[test]
    fn test_snprintf_zero_capacity_one_past_end() {
        let fmt = CString::new("ignored").unwrap();
        let mut buf = [0u8; 4];
        // A one-past-the-end pointer is a legal zero-capacity buffer and
        // must not be dereferenced.
        let end = unsafe { buf.as_mut_ptr().add(buf.len()) };
        unsafe {
            assert_eq!(snprintf(end.cast(), 0, fmt.as_ptr()), 0);
        }
    }

    #[test]
    fn test_vsnprintf_matches_snprintf() {
        let fmt = CString::new("%d %s").unwrap();
        let mut buf = [0x41 as c_char; 5];
        unsafe {
            assert_eq!(
                call_vsnprintf(buf.as_mut_ptr(), 5, fmt.as_ptr(), 7, 8, 9),
                0
            );
        }
        assert_eq!(buf[0], 0);
        assert_eq!(&buf[1..], [0x41 as c_char; 4]);

        unsafe {
            assert_eq!(call_vsnprintf(ptr::null_mut(), 5, fmt.as_ptr()), 0);
        }
    }
}
