// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Time hooks.

use core::ptr;
use cshim::time::{fill_broken_down_utc, now};
use cshim::types::{time_t, tm};

/// Platform time hook. Reads the wall-clock source the kernel registered
/// with `cshim::set_clock_source`.
#[no_mangle]
unsafe extern "C" fn mbedtls_time(tp: *mut time_t) -> time_t {
    let secs = now();
    if !tp.is_null() {
        *tp = secs;
    }
    secs
}

/// Reentrant conversion to broken-down UTC, into a caller-supplied `tm`.
#[no_mangle]
unsafe extern "C" fn mbedtls_platform_gmtime_r(
    tt: *const time_t,
    tp: *mut tm,
) -> *mut tm {
    if tt.is_null() || tp.is_null() {
        return ptr::null_mut();
    }
    fill_broken_down_utc(*tt, tp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_clock() -> time_t {
        1_000_000_000
    }

    // A single test covers both sides of registration, since the clock
    // source is process-global.
    #[test]
    fn test_time_hook() {
        unsafe {
            assert_eq!(mbedtls_time(ptr::null_mut()), 0);
        }

        cshim::set_clock_source(fixed_clock);

        let mut out: time_t = 0;
        unsafe {
            assert_eq!(mbedtls_time(&mut out), 1_000_000_000);
        }
        assert_eq!(out, 1_000_000_000);
    }

    #[test]
    fn test_gmtime_r() {
        let secs: time_t = 1_000_000_000;
        let mut out = tm::zeroed();
        unsafe {
            let ret = mbedtls_platform_gmtime_r(&secs, &mut out);
            assert_eq!(ret, &mut out as *mut tm);
        }
        // 2001-09-09 01:46:40 UTC.
        assert_eq!(out.tm_year, 101);
        assert_eq!(out.tm_mon, 8);
        assert_eq!(out.tm_mday, 9);
        assert_eq!(out.tm_hour, 1);
        assert_eq!(out.tm_min, 46);
        assert_eq!(out.tm_sec, 40);
    }

    #[test]
    fn test_gmtime_r_rejects_null_and_out_of_range() {
        let secs: time_t = 0;
        let mut out = tm::zeroed();
        unsafe {
            assert!(mbedtls_platform_gmtime_r(ptr::null(), &mut out).is_null());
            assert!(mbedtls_platform_gmtime_r(&secs, ptr::null_mut()).is_null());

            let far = time_t::MAX;
            assert!(mbedtls_platform_gmtime_r(&far, &mut out).is_null());
        }
    }
}
