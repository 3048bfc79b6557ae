// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Do-nothing formatted-output hooks.
//!
//! The TLS library calls these to emit diagnostic and error text. The
//! kernel discards all of it; see `cshim::printf` for the buffer-safety
//! contract these share with the unprefixed entry points.

use core::ffi::{c_char, c_int, VaList};
use cshim::printf::{store_empty_string, NOTHING_WRITTEN};

#[no_mangle]
unsafe extern "C" fn mbedtls_printf(_fmt: *const c_char, mut _args: ...) -> c_int {
    NOTHING_WRITTEN
}

#[no_mangle]
unsafe extern "C" fn mbedtls_snprintf(
    s: *mut c_char,
    n: usize,
    _fmt: *const c_char,
    mut _args: ...
) -> c_int {
    store_empty_string(s, n)
}

#[no_mangle]
unsafe extern "C" fn mbedtls_vsnprintf(
    s: *mut c_char,
    n: usize,
    _fmt: *const c_char,
    _ap: VaList,
) -> c_int {
    store_empty_string(s, n)
}
