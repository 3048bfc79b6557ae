// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Heap hooks.

use core::ffi::c_void;

// The C heap entry points the hooks delegate to. On the freestanding
// target these are defined by `cshim`; under `cargo test` the host C
// library provides them.
extern "C" {
    fn calloc(n: usize, size: usize) -> *mut c_void;
    fn free(ptr: *mut c_void);
}

/// Allocation hook used for every heap allocation the TLS library makes.
/// Zero-initialized, per the calloc contract the library relies on.
#[no_mangle]
unsafe extern "C" fn mbedtls_platform_calloc(n: usize, size: usize) -> *mut c_void {
    calloc(n, size)
}

/// Release hook for memory from `mbedtls_platform_calloc`.
#[no_mangle]
unsafe extern "C" fn mbedtls_platform_free(ptr: *mut c_void) {
    free(ptr);
}
