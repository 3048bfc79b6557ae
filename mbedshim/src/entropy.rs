// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Entropy hook backed by the kernel RNG.

use core::ffi::{c_int, c_void};
use core::mem;
use core::ptr;
use core::slice;
use core::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
use log::{info, warn};

/// Kernel entropy source: fills the slice with random bytes.
pub type EntropyFn = fn(&mut [u8]);

/// MBEDTLS_ERR_ENTROPY_SOURCE_FAILED.
const ERR_ENTROPY_SOURCE_FAILED: c_int = -0x003C;

/// Registered entropy source; null means no source yet.
static ENTROPY: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

static MISSING_ENTROPY_WARNED: AtomicBool = AtomicBool::new(false);

/// Register the kernel's entropy source. Must happen before the TLS
/// library seeds its DRBG.
pub fn set_entropy_source(source: EntropyFn) {
    ENTROPY.store(source as usize as *mut (), Ordering::Relaxed);
    info!("entropy source registered");
}

/// Entropy-gathering hook.
///
/// Fails the poll rather than handing back predictable bytes when the
/// kernel has not registered a source.
#[no_mangle]
unsafe extern "C" fn mbedtls_hardware_poll(
    _data: *mut c_void,
    output: *mut u8,
    len: usize,
    olen: *mut usize,
) -> c_int {
    let f = ENTROPY.load(Ordering::Relaxed);
    if f.is_null() {
        if !MISSING_ENTROPY_WARNED.swap(true, Ordering::Relaxed) {
            warn!("entropy requested before a source was registered");
        }
        return ERR_ENTROPY_SOURCE_FAILED;
    }
    if output.is_null() {
        return ERR_ENTROPY_SOURCE_FAILED;
    }

    // SAFETY: the pointer was stored from an `EntropyFn` in
    // `set_entropy_source` and is never stored from anywhere else.
    let f: EntropyFn = unsafe { mem::transmute(f) };
    f(slice::from_raw_parts_mut(output, len));

    if !olen.is_null() {
        *olen = len;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_source(out: &mut [u8]) {
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = i as u8 ^ 0x5a;
        }
    }

    // A single test covers both sides of registration, since the entropy
    // source is process-global.
    #[test]
    fn test_hardware_poll() {
        let mut buf = [0u8; 32];
        let mut olen = 0usize;

        unsafe {
            assert_eq!(
                mbedtls_hardware_poll(
                    ptr::null_mut(),
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut olen,
                ),
                ERR_ENTROPY_SOURCE_FAILED
            );
        }

        set_entropy_source(patterned_source);

        unsafe {
            assert_eq!(
                mbedtls_hardware_poll(
                    ptr::null_mut(),
                    buf.as_mut_ptr(),
                    buf.len(),
                    &mut olen,
                ),
                0
            );
        }
        assert_eq!(olen, 32);
        for (i, byte) in buf.iter().enumerate() {
            assert_eq!(*byte, i as u8 ^ 0x5a);
        }

        unsafe {
            assert_eq!(
                mbedtls_hardware_poll(ptr::null_mut(), ptr::null_mut(), 8, &mut olen),
                ERR_ENTROPY_SOURCE_FAILED
            );
        }
    }
}
