// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! C heap entry points backed by the kernel's global allocator.
//!
//! C callers don't pass a layout to `free`, so each allocation stores an
//! `AllocInfo` header immediately before the pointer handed out, and
//! `free`/`realloc` read it back to recover the original allocation.

use alloc::alloc::{
    alloc as underlying_alloc, dealloc as underlying_dealloc, Layout,
};
use core::cmp::min;
use core::ffi::c_void;
use core::mem::size_of;
use core::ptr;

/// Alignment of every C allocation. Sufficient for any scalar type the
/// TLS library places in heap memory on the supported targets.
const MALLOC_ALIGN: usize = 8;

#[derive(Copy, Clone)]
struct AllocInfo {
    /// Layout of the whole allocation (header plus payload).
    layout: Layout,

    /// Base pointer returned by the underlying allocator.
    ptr: *mut u8,
}

unsafe fn wrapped_alloc(payload: Layout) -> *mut u8 {
    // Compute a layout sufficient to store `AllocInfo` immediately
    // before the payload.
    let header = Layout::new::<AllocInfo>();
    let (to_request, offset) = match header.extend(payload) {
        Ok(extended) => extended,
        Err(_) => return ptr::null_mut(),
    };

    let base = underlying_alloc(to_request);
    if base.is_null() {
        return base;
    }

    let result = base.add(offset);
    // Write `AllocInfo` immediately prior to the pointer handed out, so
    // `free` always knows what to pass back to the underlying allocator.
    // `write_unaligned` is used, so the header slot needs no alignment of
    // its own.
    result
        .sub(size_of::<AllocInfo>())
        .cast::<AllocInfo>()
        .write_unaligned(AllocInfo {
            layout: to_request,
            ptr: base,
        });
    result
}

/// Read back the header written by `wrapped_alloc`.
unsafe fn alloc_info(ptr: *mut u8) -> AllocInfo {
    ptr.sub(size_of::<AllocInfo>())
        .cast::<AllocInfo>()
        .read_unaligned()
}

/// Payload capacity of the allocation `ptr` was handed out from.
unsafe fn payload_len(ptr: *mut u8) -> usize {
    let info = alloc_info(ptr);
    info.layout.size() - (ptr as usize - info.ptr as usize)
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn malloc(size: usize) -> *mut c_void {
    // Zero-size requests return null rather than a unique pointer.
    if size == 0 {
        return ptr::null_mut();
    }
    let layout = match Layout::from_size_align(size, MALLOC_ALIGN) {
        Ok(layout) => layout,
        Err(_) => return ptr::null_mut(),
    };
    wrapped_alloc(layout).cast()
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn calloc(n: usize, size: usize) -> *mut c_void {
    let bytes = match n.checked_mul(size) {
        Some(0) | None => return ptr::null_mut(),
        Some(bytes) => bytes,
    };
    let ptr = malloc(bytes);
    if !ptr.is_null() {
        ptr.cast::<u8>().write_bytes(0, bytes);
    }
    ptr
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn free(ptr: *mut c_void) {
    if ptr.is_null() {
        return;
    }
    let info = alloc_info(ptr.cast());
    underlying_dealloc(info.ptr, info.layout);
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn realloc(ptr: *mut c_void, size: usize) -> *mut c_void {
    if ptr.is_null() {
        return malloc(size);
    }
    if size == 0 {
        free(ptr);
        return ptr::null_mut();
    }

    let new = malloc(size);
    if new.is_null() {
        // The original allocation is left untouched on failure.
        return ptr::null_mut();
    }

    let keep = min(payload_len(ptr.cast()), size);
    ptr::copy_nonoverlapping(ptr.cast::<u8>(), new.cast::<u8>(), keep);
    free(ptr);
    new
}
