// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Wall-clock time for certificate validation.
//!
//! The kernel owns the actual time hardware and registers a wall-clock
//! source here during boot. The C-facing `time`/`gmtime`/`localtime`
//! entry points read that source and convert with the `chrono` calendar.
//! The kernel keeps no timezone database, so local time is UTC.

use crate::types::{time_t, tm};
use chrono::{DateTime, Datelike, Timelike};
use core::cell::UnsafeCell;
use core::mem;
use core::ptr;
use core::sync::atomic::{AtomicBool, AtomicPtr, Ordering};
use log::{info, warn};

/// Kernel wall-clock source: seconds since the Unix epoch.
pub type ClockFn = fn() -> time_t;

/// Registered wall-clock source. An `AtomicPtr` so that registration is
/// a single store with no locking; null means no source yet.
static CLOCK: AtomicPtr<()> = AtomicPtr::new(ptr::null_mut());

static MISSING_CLOCK_WARNED: AtomicBool = AtomicBool::new(false);

/// Register the kernel's wall-clock source.
///
/// Until a source is registered every time query reports the epoch, so
/// the kernel should call this before bringing up TLS.
pub fn set_clock_source(clock: ClockFn) {
    CLOCK.store(clock as usize as *mut (), Ordering::Relaxed);
    info!("wall-clock source registered");
}

/// Current Unix time from the registered source, or 0 if none is
/// registered yet.
pub fn now() -> time_t {
    let f = CLOCK.load(Ordering::Relaxed);
    if f.is_null() {
        if !MISSING_CLOCK_WARNED.swap(true, Ordering::Relaxed) {
            warn!("time requested before a wall-clock source was registered");
        }
        return 0;
    }
    // SAFETY: the pointer was stored from a `ClockFn` in
    // `set_clock_source` and is never stored from anywhere else.
    let f: ClockFn = unsafe { mem::transmute(f) };
    f()
}

/// Convert `secs` (Unix time) to broken-down UTC in `out`.
///
/// Returns `out`, or null if the timestamp has no calendar
/// representation.
///
/// # Safety
///
/// `out` must be valid for writing a `tm`.
pub unsafe fn fill_broken_down_utc(secs: time_t, out: *mut tm) -> *mut tm {
    let utc = match DateTime::from_timestamp(secs, 0) {
        Some(utc) => utc,
        None => return ptr::null_mut(),
    };
    // tm counts years from 1900.
    let year = match utc.year().checked_sub(1900) {
        Some(year) => year,
        None => return ptr::null_mut(),
    };

    let out_tm = &mut *out;
    out_tm.tm_sec = utc.second() as i32;
    out_tm.tm_min = utc.minute() as i32;
    out_tm.tm_hour = utc.hour() as i32;
    out_tm.tm_mday = utc.day() as i32;
    out_tm.tm_mon = utc.month0() as i32;
    out_tm.tm_year = year;
    out_tm.tm_wday = utc.weekday().num_days_from_sunday() as i32;
    out_tm.tm_yday = utc.ordinal0() as i32;
    out_tm.tm_isdst = 0;

    out
}

/// Static storage for the pointers returned by `gmtime` and `localtime`.
/// Those calls are non-reentrant by C contract; callers needing
/// reentrancy use the `_r` platform hook instead.
struct TmSlot(UnsafeCell<tm>);

// SAFETY: concurrent callers see exactly the aliasing the C contract for
// these functions already permits (the result is only valid until the
// next call).
unsafe impl Sync for TmSlot {}

static GMTIME_SLOT: TmSlot = TmSlot(UnsafeCell::new(tm::zeroed()));
static LOCALTIME_SLOT: TmSlot = TmSlot(UnsafeCell::new(tm::zeroed()));

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn time(t: *mut time_t) -> time_t {
    let secs = now();
    if !t.is_null() {
        *t = secs;
    }
    secs
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn gmtime(timer: *const time_t) -> *mut tm {
    if timer.is_null() {
        return ptr::null_mut();
    }
    fill_broken_down_utc(*timer, GMTIME_SLOT.0.get())
}

#[cfg_attr(target_os = "none", no_mangle)]
pub unsafe extern "C" fn localtime(timer: *const time_t) -> *mut tm {
    if timer.is_null() {
        return ptr::null_mut();
    }
    // No timezone data in the kernel; local time is UTC.
    fill_broken_down_utc(*timer, LOCALTIME_SLOT.0.get())
}
