// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! C scalar and calendar types the TLS library's headers expect from a
//! hosted environment. The aliases use `cty` names, matching the prefix
//! the generated C bindings use.

#![allow(non_camel_case_types)]

/// Seconds since the Unix epoch (C `long long`).
pub type time_t = cty::c_longlong;

/// Processor tick count (C `long`). Declared for header parity only; no
/// operation in this crate produces one.
pub type clock_t = cty::c_long;

/// Broken-down calendar time, field-compatible with C `struct tm`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct tm {
    pub tm_sec: cty::c_int,
    pub tm_min: cty::c_int,
    pub tm_hour: cty::c_int,
    /// Day of the month, 1-31.
    pub tm_mday: cty::c_int,
    /// Month, 0-11.
    pub tm_mon: cty::c_int,
    /// Years since 1900.
    pub tm_year: cty::c_int,
    /// Day of the week, 0-6, Sunday is 0.
    pub tm_wday: cty::c_int,
    /// Day of the year, 0-365.
    pub tm_yday: cty::c_int,
    pub tm_isdst: cty::c_int,
}

impl tm {
    /// All-zero value used to initialize static slots before the first
    /// conversion overwrites them.
    pub const fn zeroed() -> tm {
        tm {
            tm_sec: 0,
            tm_min: 0,
            tm_hour: 0,
            tm_mday: 0,
            tm_mon: 0,
            tm_year: 0,
            tm_wday: 0,
            tm_yday: 0,
            tm_isdst: 0,
        }
    }
}
