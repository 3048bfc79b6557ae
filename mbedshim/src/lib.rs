// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! mbedtls platform hooks for a freestanding kernel.
//!
//! mbedtls built for a platform without a C library routes its heap,
//! diagnostic output, time, and entropy needs through `mbedtls_*` hook
//! symbols. This crate provides those symbols: the heap hooks delegate to
//! the C heap entry points (defined by the `cshim` crate on the
//! freestanding target, and by the host C library under `cargo test`),
//! the formatted-output hooks are do-nothing stubs, and the time and
//! entropy hooks read the sources the kernel registers.
//!
//! The hook functions are exported with `extern "C"` and do not need to
//! be directly referenced. To ensure this crate is linked use
//! `extern crate`, for example `extern crate mbedshim as _;`

// Turn off std, except when running tests.
#![cfg_attr(not(test), no_std)]
#![feature(c_variadic)]

mod entropy;
mod platform;
mod printf;
mod time;

pub use entropy::{set_entropy_source, EntropyFn};
