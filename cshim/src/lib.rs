// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Hosted-C surface for a freestanding kernel.
//!
//! Freestanding kernels don't have the C library, but a TLS library
//! compiled against a hosted environment still references libc symbols:
//! the heap family, the string/memory family, wall-clock time, and
//! formatted output. This crate provides those symbols, backed by the
//! kernel's own primitives — its `#[global_allocator]` for the heap and a
//! registered wall-clock source for time. The formatted-output entry
//! points deliberately produce no text at all; see the `printf` module
//! for the contract.
//!
//! Functions are exported with `extern "C"` and do not need to be
//! directly referenced. The symbols are only exported on freestanding
//! targets to avoid conflicting with the malloc/free/etc. provided by the
//! C stdlib in other environments (such as `cargo test` on the host). To
//! ensure this crate is linked use `extern crate`, for example
//! `extern crate cshim as _;`[1]
//!
//! [1]: https://doc.rust-lang.org/reference/items/extern-crates.html#extern-crate-declarations

// Turn off std, except when running tests.
#![cfg_attr(not(test), no_std)]
#![feature(c_variadic)]

extern crate alloc;

pub mod malloc;
pub mod printf;
pub mod string;
pub mod stubs;
pub mod time;
pub mod types;

pub use time::{set_clock_source, ClockFn};
