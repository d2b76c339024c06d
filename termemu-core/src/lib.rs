// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)] // Allow multiple versions from transitive dependencies
#![allow(clippy::cargo_common_metadata)] // Metadata is inherited from workspace
#![allow(clippy::range_plus_one)]
// #![warn(missing_docs)]

pub mod ansi;
pub mod ansi_components;
pub mod atascii;
pub mod avatar;
pub mod debug_mode;
pub mod dispatch;
pub mod error;
pub mod keyboard;
pub mod petscii;
pub mod terminal;
pub mod tty;
pub mod vt100;
pub mod vt52;

#[macro_use]
extern crate tracing;
