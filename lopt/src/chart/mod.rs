// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

mod caches;
mod chart_impl;
mod petrick;

pub use chart_impl::*;
