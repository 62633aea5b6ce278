// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixtures for checking truth-table minimization end to end.

mod all;
mod known;
mod value_generator;

pub use all::*;
pub use known::*;
pub use value_generator::*;
