// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-level minimization of incompletely specified truth tables.
//!
//! Each output column is completed onto a Gray-coded grid, reduced to its prime implicants
//! with the Quine–McCluskey merge, and covered with the essential primes plus the cheapest set
//! of the remaining ones.
//!
//! ```
//! use lopt::truth_table::TruthTable;
//!
//! // A + B with the 00 row omitted: the completed don't-care makes the output constant.
//! let table = TruthTable::from_numeric([[0, 1, 1], [1, 0, 1], [1, 1, 1]], 2, 1).unwrap();
//! let result = table.minimize_output(0);
//! assert_eq!(result.cover().algebraic_display().to_string(), "1");
//! ```

pub mod chart;
pub mod cover;
pub mod errors;
pub mod grid;
pub mod implicant;
pub mod merge_stack;
pub mod minimize;
pub mod ternary;
pub mod truth_table;

#[cfg(any(test, feature = "proptest1"))]
mod proptest_helpers;
