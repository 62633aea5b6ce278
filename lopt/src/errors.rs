// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// A numeric ternary value outside of `0`, `1` and `2`.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid ternary value {0} (expected 0, 1 or 2)")]
pub struct InvalidTernaryNumeric(pub u8);

/// Errors returned while building a [`TruthTable`](crate::truth_table::TruthTable).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TruthTableError {
    /// The table has neither inputs nor outputs.
    #[error("truth table has no columns")]
    EmptyWidth,

    /// The flat data does not split into whole rows.
    #[error("table data has {len} values, which is not a multiple of the row width {width}")]
    IncompleteRow { len: usize, width: usize },

    /// The grid for this many inputs would not be addressable.
    #[error("{inputs} inputs exceed the supported maximum of {max}")]
    TooManyInputs { inputs: usize, max: usize },

    /// A numeric cell could not be converted.
    #[error("row {row}: {source}")]
    InvalidNumeric {
        row: usize,
        #[source]
        source: InvalidTernaryNumeric,
    },
}
