// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion of a truth table onto a Karnaugh-style grid.
//!
//! Variables are laid out alternately along the column and row axes. Along each axis the
//! variables nest outwards as a binary-reflected Gray code, so cells that are adjacent
//! (including wraparound) differ in exactly one variable.

use crate::{ternary::Ternary, truth_table::TruthTable};
use log::debug;

/// A single output of a [`TruthTable`], completed over the whole input space.
///
/// Input combinations that have no matching row are filled in as don't-care.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    variables: usize,
    output: usize,
    width: usize,
    height: usize,
    data: Vec<Ternary>,
}

impl Grid {
    pub fn new(table: &TruthTable, output: usize) -> Self {
        let variables = table.input_count();
        let cell_count = 1_usize << variables;
        let width = 1_usize << ((variables + 1) / 2);
        let height = cell_count / width;

        let mut data = vec![Ternary::DontCare; cell_count];
        let mut assignment = vec![Ternary::DontCare; variables];
        for row in 0..height {
            for column in 0..width {
                for (var, value) in assignment.iter_mut().enumerate() {
                    *value = cell_variable(var, column, row).into();
                }
                let state = table.find(&assignment);
                if state != table.state_count() {
                    data[row * width + column] = table.output(state, output);
                }
            }
        }

        debug!(
            "completed output {} onto a {}x{} grid ({} defined rows)",
            output,
            width,
            height,
            table.state_count()
        );

        Self {
            variables,
            output,
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn map_width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn map_height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// The output column this grid was completed from.
    #[inline]
    pub fn output(&self) -> usize {
        self.output
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the function value at a cell, or don't-care outside the grid.
    pub fn value_at(&self, column: usize, row: usize) -> Ternary {
        if column >= self.width || row >= self.height {
            return Ternary::DontCare;
        }
        self.data[row * self.width + column]
    }

    /// Returns the value of input variable `var` at a cell, or don't-care outside the grid.
    pub fn input_at(&self, column: usize, row: usize, var: usize) -> Ternary {
        if column >= self.width || row >= self.height || var >= self.variables {
            return Ternary::DontCare;
        }
        cell_variable(var, column, row).into()
    }

    /// Returns the full input assignment of a cell, or `None` outside the grid.
    pub fn assignment_at(&self, column: usize, row: usize) -> Option<Vec<bool>> {
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(
            (0..self.variables)
                .map(|var| cell_variable(var, column, row))
                .collect(),
        )
    }

    /// Returns the minterm id of a cell.
    #[inline]
    pub fn cell_id(&self, column: usize, row: usize) -> usize {
        row * self.width + column
    }

    /// Returns the `(column, row)` of a minterm id, or `None` if it is out of range.
    pub fn cell_position(&self, id: usize) -> Option<(usize, usize)> {
        (id < self.data.len()).then(|| (id % self.width, id / self.width))
    }

    /// Iterates over all `(column, row)` positions in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.data.len()).map(move |id| (id % width, id / width))
    }
}

/// Returns the value of variable `var` at a grid position.
///
/// Even variables live on the column axis and odd ones on the row axis. Variable pair `k`
/// alternates in segments of `2^(k + 1)` cells, shifted by half a segment.
fn cell_variable(var: usize, column: usize, row: usize) -> bool {
    let pos = if var % 2 == 0 { column } else { row };
    let length = 1_usize << (var / 2 + 1);
    let shifted = (pos + length / 2) % (length * 2);
    shifted >= length
}
