// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::{InvalidTernaryNumeric, TruthTableError},
    grid::Grid,
    ternary::Ternary,
};

/// The largest supported number of inputs. The completed grid has `2^inputs` cells.
pub const MAX_INPUTS: usize = 20;

/// A truth table with ternary inputs and outputs.
///
/// Rows are stored flat, each `inputs + outputs` values wide. Input combinations that are
/// missing from the table are undefined until a [`Grid`] completes them as don't-care.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    inputs: usize,
    outputs: usize,
    data: Vec<Ternary>,
}

impl TruthTable {
    pub fn new(data: Vec<Ternary>, inputs: usize, outputs: usize) -> Result<Self, TruthTableError> {
        let width = inputs + outputs;
        if width == 0 {
            return Err(TruthTableError::EmptyWidth);
        }
        if inputs > MAX_INPUTS {
            return Err(TruthTableError::TooManyInputs {
                inputs,
                max: MAX_INPUTS,
            });
        }
        if data.len() % width != 0 {
            return Err(TruthTableError::IncompleteRow {
                len: data.len(),
                width,
            });
        }
        Ok(Self {
            inputs,
            outputs,
            data,
        })
    }

    /// Builds a table out of individual rows, checking that every row has the right width.
    pub fn from_rows<R: AsRef<[Ternary]>>(
        rows: impl IntoIterator<Item = R>,
        inputs: usize,
        outputs: usize,
    ) -> Result<Self, TruthTableError> {
        let width = inputs + outputs;
        let mut data = Vec::new();
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(TruthTableError::IncompleteRow {
                    len: row.len(),
                    width,
                });
            }
            data.extend_from_slice(row);
        }
        Self::new(data, inputs, outputs)
    }

    /// Builds a table out of rows in numeric notation (`0`, `1`, `2` for don't-care).
    pub fn from_numeric<R: AsRef<[u8]>>(
        rows: impl IntoIterator<Item = R>,
        inputs: usize,
        outputs: usize,
    ) -> Result<Self, TruthTableError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row_ix, row)| {
                row.as_ref()
                    .iter()
                    .map(|&value| Ternary::from_numeric(value))
                    .collect::<Result<Vec<_>, InvalidTernaryNumeric>>()
                    .map_err(|source| TruthTableError::InvalidNumeric {
                        row: row_ix,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows, inputs, outputs)
    }

    /// Samples every cell of `grid` into a fully enumerated single-output table, in row-major
    /// cell order.
    pub fn from_grid(grid: &Grid) -> Self {
        let inputs = grid.variable_count();
        let mut data = Vec::with_capacity(grid.cell_count() * (inputs + 1));
        for (column, row) in grid.cells() {
            data.extend((0..inputs).map(|var| grid.input_at(column, row, var)));
            data.push(grid.value_at(column, row));
        }
        Self {
            inputs,
            outputs: 1,
            data,
        }
    }

    /// Returns the input value at the given row, or don't-care if out of range.
    pub fn input(&self, state: usize, input: usize) -> Ternary {
        if state >= self.state_count() || input >= self.inputs {
            return Ternary::DontCare;
        }
        self.data[state * self.width() + input]
    }

    /// Returns the output value at the given row, or don't-care if out of range.
    pub fn output(&self, state: usize, output: usize) -> Ternary {
        if state >= self.state_count() || output >= self.outputs {
            return Ternary::DontCare;
        }
        self.data[state * self.width() + self.inputs + output]
    }

    /// Returns the index of the first row whose inputs match `assignment`.
    ///
    /// Don't-care inputs in a row match any value. If no row matches, returns
    /// [`state_count`](Self::state_count).
    pub fn find(&self, assignment: &[Ternary]) -> usize {
        (0..self.state_count())
            .find(|&state| {
                (0..self.inputs).all(|input| {
                    let value = self.input(state, input);
                    value.is_dont_care()
                        || assignment.get(input).copied().unwrap_or_default() == value
                })
            })
            .unwrap_or_else(|| self.state_count())
    }

    /// Iterates over the rows of this table.
    pub fn rows(&self) -> impl Iterator<Item = &[Ternary]> + '_ {
        self.data.chunks(self.width())
    }

    #[inline]
    pub fn input_count(&self) -> usize {
        self.inputs
    }

    #[inline]
    pub fn output_count(&self) -> usize {
        self.outputs
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.inputs + self.outputs
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.data.len() / self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            TruthTable::new(vec![], 0, 0),
            Err(TruthTableError::EmptyWidth)
        );
        assert_eq!(
            TruthTable::new(vec![Ternary::True; 5], 2, 1),
            Err(TruthTableError::IncompleteRow { len: 5, width: 3 })
        );
        assert_eq!(
            TruthTable::new(vec![], MAX_INPUTS + 1, 1),
            Err(TruthTableError::TooManyInputs {
                inputs: MAX_INPUTS + 1,
                max: MAX_INPUTS
            })
        );
        assert!(matches!(
            TruthTable::from_numeric([[0, 1, 3]], 2, 1),
            Err(TruthTableError::InvalidNumeric {
                row: 0,
                source: InvalidTernaryNumeric(3)
            })
        ));
        assert_eq!(
            TruthTable::from_numeric([vec![0, 1, 1], vec![0, 1]], 2, 1),
            Err(TruthTableError::IncompleteRow { len: 2, width: 3 })
        );
    }

    #[test]
    fn test_accessors() {
        let table = TruthTable::from_numeric([[0, 0, 1, 0], [1, 2, 0, 2]], 2, 2).unwrap();
        assert_eq!(table.input_count(), 2);
        assert_eq!(table.output_count(), 2);
        assert_eq!(table.width(), 4);
        assert_eq!(table.state_count(), 2);

        assert_eq!(table.input(1, 0), Ternary::True);
        assert_eq!(table.input(1, 1), Ternary::DontCare);
        assert_eq!(table.output(0, 0), Ternary::True);
        assert_eq!(table.output(0, 1), Ternary::False);

        // Out of range lookups are don't-care rather than failures.
        assert_eq!(table.input(2, 0), Ternary::DontCare);
        assert_eq!(table.input(0, 2), Ternary::DontCare);
        assert_eq!(table.output(0, 2), Ternary::DontCare);
        assert_eq!(table.output(7, 0), Ternary::DontCare);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Ternary::True);
    }

    #[test]
    fn test_find() {
        let table =
            TruthTable::from_numeric([[0, 0, 1], [1, 2, 0], [1, 1, 1], [0, 1, 0]], 2, 1).unwrap();
        let t = Ternary::True;
        let f = Ternary::False;

        assert_eq!(table.find(&[f, f]), 0);
        assert_eq!(table.find(&[f, t]), 3);
        // The don't-care row shadows the later fully defined one.
        assert_eq!(table.find(&[t, f]), 1);
        assert_eq!(table.find(&[t, t]), 1);

        let sparse = TruthTable::from_numeric([[0, 0, 1]], 2, 1).unwrap();
        assert_eq!(sparse.find(&[t, t]), sparse.state_count());
    }
}
