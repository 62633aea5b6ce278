// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::{CoverAlgebraicDisplay, CoverMatrixDisplay},
    grid::Grid,
    implicant::Implicant,
};

/// A sum of products: the minimized form of one output.
///
/// An empty cover is the constant false function.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    variables: usize,
    terms: Vec<Implicant>,
}

impl Cover {
    pub fn new(variables: usize, terms: impl IntoIterator<Item = Implicant>) -> Self {
        Self {
            variables,
            terms: terms.into_iter().collect(),
        }
    }

    #[inline]
    pub fn terms(&self) -> &[Implicant] {
        &self.terms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true for the constant false function.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Returns true if some term has no literals, making this the constant true function.
    pub fn is_tautology(&self) -> bool {
        self.terms
            .iter()
            .any(|term| term.relevant_input_count() == 0)
    }

    /// The total number of literals over all terms.
    pub fn literal_cost(&self) -> usize {
        self.terms.iter().map(Implicant::relevant_input_count).sum()
    }

    pub fn evaluate(&self, values: &[bool]) -> bool {
        self.terms.iter().any(|term| term.evaluate(values))
    }

    /// Checks this cover against every defined cell of `grid`.
    ///
    /// Returns the first assignment (in row-major cell order) where the cover disagrees with a
    /// true or false cell. Don't-care cells accept either value.
    pub fn check_implements(&self, grid: &Grid) -> Result<(), Vec<bool>> {
        for (column, row) in grid.cells() {
            let expected = match grid.value_at(column, row).to_bool() {
                Some(expected) => expected,
                None => continue,
            };
            let values = grid.assignment_at(column, row).unwrap_or_default();
            if self.evaluate(&values) != expected {
                return Err(values);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn matrix_display(&self) -> CoverMatrixDisplay<'_> {
        CoverMatrixDisplay::new(self)
    }

    #[inline]
    pub fn algebraic_display(&self) -> CoverAlgebraicDisplay<'_> {
        CoverAlgebraicDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truth_table::TruthTable;

    fn implicant(numeric: &[u8]) -> Implicant {
        Implicant::from_numeric(numeric, []).unwrap()
    }

    #[test]
    fn test_evaluate_and_cost() {
        let cover = Cover::new(3, [implicant(&[1, 2, 0]), implicant(&[0, 1, 1])]);
        assert_eq!(cover.len(), 2);
        assert_eq!(cover.literal_cost(), 5);
        assert!(!cover.is_tautology());
        assert!(cover.evaluate(&[true, true, false]));
        assert!(cover.evaluate(&[false, true, true]));
        assert!(!cover.evaluate(&[false, false, true]));

        let empty = Cover::new(3, []);
        assert!(empty.is_empty());
        assert!(!empty.evaluate(&[true, true, true]));

        let always = Cover::new(2, [implicant(&[2, 2])]);
        assert!(always.is_tautology());
        assert_eq!(always.literal_cost(), 0);
    }

    #[test]
    fn test_check_implements() {
        // XOR with 11 left undefined.
        let table = TruthTable::from_numeric([[0, 0, 0], [0, 1, 1], [1, 0, 1]], 2, 1).unwrap();
        let grid = Grid::new(&table, 0);

        let or = Cover::new(2, [implicant(&[1, 2]), implicant(&[2, 1])]);
        assert_eq!(or.check_implements(&grid), Ok(()));

        let only_a = Cover::new(2, [implicant(&[1, 2])]);
        assert_eq!(only_a.check_implements(&grid), Err(vec![false, true]));
    }
}
