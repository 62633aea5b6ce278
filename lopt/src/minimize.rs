// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The minimization pipeline for a whole truth table.

use crate::{
    chart::PrimeChart, cover::Cover, grid::Grid, implicant::Implicant, merge_stack::MergeStack,
    truth_table::TruthTable,
};
use log::debug;

/// Every intermediate result of minimizing one output, for reporting.
#[derive(Clone, Debug)]
pub struct OutputMinimization {
    output: usize,
    grid: Grid,
    stack: MergeStack,
    chart: PrimeChart,
    essential_primes: Vec<Implicant>,
    reduced_chart: PrimeChart,
    optimal_primes: Vec<Implicant>,
    cover: Cover,
}

impl OutputMinimization {
    pub fn new(table: &TruthTable, output: usize) -> Self {
        debug!(
            "minimizing output {} of {} ({} inputs, {} rows)",
            output,
            table.output_count(),
            table.input_count(),
            table.state_count()
        );

        let grid = Grid::new(table, output);

        let mut stack = MergeStack::new(&grid);
        stack.merge_to_fixed_point();

        let chart = PrimeChart::new(&stack);
        let mut reduced_chart = chart.clone();
        let essential_primes = reduced_chart.extract_essential_primes();

        let optimal_primes = if reduced_chart.minterm_ids().is_empty() {
            Vec::new()
        } else {
            debug!(
                "{} minterms remain after essential primes, searching for a cover",
                reduced_chart.minterm_ids().len()
            );
            reduced_chart.find_optimal_primes()
        };

        let cover = Cover::new(
            grid.variable_count(),
            essential_primes.iter().chain(&optimal_primes).cloned(),
        );
        debug!(
            "output {}: {} ({} terms, {} literals)",
            output,
            cover.algebraic_display(),
            cover.len(),
            cover.literal_cost()
        );

        Self {
            output,
            grid,
            stack,
            chart,
            essential_primes,
            reduced_chart,
            optimal_primes,
            cover,
        }
    }

    #[inline]
    pub fn output(&self) -> usize {
        self.output
    }

    /// The completed grid for this output.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The merge stack at its fixed point.
    #[inline]
    pub fn stack(&self) -> &MergeStack {
        &self.stack
    }

    /// The prime chart before essential primes were extracted.
    #[inline]
    pub fn chart(&self) -> &PrimeChart {
        &self.chart
    }

    #[inline]
    pub fn essential_primes(&self) -> &[Implicant] {
        &self.essential_primes
    }

    /// The prime chart after essential primes were extracted.
    #[inline]
    pub fn reduced_chart(&self) -> &PrimeChart {
        &self.reduced_chart
    }

    /// The primes picked by the cover search, if any minterms were left to cover.
    #[inline]
    pub fn optimal_primes(&self) -> &[Implicant] {
        &self.optimal_primes
    }

    #[inline]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    #[inline]
    pub fn into_cover(self) -> Cover {
        self.cover
    }
}

impl TruthTable {
    /// Minimizes a single output. An out-of-range output is entirely don't-care and minimizes
    /// to the empty cover.
    #[inline]
    pub fn minimize_output(&self, output: usize) -> OutputMinimization {
        OutputMinimization::new(self, output)
    }

    /// Minimizes every output in order.
    pub fn minimize_all(&self) -> Vec<OutputMinimization> {
        (0..self.output_count())
            .map(|output| self.minimize_output(output))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn minimized(rows: &[&[u8]], inputs: usize) -> String {
        let table = TruthTable::from_numeric(rows.iter().copied(), inputs, 1).unwrap();
        let result = table.minimize_output(0);
        assert_eq!(result.cover().check_implements(result.grid()), Ok(()));
        result.cover().algebraic_display().to_string()
    }

    #[test]
    fn test_or() {
        let table =
            TruthTable::from_numeric([[0, 0, 0], [0, 1, 1], [1, 0, 1], [1, 1, 1]], 2, 1).unwrap();
        let result = table.minimize_output(0);
        assert_eq!(result.output(), 0);
        assert_eq!(result.chart().prime_implicants().len(), 2);
        assert_eq!(result.essential_primes().len(), 2);
        assert!(result.optimal_primes().is_empty());
        assert!(result.reduced_chart().minterm_ids().is_empty());
        assert_eq!(result.cover().len(), 2);
        assert_eq!(result.cover().algebraic_display().to_string(), "A + B");
        assert_eq!(result.stack().stage_count(), 3);
    }

    #[test]
    fn test_basic_functions() {
        assert_eq!(minimized(&[&[1, 1, 1], &[2, 2, 0]], 2), "AB");
        assert_eq!(
            minimized(&[&[0, 1, 1], &[1, 0, 1], &[2, 2, 0]], 2),
            "AB' + A'B"
        );
        assert_eq!(minimized(&[&[2, 2, 0]], 2), "0");
        assert_eq!(minimized(&[&[2, 2, 1]], 2), "1");
        assert_eq!(minimized(&[], 2), "0");
    }

    #[test]
    fn test_dont_cares_widen_terms() {
        // 00 -> 1 and 11 -> 0 defined; the undefined 01 and 10 are free.
        let table = TruthTable::from_numeric([[0, 0, 1], [1, 1, 0]], 2, 1).unwrap();
        let result = table.minimize_output(0);
        let cover = result.cover();
        assert_eq!(cover.len(), 1);
        assert_eq!(cover.literal_cost(), 1);
        assert_eq!(cover.check_implements(result.grid()), Ok(()));
    }

    #[test]
    fn test_cyclic_function_needs_search() {
        let result = TruthTable::from_numeric(
            [
                [0, 0, 0, 1],
                [0, 0, 1, 1],
                [0, 1, 0, 1],
                [1, 0, 1, 1],
                [1, 1, 0, 1],
                [1, 1, 1, 1],
                [2, 2, 2, 0],
            ],
            3,
            1,
        )
        .unwrap()
        .minimize_output(0);
        assert!(result.essential_primes().is_empty());
        assert_eq!(result.optimal_primes().len(), 3);
        assert_eq!(result.cover().literal_cost(), 6);
        assert_eq!(result.cover().check_implements(result.grid()), Ok(()));
    }

    #[test]
    fn test_four_variables() {
        // f = Σ(0, 2, 5, 7, 8, 10, 13, 15) with A the least significant bit, which is A'C' + AC.
        let rows: Vec<Vec<u8>> = (0..16u8)
            .map(|n| {
                let bits: Vec<u8> = (0..4).map(|bit| (n >> bit) & 1).collect();
                let value = [0, 2, 5, 7, 8, 10, 13, 15].contains(&n) as u8;
                bits.into_iter().chain([value]).collect()
            })
            .collect();
        let table = TruthTable::from_numeric(rows, 4, 1).unwrap();
        let result = table.minimize_output(0);
        assert_eq!(result.cover().len(), 2);
        assert_eq!(result.cover().literal_cost(), 4);
        assert_eq!(result.cover().check_implements(result.grid()), Ok(()));
    }

    #[test]
    fn test_multiple_outputs() {
        // Outputs: AND, OR, and an undefined third column.
        let table = TruthTable::from_numeric(
            [
                [0, 0, 0, 0, 2],
                [0, 1, 0, 1, 2],
                [1, 0, 0, 1, 2],
                [1, 1, 1, 1, 2],
            ],
            2,
            3,
        )
        .unwrap();
        let results = table.minimize_all();
        let displays: Vec<_> = results
            .iter()
            .map(|result| result.cover().algebraic_display().to_string())
            .collect();
        assert_eq!(displays, vec!["AB", "A + B", "0"]);
        assert_eq!(results[2].output(), 2);

        // Past the last output, everything is don't-care.
        assert!(table.minimize_output(3).into_cover().is_empty());
    }
}
