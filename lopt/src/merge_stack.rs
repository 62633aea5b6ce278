// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The staged Quine–McCluskey merge.
//!
//! Stage 0 holds one implicant per true or don't-care cell of a [`Grid`], grouped by weight
//! (the number of true variables). Each round merges every pair of implicants taken from
//! adjacent weight groups of the latest stage into a new stage. Implicants that take part in a
//! merge lose their primality. Once a round produces nothing, every implicant still marked
//! prime is a prime implicant.

use crate::{grid::Grid, implicant::Implicant};
use log::{debug, trace};

/// Implicants of a single weight within a stage, without duplicates, in insertion order.
#[derive(Clone, Debug, Default)]
pub struct ImplicantGroup {
    implicants: Vec<Implicant>,
}

impl ImplicantGroup {
    /// Adds an implicant unless an equal one is already present. Returns true if it was added.
    pub fn add(&mut self, implicant: Implicant) -> bool {
        if self.implicants.contains(&implicant) {
            return false;
        }
        self.implicants.push(implicant);
        true
    }

    #[inline]
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Merges every implicant of `self` with every implicant of `other` (the next weight up),
    /// adding the results to `target` by weight.
    fn merge_into(&mut self, other: &mut ImplicantGroup, target: &mut [ImplicantGroup]) -> bool {
        let mut merged_any = false;
        for im1 in &mut self.implicants {
            for im2 in &mut other.implicants {
                if let Some(mut merged) = im1.try_merge(im2) {
                    im1.mark_prime(false);
                    im2.mark_prime(false);
                    merged.mark_prime(true);

                    let weight = merged.inputs_true_count();
                    target[weight].add(merged);
                    merged_any = true;
                }
            }
        }
        merged_any
    }
}

#[derive(Clone, Debug)]
pub struct MergeStack {
    variables: usize,
    // Always non-empty: stage 0 is built on construction.
    stages: Vec<Vec<ImplicantGroup>>,
}

impl MergeStack {
    /// Builds stage 0 out of every cell of `grid` that is not false.
    pub fn new(grid: &Grid) -> Self {
        let variables = grid.variable_count();
        let mut groups = vec![ImplicantGroup::default(); variables + 1];

        for (column, row) in grid.cells() {
            if grid.value_at(column, row).is_false() {
                continue;
            }
            let implicant = Implicant::from_cell(grid, column, row);
            let weight = implicant.inputs_true_count();
            groups[weight].add(implicant);
        }

        debug!(
            "initialized merge stack with {} implicants over {} variables",
            groups.iter().map(ImplicantGroup::len).sum::<usize>(),
            variables
        );

        Self {
            variables,
            stages: vec![groups],
        }
    }

    /// Runs one merge round, pushing a new stage. Returns true if anything merged.
    ///
    /// The new stage is pushed even if it ends up empty.
    pub fn try_merge(&mut self) -> bool {
        let group_count = self.variables + 1;
        let mut next = vec![ImplicantGroup::default(); group_count];

        let mut merged_any = false;
        if let Some(previous) = self.stages.last_mut() {
            for weight in 0..previous.len().saturating_sub(1) {
                let (lower, upper) = previous.split_at_mut(weight + 1);
                if lower[weight].merge_into(&mut upper[0], &mut next) {
                    merged_any = true;
                }
            }
        }

        trace!(
            "merge round {}: {} implicants produced",
            self.stages.len(),
            next.iter().map(ImplicantGroup::len).sum::<usize>()
        );
        self.stages.push(next);
        merged_any
    }

    /// Runs merge rounds until one produces nothing. Returns the number of productive rounds.
    pub fn merge_to_fixed_point(&mut self) -> usize {
        let mut rounds = 0;
        while self.try_merge() {
            rounds += 1;
        }
        debug!(
            "merge reached its fixed point after {} rounds ({} stages)",
            rounds,
            self.stage_count()
        );
        rounds
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    #[inline]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the group of implicants with the given weight in a stage, or `None` if either is
    /// out of range.
    pub fn implicant_set_for(&self, stage: usize, weight: usize) -> Option<&ImplicantGroup> {
        self.stages.get(stage)?.get(weight)
    }

    /// Returns the largest group size for `weight` across all stages.
    pub fn group_implicant_count(&self, weight: usize) -> usize {
        self.stages
            .iter()
            .filter_map(|stage| stage.get(weight))
            .map(ImplicantGroup::len)
            .max()
            .unwrap_or(0)
    }

    /// Iterates over every implicant in stage, weight and insertion order.
    pub fn implicants(&self) -> impl Iterator<Item = &Implicant> + '_ {
        self.stages
            .iter()
            .flatten()
            .flat_map(|group| group.implicants())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::truth_table::TruthTable;
    use test_log::test;

    fn implicant(numeric: &[u8]) -> Implicant {
        Implicant::from_numeric(numeric, []).unwrap()
    }

    fn or_stack() -> MergeStack {
        let table = TruthTable::from_numeric([[0, 0, 0], [0, 1, 1], [1, 0, 1], [1, 1, 1]], 2, 1)
            .unwrap();
        MergeStack::new(&Grid::new(&table, 0))
    }

    #[test]
    fn test_initialize() {
        let stack = or_stack();
        assert_eq!(stack.variable_count(), 2);
        assert_eq!(stack.stage_count(), 1);

        // The false cell 00 is left out.
        assert!(stack.implicant_set_for(0, 0).unwrap().is_empty());
        assert_eq!(
            stack.implicant_set_for(0, 1).unwrap().implicants(),
            &[implicant(&[1, 0]), implicant(&[0, 1])]
        );
        assert_eq!(
            stack.implicant_set_for(0, 2).unwrap().implicants(),
            &[implicant(&[1, 1])]
        );
    }

    #[test]
    fn test_initialize_keeps_dont_cares() {
        // Only 11 -> 1 is defined, everything else is don't-care.
        let table = TruthTable::from_numeric([[1, 1, 1]], 2, 1).unwrap();
        let stack = MergeStack::new(&Grid::new(&table, 0));
        assert_eq!(stack.implicants().count(), 4);
        let with_minterms: Vec<_> = stack
            .implicants()
            .filter(|im| !im.minterm_set().is_empty())
            .collect();
        assert_eq!(with_minterms, vec![&implicant(&[1, 1])]);
    }

    #[test]
    fn test_merge_rounds() {
        let mut stack = or_stack();

        assert!(stack.try_merge());
        assert_eq!(stack.stage_count(), 2);
        let merged = stack.implicant_set_for(1, 1).unwrap();
        assert_eq!(
            merged.implicants(),
            &[implicant(&[1, 2]), implicant(&[2, 1])]
        );
        assert!(merged.implicants().iter().all(Implicant::is_prime));
        assert_eq!(
            merged.implicants()[0]
                .minterm_set()
                .iter()
                .copied()
                .collect::<Vec<_>>(),
            vec![1, 3]
        );

        // Every stage 0 implicant took part in a merge.
        assert!(stack
            .implicant_set_for(0, 1)
            .unwrap()
            .implicants()
            .iter()
            .all(|im| !im.is_prime()));

        assert!(!stack.try_merge(), "1- and -1 cannot merge");
        assert_eq!(stack.stage_count(), 3);
        assert_eq!(stack.implicants().count(), 5);
    }

    #[test]
    fn test_fixed_point_dedups() {
        // All four cells are true: 0- and -0 merge into the same -- twice.
        let table = TruthTable::from_numeric([[2, 2, 1]], 2, 1).unwrap();
        let mut stack = MergeStack::new(&Grid::new(&table, 0));
        assert_eq!(stack.merge_to_fixed_point(), 2);
        assert_eq!(stack.stage_count(), 4);

        let top = stack.implicant_set_for(2, 0).unwrap();
        assert_eq!(top.implicants(), &[implicant(&[2, 2])]);
        assert_eq!(top.implicants()[0].minterm_set().len(), 4);
        assert!(top.implicants()[0].is_prime());

        assert_eq!(stack.group_implicant_count(0), 2);
        assert_eq!(stack.group_implicant_count(1), 2);
        assert_eq!(stack.group_implicant_count(2), 1);
    }

    #[test]
    fn test_out_of_range() {
        let stack = or_stack();
        assert!(stack.implicant_set_for(1, 0).is_none());
        assert!(stack.implicant_set_for(0, 3).is_none());
        assert_eq!(stack.group_implicant_count(3), 0);
    }

    #[test]
    fn test_group_add_dedups() {
        let mut group = ImplicantGroup::default();
        assert!(group.add(Implicant::from_numeric(&[1, 2], [1]).unwrap()));
        assert!(!group.add(Implicant::from_numeric(&[1, 2], [1, 3]).unwrap()));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_zero_variables() {
        let table = TruthTable::from_numeric([[1]], 0, 1).unwrap();
        let mut stack = MergeStack::new(&Grid::new(&table, 0));
        assert_eq!(stack.implicant_set_for(0, 0).unwrap().len(), 1);
        assert_eq!(stack.merge_to_fixed_point(), 0);
        assert_eq!(stack.stage_count(), 2);
    }
}
