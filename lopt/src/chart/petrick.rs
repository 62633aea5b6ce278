// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exact cover of the remaining minterms, in the manner of Petrick's method.
//!
//! Each minterm contributes a clause: the sum of the primes that cover it. Multiplying the
//! clauses out gives a sum of products where each product is a set of primes covering every
//! minterm. Products are kept as bit sets indexed by prime position in the chart.

use bitvec::prelude::*;
use itertools::Itertools;

#[derive(Clone, Debug)]
pub(super) struct SumOfProducts {
    prime_count: usize,
    terms: Vec<BitVec>,
}

impl SumOfProducts {
    /// The empty product, selecting no primes.
    pub(super) fn new(prime_count: usize) -> Self {
        Self {
            prime_count,
            terms: vec![bitvec![0; prime_count]],
        }
    }

    /// Multiplies every current term by a clause of prime indexes.
    ///
    /// New terms are produced with the existing term as the outer loop and the clause as the
    /// inner one. Duplicates keep their first position. Call [`absorb`](Self::absorb) only once
    /// every clause is in: equally cheap terms must stay in full expansion order.
    pub(super) fn multiply(&mut self, clause: &[usize]) {
        let mut next: Vec<BitVec> = Vec::with_capacity(self.terms.len() * clause.len());
        for (term, &prime_ix) in self.terms.iter().cartesian_product(clause) {
            debug_assert!(prime_ix < self.prime_count, "prime index in range");
            let mut product = term.clone();
            product.set(prime_ix, true);
            if !next.contains(&product) {
                next.push(product);
            }
        }
        self.terms = next;
    }

    #[inline]
    pub(super) fn terms(&self) -> &[BitVec] {
        &self.terms
    }

    /// Returns the first term with the lowest total cost, or `None` if there are no terms.
    pub(super) fn cheapest(&self, cost: impl Fn(usize) -> usize) -> Option<&BitVec> {
        self.terms
            .iter()
            .min_by_key(|term| term.iter_ones().map(&cost).sum::<usize>())
    }

    /// Drops every term that contains another term, keeping the order of the rest.
    pub(super) fn absorb(&mut self) {
        let terms = std::mem::take(&mut self.terms);
        self.terms = terms
            .iter()
            .enumerate()
            .filter(|&(ix, term)| {
                !terms
                    .iter()
                    .enumerate()
                    .any(|(other_ix, other)| other_ix != ix && is_subset(other, term))
            })
            .map(|(_, term)| term.clone())
            .collect();
    }
}

fn is_subset(a: &BitSlice, b: &BitSlice) -> bool {
    a.iter_ones().all(|ix| b[ix])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(term: &BitSlice) -> Vec<usize> {
        term.iter_ones().collect()
    }

    #[test]
    fn test_distribute_and_absorb() {
        let mut sop = SumOfProducts::new(3);
        sop.multiply(&[0, 1]);
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0], vec![1]]
        );

        // (0 + 1)(1 + 2) = 01 + 02 + 1 + 12, and 1 absorbs 01 and 12.
        sop.multiply(&[1, 2]);
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0, 1], vec![0, 2], vec![1], vec![1, 2]]
        );
        sop.absorb();
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0, 2], vec![1]]
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut sop = SumOfProducts::new(2);
        sop.multiply(&[0, 1]);
        sop.multiply(&[0, 1]);
        // 01 is produced twice but kept once.
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0], vec![0, 1], vec![1]]
        );
        sop.absorb();
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0], vec![1]]
        );
    }

    #[test]
    fn test_cheapest_ties_go_to_first() {
        let mut sop = SumOfProducts::new(3);
        sop.multiply(&[0, 1]);
        sop.multiply(&[1, 2]);
        sop.absorb();

        let costs = [1, 2, 1];
        let cheapest = sop.cheapest(|ix| costs[ix]).unwrap();
        assert_eq!(ones(cheapest), vec![0, 2]);

        let costs = [2, 1, 2];
        let cheapest = sop.cheapest(|ix| costs[ix]).unwrap();
        assert_eq!(ones(cheapest), vec![1]);
    }

    #[test]
    fn test_tie_follows_full_expansion_order() {
        // Absorbing after the second clause would drop the early 01 and let 02 win.
        let mut sop = SumOfProducts::new(4);
        let clauses: [&[usize]; 3] = [&[0, 1], &[1, 2], &[0, 3]];
        for clause in clauses {
            sop.multiply(clause);
        }
        sop.absorb();
        assert_eq!(
            sop.terms().iter().map(|t| ones(t)).collect::<Vec<_>>(),
            vec![vec![0, 1], vec![0, 2], vec![1, 3]]
        );
        assert_eq!(ones(sop.cheapest(|_| 1).unwrap()), vec![0, 1]);
    }

    #[test]
    fn test_empty_clause() {
        let mut sop = SumOfProducts::new(2);
        sop.multiply(&[]);
        assert!(sop.terms().is_empty());
        assert!(sop.cheapest(|_| 1).is_none());
    }
}
