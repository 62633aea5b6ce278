// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    caches::{ChartCache, Coverage},
    petrick::SumOfProducts,
};
use crate::{implicant::Implicant, merge_stack::MergeStack};
use log::{debug, warn};
use std::collections::BTreeSet;

/// The prime implicant chart: prime implicants against the minterms they cover.
#[derive(Clone, Debug)]
pub struct PrimeChart {
    variables: usize,
    primes: Vec<Implicant>,
    minterms: Vec<usize>,
    cache: ChartCache,
}

impl PrimeChart {
    /// Collects the prime implicants of a finished merge stack.
    ///
    /// Primes are kept in stage, weight and group order. Primes that only cover don't-care
    /// cells are left out. Minterm ids are in ascending order.
    pub fn new(stack: &MergeStack) -> Self {
        let mut primes: Vec<Implicant> = Vec::new();
        let mut minterms = BTreeSet::new();

        for stage in 0..stack.stage_count() {
            for weight in 0..=stack.variable_count() {
                let group = match stack.implicant_set_for(stage, weight) {
                    Some(group) => group,
                    None => continue,
                };
                for implicant in group.implicants() {
                    if !implicant.is_prime()
                        || implicant.minterm_set().is_empty()
                        || primes.contains(implicant)
                    {
                        continue;
                    }
                    minterms.extend(implicant.minterm_set().iter().copied());
                    primes.push(implicant.clone());
                }
            }
        }

        debug!(
            "prime chart: {} primes over {} minterms",
            primes.len(),
            minterms.len()
        );

        Self {
            variables: stack.variable_count(),
            primes,
            minterms: minterms.into_iter().collect(),
            cache: ChartCache::default(),
        }
    }

    /// Removes the essential prime implicants from the chart and returns them.
    ///
    /// A prime is essential if it is the only one covering some minterm. Every minterm covered
    /// by an essential prime is removed from the chart as well.
    pub fn extract_essential_primes(&mut self) -> Vec<Implicant> {
        let mut essential: Vec<Implicant> = Vec::new();
        {
            let coverage = self.coverage();
            for minterm_ix in 0..self.minterms.len() {
                if let &[prime_ix] = coverage.for_minterm(minterm_ix) {
                    let prime = &self.primes[prime_ix];
                    if !essential.contains(prime) {
                        essential.push(prime.clone());
                    }
                }
            }
        }

        if essential.is_empty() {
            return essential;
        }

        self.primes.retain(|prime| !essential.contains(prime));
        self.minterms
            .retain(|&minterm| !essential.iter().any(|epi| epi.covers(minterm)));
        self.cache.invalidate();

        debug!(
            "extracted {} essential primes, {} primes and {} minterms remain",
            essential.len(),
            self.primes.len(),
            self.minterms.len()
        );
        essential
    }

    /// Finds the cheapest set of remaining primes that covers every remaining minterm.
    ///
    /// Cost is the total literal count. Among equally cheap covers, the first one produced
    /// while multiplying out the clauses wins (minterms in ascending order, primes in chart
    /// order). Returns nothing if no minterms remain.
    ///
    /// The number of intermediate products is exponential in the worst case.
    pub fn find_optimal_primes(&self) -> Vec<Implicant> {
        if self.minterms.is_empty() {
            return Vec::new();
        }

        let mut sop = SumOfProducts::new(self.primes.len());
        for clause in self.coverage().clauses() {
            sop.multiply(clause);
        }
        sop.absorb();

        match sop.cheapest(|prime_ix| self.primes[prime_ix].relevant_input_count()) {
            Some(term) => {
                let optimal: Vec<_> = term
                    .iter_ones()
                    .map(|prime_ix| self.primes[prime_ix].clone())
                    .collect();
                debug!(
                    "cover search picked {} of {} primes out of {} candidate products",
                    optimal.len(),
                    self.primes.len(),
                    sop.terms().len()
                );
                optimal
            }
            None => {
                warn!(
                    "no prime covers some of the minterms {:?}, cover search gave up",
                    self.minterms
                );
                Vec::new()
            }
        }
    }

    #[inline]
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.primes
    }

    #[inline]
    pub fn minterm_ids(&self) -> &[usize] {
        &self.minterms
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Returns the primes covering `minterm`, in chart order.
    pub fn covering_primes(&self, minterm: usize) -> impl Iterator<Item = &Implicant> + '_ {
        let covering = match self.minterms.iter().position(|&m| m == minterm) {
            Some(minterm_ix) => self.coverage().for_minterm(minterm_ix),
            None => &[],
        };
        covering.iter().map(move |&prime_ix| &self.primes[prime_ix])
    }

    #[inline]
    fn coverage(&self) -> &Coverage {
        self.cache.get_or_init_coverage(&self.primes, &self.minterms)
    }
}
