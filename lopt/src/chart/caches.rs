// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::implicant::Implicant;
use once_cell::sync::OnceCell;

/// Cache for chart data.
#[derive(Clone, Debug, Default)]
pub(super) struct ChartCache {
    coverage: OnceCell<Coverage>,
}

impl ChartCache {
    pub(super) fn invalidate(&mut self) {
        self.coverage = OnceCell::new();
    }

    pub(super) fn get_or_init_coverage(
        &self,
        primes: &[Implicant],
        minterms: &[usize],
    ) -> &Coverage {
        self.coverage.get_or_init(|| Coverage::new(primes, minterms))
    }
}

/// For each minterm of the chart (in chart order), the indexes of the primes covering it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct Coverage {
    covering: Vec<Vec<usize>>,
}

impl Coverage {
    fn new(primes: &[Implicant], minterms: &[usize]) -> Self {
        let covering = minterms
            .iter()
            .map(|&minterm| {
                primes
                    .iter()
                    .enumerate()
                    .filter_map(|(ix, prime)| prime.covers(minterm).then(|| ix))
                    .collect()
            })
            .collect();
        Self { covering }
    }

    #[inline]
    pub(super) fn for_minterm(&self, minterm_ix: usize) -> &[usize] {
        &self.covering[minterm_ix]
    }

    #[inline]
    pub(super) fn clauses(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.covering.iter().map(|primes| primes.as_slice())
    }
}
