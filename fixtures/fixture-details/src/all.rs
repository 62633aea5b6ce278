// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    known::{known_fixtures, KnownFixture},
    value_generator::ValueGenerator,
};
use color_eyre::{
    eyre::{bail, ensure},
    Result,
};
use log::{debug, info};
use lopt::truth_table::TruthTable;
use once_cell::sync::Lazy;
use proptest::prelude::*;

/// The largest input count accepted for random tables. The cover search is exponential.
pub const MAX_RANDOM_INPUTS: usize = 8;

pub struct AllFixtures {
    known: Vec<KnownFixture>,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let known = match known_fixtures() {
            Ok(known) => known,
            Err(err) => panic!("known fixtures are well-formed: {:?}", err),
        };
        Self { known }
    }

    #[inline]
    pub fn known(&self) -> &[KnownFixture] {
        &self.known
    }

    /// Checks every hand-written fixture.
    pub fn check_known(&self) -> Result<()> {
        for fixture in &self.known {
            fixture.check()?;
        }
        info!("{} known fixtures passed", self.known.len());
        Ok(())
    }

    /// Generates `count` random tables from `seed` and checks every minimized output against
    /// its grid.
    pub fn check_random(
        count: usize,
        inputs: usize,
        outputs: usize,
        seed: &str,
    ) -> Result<RandomSummary> {
        ensure!(
            inputs <= MAX_RANDOM_INPUTS,
            "at most {} inputs are supported for random tables, got {}",
            MAX_RANDOM_INPUTS,
            inputs
        );
        ensure!(
            inputs + outputs > 0,
            "random tables need at least one input or output"
        );

        let mut value_gen = ValueGenerator::from_seed(seed);
        let mut summary = RandomSummary::default();
        for table_ix in 0..count {
            let mut gen = value_gen.partial_clone();
            let table = gen.generate(any_with::<TruthTable>(Some((inputs, outputs))))?;
            for result in table.minimize_all() {
                let cover = result.cover();
                if let Err(assignment) = cover.check_implements(result.grid()) {
                    bail!(
                        "table {} (seed {:?}) output {}: cover {} is wrong at {:?}",
                        table_ix,
                        seed,
                        result.output(),
                        cover.algebraic_display(),
                        assignment
                    );
                }
                debug!(
                    "table {} output {}: {}",
                    table_ix,
                    result.output(),
                    cover.algebraic_display()
                );

                summary.outputs += 1;
                summary.terms += cover.len();
                summary.literals += cover.literal_cost();
                if cover.is_empty() {
                    summary.empty += 1;
                }
                if cover.is_tautology() {
                    summary.tautologies += 1;
                }
            }
            summary.tables += 1;
        }

        info!(
            "{} random tables passed: {} outputs, {} terms, {} literals ({} empty, {} tautologies)",
            summary.tables,
            summary.outputs,
            summary.terms,
            summary.literals,
            summary.empty,
            summary.tautologies
        );
        Ok(summary)
    }
}

/// Totals over a run of [`AllFixtures::check_random`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomSummary {
    pub tables: usize,
    pub outputs: usize,
    pub terms: usize,
    pub literals: usize,
    pub empty: usize,
    pub tautologies: usize,
}
