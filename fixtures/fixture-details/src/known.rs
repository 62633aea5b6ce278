// Copyright (c) The lopt Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use color_eyre::{eyre::bail, Result};
use log::debug;
use lopt::truth_table::TruthTable;

/// A hand-written truth table along with the literal cost of each minimal output.
#[derive(Clone, Debug)]
pub struct KnownFixture {
    name: &'static str,
    table: TruthTable,
    literal_costs: Vec<usize>,
}

impl KnownFixture {
    pub fn new(
        name: &'static str,
        rows: &[&[u8]],
        inputs: usize,
        outputs: usize,
        literal_costs: Vec<usize>,
    ) -> Result<Self> {
        let table = TruthTable::from_numeric(rows.iter().copied(), inputs, outputs)?;
        if literal_costs.len() != outputs {
            bail!(
                "fixture {}: {} literal costs for {} outputs",
                name,
                literal_costs.len(),
                outputs
            );
        }
        Ok(Self {
            name,
            table,
            literal_costs,
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    #[inline]
    pub fn literal_costs(&self) -> &[usize] {
        &self.literal_costs
    }

    /// Minimizes every output and checks it against the grid and the expected cost.
    pub fn check(&self) -> Result<()> {
        for (result, &expected) in self.table.minimize_all().iter().zip(&self.literal_costs) {
            let cover = result.cover();
            if let Err(assignment) = cover.check_implements(result.grid()) {
                bail!(
                    "fixture {} output {}: cover {} is wrong at {:?}",
                    self.name,
                    result.output(),
                    cover.algebraic_display(),
                    assignment
                );
            }
            if cover.literal_cost() != expected {
                bail!(
                    "fixture {} output {}: cover {} has {} literals, expected {}",
                    self.name,
                    result.output(),
                    cover.algebraic_display(),
                    cover.literal_cost(),
                    expected
                );
            }
            debug!(
                "fixture {} output {}: {}",
                self.name,
                result.output(),
                cover.algebraic_display()
            );
        }
        Ok(())
    }
}

pub(crate) fn known_fixtures() -> Result<Vec<KnownFixture>> {
    Ok(vec![
        KnownFixture::new(
            "and2",
            &[&[0, 0, 0], &[0, 1, 0], &[1, 0, 0], &[1, 1, 1]],
            2,
            1,
            vec![2],
        )?,
        KnownFixture::new(
            "or2",
            &[&[0, 0, 0], &[0, 1, 1], &[1, 0, 1], &[1, 1, 1]],
            2,
            1,
            vec![2],
        )?,
        KnownFixture::new(
            "half-adder",
            &[&[0, 0, 0, 0], &[0, 1, 1, 0], &[1, 0, 1, 0], &[1, 1, 0, 1]],
            2,
            2,
            vec![4, 2],
        )?,
        KnownFixture::new(
            "full-adder",
            &[
                &[0, 0, 0, 0, 0],
                &[0, 0, 1, 1, 0],
                &[0, 1, 0, 1, 0],
                &[0, 1, 1, 0, 1],
                &[1, 0, 0, 1, 0],
                &[1, 0, 1, 0, 1],
                &[1, 1, 0, 0, 1],
                &[1, 1, 1, 1, 1],
            ],
            3,
            2,
            vec![12, 6],
        )?,
        KnownFixture::new(
            "cyclic3",
            &[
                &[0, 0, 0, 1],
                &[0, 0, 1, 1],
                &[0, 1, 0, 1],
                &[1, 0, 1, 1],
                &[1, 1, 0, 1],
                &[1, 1, 1, 1],
                &[2, 2, 2, 0],
            ],
            3,
            1,
            vec![6],
        )?,
        KnownFixture::new("partial2", &[&[0, 0, 1], &[1, 1, 0]], 2, 1, vec![1])?,
        KnownFixture::new("constants", &[&[2, 2, 2, 1, 0]], 3, 2, vec![0, 0])?,
        KnownFixture::new("undefined", &[], 4, 1, vec![0])?,
    ])
}
